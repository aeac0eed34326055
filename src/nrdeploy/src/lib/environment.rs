use crate::lib::error::NrResult;
use anyhow::Context;
use nrdeploy_core::deploy::FlowDeployer;
use nrdeploy_core::http::AdminClient;
use std::path::{Path, PathBuf};
use url::Url;

pub trait Environment {
    fn get_logger(&self) -> &slog::Logger;

    /// Base URL of the Node-RED admin API.
    fn get_admin_url(&self) -> &Url;

    fn get_flow_file(&self) -> &Path;

    fn new_deployer(&self) -> NrResult<FlowDeployer> {
        let client = AdminClient::new(self.get_admin_url()).with_context(|| {
            format!(
                "Failed to create a client for the admin API at {}.",
                self.get_admin_url()
            )
        })?;
        Ok(FlowDeployer::new(client, self.get_logger().clone()))
    }
}

pub struct EnvironmentImpl {
    admin_url: Url,
    flow_file: PathBuf,
    logger: slog::Logger,
}

impl EnvironmentImpl {
    pub fn new(admin_url: Url, flow_file: PathBuf) -> Self {
        EnvironmentImpl {
            admin_url,
            flow_file,
            logger: slog::Logger::root(slog::Discard, slog::o!()),
        }
    }

    pub fn with_logger(mut self, logger: slog::Logger) -> Self {
        self.logger = logger;
        self
    }
}

impl Environment for EnvironmentImpl {
    fn get_logger(&self) -> &slog::Logger {
        &self.logger
    }

    fn get_admin_url(&self) -> &Url {
        &self.admin_url
    }

    fn get_flow_file(&self) -> &Path {
        &self.flow_file
    }
}
