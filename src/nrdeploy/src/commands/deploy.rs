use crate::lib::environment::Environment;
use crate::lib::error::NrResult;
use clap::Parser;
use slog::info;

/// Deploys the flow file without waiting for it to start.
#[derive(Parser)]
pub struct DeployOpts {}

pub fn exec(env: &dyn Environment, _opts: DeployOpts) -> NrResult {
    let deployer = env.new_deployer()?;
    info!(
        env.get_logger(),
        "Deploying {} to {}...",
        env.get_flow_file().display(),
        deployer.client().flows_url()
    );
    deployer.deploy(env.get_flow_file());
    Ok(())
}
