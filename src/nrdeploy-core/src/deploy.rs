//! The two steps of a deployment: pushing a flow file, then reading back
//! what Node-RED is running.
//!
//! `deploy` and `get_flow_status` never fail: every error is logged and
//! turned into `false`. Use the `try_` variants to get the error itself.
use crate::error::admin_api::AdminApiError;
use crate::error::deploy::{DeployFlowError, FlowStatusError};
use crate::error::display_chain;
use crate::flow::{DeployPayload, FlowSummary, NodeDescriptor};
use crate::http::{AdminClient, FlowsReply};
use crate::json::load_json_file;
use slog::{debug, error, info, Logger};
use std::path::Path;

pub struct FlowDeployer {
    client: AdminClient,
    logger: Logger,
}

impl FlowDeployer {
    pub fn new(client: AdminClient, logger: Logger) -> Self {
        FlowDeployer { client, logger }
    }

    pub fn client(&self) -> &AdminClient {
        &self.client
    }

    pub fn deploy(&self, flow_file: &Path) -> bool {
        match self.try_deploy(flow_file) {
            Ok(()) => {
                info!(self.logger, "Flow deployed successfully!");
                true
            }
            Err(DeployFlowError::PostFlows(AdminApiError::Rejected { status, body })) => {
                error!(self.logger, "Failed to deploy flow: {}", status.as_u16());
                error!(self.logger, "{}", body);
                false
            }
            Err(err) => {
                error!(self.logger, "Error deploying flow: {}", display_chain(&err));
                false
            }
        }
    }

    /// Posts the descriptors in `flow_file`, tagged with the current revision
    /// when Node-RED hands one out.
    pub fn try_deploy(&self, flow_file: &Path) -> Result<(), DeployFlowError> {
        let flows: Vec<NodeDescriptor> = load_json_file(flow_file)?;
        debug!(
            self.logger,
            "Loaded {} node descriptors from {}",
            flows.len(),
            flow_file.display()
        );

        let rev = match self
            .client
            .get_flows()
            .map_err(DeployFlowError::FetchRevision)?
        {
            FlowsReply::Current(flow_set) => flow_set.rev,
            FlowsReply::Unavailable(status) => {
                debug!(
                    self.logger,
                    "Could not read the current revision (status {}), deploying without one",
                    status.as_u16()
                );
                None
            }
        };
        if let Some(rev) = &rev {
            debug!(self.logger, "Deploying on top of revision {}", rev);
        }

        self.client
            .post_flows(&DeployPayload { flows, rev })
            .map_err(DeployFlowError::PostFlows)
    }

    pub fn get_flow_status(&self) -> bool {
        match self.try_flow_status() {
            Ok(summary) => {
                // Same drain as the progress lines, so the output keeps its order.
                for line in summary.to_string().lines() {
                    info!(self.logger, "{}", line);
                }
                true
            }
            Err(err @ FlowStatusError::Unavailable(_)) => {
                error!(self.logger, "{}", err);
                false
            }
            Err(err) => {
                error!(self.logger, "Error getting flow status: {}", display_chain(&err));
                false
            }
        }
    }

    pub fn try_flow_status(&self) -> Result<FlowSummary, FlowStatusError> {
        match self.client.get_flows().map_err(FlowStatusError::FetchFlows)? {
            FlowsReply::Current(flow_set) => Ok(flow_set.summary()),
            FlowsReply::Unavailable(status) => Err(FlowStatusError::Unavailable(status)),
        }
    }
}
