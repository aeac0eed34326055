use crate::lib::environment::Environment;
use crate::lib::error::NrResult;
use clap::Parser;
use slog::{error, info};
use std::thread;
use std::time::Duration;
use url::Url;

/// How long Node-RED gets to start a freshly deployed flow before its status is read.
const FLOW_SETTLE_DELAY: Duration = Duration::from_secs(5);

/// Deploys the flow file, waits for it to start, then prints the deployed nodes.
/// This is what runs when no subcommand is given.
#[derive(Parser)]
pub struct RunOpts {}

pub fn exec(env: &dyn Environment, _opts: RunOpts) -> NrResult {
    run_with_delay(env, FLOW_SETTLE_DELAY)
}

fn run_with_delay(env: &dyn Environment, settle_delay: Duration) -> NrResult {
    let log = env.get_logger();
    let deployer = env.new_deployer()?;

    info!(
        log,
        "Deploying {} to Node-RED...",
        env.get_flow_file().display()
    );
    if !deployer.deploy(env.get_flow_file()) {
        error!(log, "Failed to deploy flow.");
        return Ok(());
    }

    info!(log, "Waiting for flow to initialize...");
    thread::sleep(settle_delay);
    info!(log, "Checking flow status...");
    deployer.get_flow_status();

    info!(
        log,
        "Flow deployed successfully! You can now view the results in Node-RED's debug panel."
    );
    info!(log, "Access Node-RED at: {}", access_url(env.get_admin_url()));
    info!(
        log,
        "Make sure to click the 'Deploy' button in the Node-RED UI to activate the flow."
    );
    Ok(())
}

/// The editor URL as a user would type it, without the slash `Url` appends to a bare host.
fn access_url(url: &Url) -> &str {
    url.as_str().trim_end_matches('/')
}
