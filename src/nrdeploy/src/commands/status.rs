use crate::lib::environment::Environment;
use crate::lib::error::NrResult;
use clap::Parser;

/// Prints the nodes Node-RED is currently running.
#[derive(Parser)]
pub struct StatusOpts {}

pub fn exec(env: &dyn Environment, _opts: StatusOpts) -> NrResult {
    env.new_deployer()?.get_flow_status();
    Ok(())
}
