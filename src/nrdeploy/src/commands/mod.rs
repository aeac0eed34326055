use crate::lib::environment::Environment;
use crate::lib::error::NrResult;
use clap::Subcommand;

mod deploy;
mod run;
mod status;

#[derive(Subcommand)]
pub enum NrCommand {
    Deploy(deploy::DeployOpts),
    Run(run::RunOpts),
    Status(status::StatusOpts),
}

/// Runs `cmd`, or the full deploy-then-status sequence when none was given.
pub fn exec(env: &dyn Environment, cmd: Option<NrCommand>) -> NrResult {
    match cmd.unwrap_or(NrCommand::Run(run::RunOpts {})) {
        NrCommand::Deploy(v) => deploy::exec(env, v),
        NrCommand::Run(v) => run::exec(env, v),
        NrCommand::Status(v) => status::exec(env, v),
    }
}

#[cfg(test)]
mod tests {
    use super::{deploy, exec, status, NrCommand};
    use crate::lib::environment::EnvironmentImpl;
    use std::path::PathBuf;
    use url::Url;

    fn env_for(server: &mockito::ServerGuard, flow_file: PathBuf) -> EnvironmentImpl {
        EnvironmentImpl::new(Url::parse(&server.url()).unwrap(), flow_file)
    }

    #[test]
    fn deploy_command_posts_the_flow_file() {
        let mut server = mockito::Server::new();
        let dir = tempfile::tempdir().unwrap();
        let flow_file = dir.path().join("test-flow.json");
        std::fs::write(&flow_file, r#"[{"type": "tab", "label": "Main"}]"#).unwrap();
        let _get = server.mock("GET", "/flows").with_status(404).create();
        let post = server.mock("POST", "/flows").with_status(200).create();

        let env = env_for(&server, flow_file);
        exec(&env, Some(NrCommand::Deploy(deploy::DeployOpts {}))).unwrap();

        post.assert();
    }

    #[test]
    fn failed_operations_do_not_fail_the_command() {
        let mut server = mockito::Server::new();
        let _get = server.mock("GET", "/flows").with_status(500).create();
        let env = env_for(&server, PathBuf::from("/nonexistent/test-flow.json"));

        assert!(exec(&env, Some(NrCommand::Deploy(deploy::DeployOpts {}))).is_ok());
        assert!(exec(&env, Some(NrCommand::Status(status::StatusOpts {}))).is_ok());
    }

    #[test]
    fn run_stops_after_a_failed_deploy() {
        let mut server = mockito::Server::new();
        let dir = tempfile::tempdir().unwrap();
        let flow_file = dir.path().join("test-flow.json");
        std::fs::write(&flow_file, "[]").unwrap();
        let get = server.mock("GET", "/flows").with_status(200).with_body("[]").expect(1).create();
        let _post = server.mock("POST", "/flows").with_status(400).create();

        let env = env_for(&server, flow_file);
        exec(&env, None).unwrap();

        get.assert();
    }
}
