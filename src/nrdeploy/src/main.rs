#![allow(special_module_name)]
use crate::lib::environment::{Environment, EnvironmentImpl};
use crate::lib::error::NrResult;
use crate::lib::logger::{create_root_logger, LoggingMode};
use anyhow::Error;
use clap::{ArgAction, Parser};
use console::style;
use std::path::PathBuf;
use url::Url;

mod commands;
mod lib;

const DEFAULT_ADMIN_URL: &str = "http://localhost:1880";
const DEFAULT_FLOW_FILE: &str = "test-flow.json";

/// Deploys a flow definition to a running Node-RED instance and reports what it runs.
#[derive(Parser)]
#[command(name = "nrdeploy", version)]
pub struct CliOpts {
    /// Displays detailed information about operations. -vv shows every request.
    #[arg(long, short, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppresses informational messages. -qq limits to errors only; -qqqq disables them all.
    #[arg(long, short, action = ArgAction::Count, global = true)]
    quiet: u8,

    /// The logging mode to use. You can log to stderr, a file, or both.
    #[arg(long = "log", default_value = "stderr", value_parser = ["stderr", "tee", "file"], global = true)]
    logmode: String,

    /// The file to log to, if logging to a file (see --log).
    #[arg(long, global = true)]
    logfile: Option<PathBuf>,

    /// Base URL of the Node-RED admin API.
    #[arg(long, env = "NODE_RED_URL", default_value = DEFAULT_ADMIN_URL, global = true)]
    url: Url,

    /// The JSON file holding the node descriptors to deploy.
    #[arg(long, env = "NODE_RED_FLOW_FILE", default_value = DEFAULT_FLOW_FILE, global = true)]
    flow_file: PathBuf,

    #[command(subcommand)]
    command: Option<commands::NrCommand>,
}

/// Setup a logger with the proper configuration, based on arguments.
fn setup_logging(opts: &CliOpts) -> NrResult<slog::Logger> {
    let verbose_level = opts.verbose as i64 - opts.quiet as i64;
    let logfile = || opts.logfile.clone().unwrap_or_else(|| PathBuf::from("log.txt"));

    let mode = match opts.logmode.as_str() {
        "tee" => LoggingMode::Tee(logfile()),
        "file" => LoggingMode::File(logfile()),
        _ => LoggingMode::Stderr,
    };

    create_root_logger(verbose_level, mode)
}

fn print_error(err: &Error) {
    for (level, cause) in err.chain().enumerate() {
        let prefix = if level == 0 {
            style("Error").red()
        } else {
            style("Caused by").yellow()
        };
        eprintln!("{prefix}: {cause}");
    }
}

fn inner_main() -> NrResult {
    let cli_opts = CliOpts::parse();
    let log = setup_logging(&cli_opts)?;

    let env = EnvironmentImpl::new(cli_opts.url, cli_opts.flow_file).with_logger(log);

    slog::trace!(
        env.get_logger(),
        "Trace mode enabled. Lots of logs coming up."
    );
    commands::exec(&env, cli_opts.command)
}

fn main() {
    if let Err(err) = inner_main() {
        print_error(&err);
        std::process::exit(255);
    }
}
