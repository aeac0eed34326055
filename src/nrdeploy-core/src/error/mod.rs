use std::error::Error;

pub mod admin_api;
pub mod deploy;
pub mod fs;
pub mod reqwest;
pub mod structured_file;

/// Renders an error followed by each of its sources, separated by ": ".
pub fn display_chain(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
