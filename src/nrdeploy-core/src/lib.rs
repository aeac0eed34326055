pub mod deploy;
pub mod error;
pub mod flow;
pub mod fs;
pub mod http;
pub mod json;
