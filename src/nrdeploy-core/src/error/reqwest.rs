use thiserror::Error;

// reqwest::Error's Display stops at its own message. Being transparent exposes
// the underlying cause (refused connection, DNS failure) to display_chain.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct WrappedReqwestError(pub reqwest::Error);
