use crate::error::admin_api::AdminApiError;
use crate::error::structured_file::StructuredFileError;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeployFlowError {
    #[error("Failed to load flow file")]
    LoadFlowFile(#[from] StructuredFileError),

    #[error("Failed to fetch the current flow revision")]
    FetchRevision(#[source] AdminApiError),

    #[error("Failed to post flows")]
    PostFlows(#[source] AdminApiError),
}

#[derive(Error, Debug)]
pub enum FlowStatusError {
    #[error("Failed to get flows: {}", .0.as_u16())]
    Unavailable(StatusCode),

    #[error("Failed to fetch flows")]
    FetchFlows(#[source] AdminApiError),
}
