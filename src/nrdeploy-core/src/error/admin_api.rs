use crate::error::reqwest::WrappedReqwestError;
use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum BuildAdminClientError {
    #[error("Cannot use {url} as the base of the admin API")]
    InvalidBaseUrl {
        url: Url,
        #[source]
        source: url::ParseError,
    },

    #[error("Failed to build the HTTP client")]
    BuildHttpClient(#[source] WrappedReqwestError),
}

#[derive(Error, Debug)]
pub enum AdminApiError {
    #[error("Request to {url} failed")]
    Request {
        url: Url,
        #[source]
        source: WrappedReqwestError,
    },

    #[error("Failed to read the response body from {url}")]
    ReadBody {
        url: Url,
        #[source]
        source: WrappedReqwestError,
    },

    #[error("Failed to decode the flow set returned by {url}")]
    DecodeFlows {
        url: Url,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode the deploy payload")]
    EncodePayload(#[source] serde_json::Error),

    #[error("Node-RED rejected the request with status {}", .status.as_u16())]
    Rejected { status: StatusCode, body: String },
}
