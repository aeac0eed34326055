//! Blocking client for the `/flows` endpoint of the Node-RED admin API.
use crate::error::admin_api::{AdminApiError, BuildAdminClientError};
use crate::error::reqwest::WrappedReqwestError;
use crate::flow::{DeployPayload, FlowSet};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;
use url::Url;

pub const API_VERSION_HEADER: &str = "node-red-api-version";

/// Selects the `{rev, flows}` response shape of `GET /flows`.
pub const API_VERSION: &str = "v2";

/// Outcome of `GET /flows` that reached the server.
#[derive(Debug)]
pub enum FlowsReply {
    Current(FlowSet),
    Unavailable(StatusCode),
}

pub struct AdminClient {
    client: Client,
    flows_url: Url,
}

impl AdminClient {
    pub fn new(base_url: &Url) -> Result<Self, BuildAdminClientError> {
        let flows_url = flows_url(base_url)?;
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(API_VERSION_HEADER),
            HeaderValue::from_static(API_VERSION),
        );
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|err| BuildAdminClientError::BuildHttpClient(WrappedReqwestError(err)))?;
        Ok(AdminClient { client, flows_url })
    }

    pub fn flows_url(&self) -> &Url {
        &self.flows_url
    }

    pub fn get_flows(&self) -> Result<FlowsReply, AdminApiError> {
        let response = self
            .client
            .get(self.flows_url.clone())
            .send()
            .map_err(|err| self.request_failed(err))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Ok(FlowsReply::Unavailable(status));
        }

        let body = response.bytes().map_err(|err| AdminApiError::ReadBody {
            url: self.flows_url.clone(),
            source: WrappedReqwestError(err),
        })?;
        let flow_set =
            serde_json::from_slice(&body).map_err(|source| AdminApiError::DecodeFlows {
                url: self.flows_url.clone(),
                source,
            })?;
        Ok(FlowsReply::Current(flow_set))
    }

    /// Replaces the deployed flows. Anything but `200 OK` is a rejection.
    pub fn post_flows(&self, payload: &DeployPayload) -> Result<(), AdminApiError> {
        let body = serde_json::to_vec(payload).map_err(AdminApiError::EncodePayload)?;
        let response = self
            .client
            .post(self.flows_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .map_err(|err| self.request_failed(err))?;

        let status = response.status();
        if status == StatusCode::OK {
            Ok(())
        } else {
            let body = rejection_body(response.text());
            Err(AdminApiError::Rejected { status, body })
        }
    }

    fn request_failed(&self, err: reqwest::Error) -> AdminApiError {
        AdminApiError::Request {
            url: self.flows_url.clone(),
            source: WrappedReqwestError(err),
        }
    }
}

// An unreadable body must not leave the diagnostic blank.
fn rejection_body(body: reqwest::Result<String>) -> String {
    body.unwrap_or_else(|err| format!("<failed to read response body: {err}>"))
}

fn flows_url(base_url: &Url) -> Result<Url, BuildAdminClientError> {
    let mut base = base_url.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join("flows")
        .map_err(|source| BuildAdminClientError::InvalidBaseUrl {
            url: base_url.clone(),
            source,
        })
}
