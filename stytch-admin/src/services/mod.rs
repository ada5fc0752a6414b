pub mod management;
pub mod stytch;

pub use management::ManagementClient;
pub use stytch::StytchClient;

use admin_core::error::RemoteError;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Status and untouched body of a successful API call.
#[derive(Debug, Clone)]
pub struct RemoteResponse {
    pub status: StatusCode,
    pub body: String,
}

impl RemoteResponse {
    pub fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// Without a timeout the reqwest defaults apply.
pub(crate) fn build_http_client(timeout: Option<Duration>) -> Result<Client, RemoteError> {
    let builder = Client::builder().user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));

    let builder = match timeout {
        Some(timeout) => builder.timeout(timeout),
        None => builder,
    };

    Ok(builder.build()?)
}

/// Turn a finished request into a `RemoteResponse`, or classify the failure.
pub(crate) async fn read_response(
    response: reqwest::Response,
    operation: &str,
) -> Result<RemoteResponse, RemoteError> {
    let status = response.status();
    let body = response.text().await?;

    tracing::debug!(status = %status, operation, "Stytch response received");

    if status.is_success() {
        Ok(RemoteResponse { status, body })
    } else {
        let error = RemoteError::from_response(status.as_u16(), &body);
        tracing::warn!(status = %status, operation, "Stytch request failed");
        Err(error)
    }
}
