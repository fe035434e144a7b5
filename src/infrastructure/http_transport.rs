use std::error::Error;
use std::fmt::Write;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::application::ports::{ApiError, HttpResponse, HttpTransport};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub struct ReqwestTransport {
    client: Client,
    timeout: Duration,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Transport(error_chain(&e)))?;
        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl HttpTransport for ReqwestTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, ApiError> {
        let response = self.client.get(url).send().map_err(|e| {
            ApiError::Transport(format!("failed to make request: {}", error_chain(&e)))
        })?;

        let status = response.status().as_u16();
        let body = response.text().map_err(|e| {
            ApiError::Transport(format!("failed to read response body: {}", error_chain(&e)))
        })?;

        Ok(HttpResponse { status, body })
    }
}

/// `reqwest` keeps the useful part (refused, dns, timed out) in `source()`,
/// so join the whole chain.
fn error_chain(err: &dyn Error) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let _ = write!(text, ": {cause}");
        source = cause.source();
    }
    text
}
