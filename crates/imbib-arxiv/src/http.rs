//! Blocking HTTP transport for the CLI and the DOI resolver

use std::collections::HashMap;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use thiserror::Error;

use crate::error::ArxivError;

pub const DEFAULT_USER_AGENT: &str = "imbib/1.0 (https://imbib.app)";

#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {message}")]
    RequestFailed { message: String },
    #[error("Unexpected status {status} for {url}")]
    Status { status: u16, url: String },
    #[error("Timeout")]
    Timeout,
    #[error("Rate limited")]
    RateLimited,
    #[error("Parse error: {message}")]
    ParseError { message: String },
    #[error(transparent)]
    Feed(#[from] ArxivError),
}

#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
    pub headers: HashMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    pub fn new(user_agent: &str) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| HttpError::RequestFailed {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            user_agent: user_agent.to_string(),
        })
    }

    /// GET `url`; any status other than 200 is an error
    pub fn get(&self, url: &str, accept: Option<&str>) -> Result<HttpResponse, HttpError> {
        let mut request = self.client.get(url).header(USER_AGENT, &self.user_agent);
        if let Some(accept) = accept {
            request = request.header(ACCEPT, accept);
        }

        let response = request.send().map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else {
                HttpError::RequestFailed {
                    message: e.to_string(),
                }
            }
        })?;

        let status = response.status().as_u16();
        if status == 429 {
            return Err(HttpError::RateLimited);
        }
        if status != 200 {
            return Err(HttpError::Status {
                status,
                url: url.to_string(),
            });
        }

        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.to_string(), v.to_string())))
            .collect();

        let body = response.text().map_err(|e| HttpError::ParseError {
            message: e.to_string(),
        })?;

        Ok(HttpResponse {
            status,
            body,
            headers,
        })
    }
}
