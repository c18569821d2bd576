//! Thin blocking HTTP wrapper shared by the geocoder and the Overpass client.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, error};

use crate::{OsmError, OsmResult};

/// Connection settings for the provider services.
#[derive(Clone, Debug)]
pub struct HttpOptions {
    /// Sent with every request; Nominatim rejects anonymous clients.
    pub user_agent: String,
    pub timeout:    Duration,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            user_agent: concat!("roadnet/", env!("CARGO_PKG_VERSION")).to_owned(),
            timeout:    Duration::from_secs(180),
        }
    }
}

#[derive(Clone)]
pub struct HttpClient {
    inner: Client,
}

impl HttpClient {
    pub fn new(opts: &HttpOptions) -> OsmResult<Self> {
        let inner = Client::builder()
            .connect_timeout(Duration::from_secs(30))
            .timeout(opts.timeout)
            .user_agent(opts.user_agent.clone())
            .build()
            .map_err(|source| OsmError::Http { service: "http client", source })?;
        Ok(Self { inner })
    }

    /// `GET url?query` and return the body of a successful response.
    pub fn get_text(
        &self,
        service: &'static str,
        url:     &str,
        query:   &[(&str, &str)],
    ) -> OsmResult<String> {
        debug!(service, url, "GET");
        let response = self
            .inner
            .get(url)
            .query(query)
            .send()
            .map_err(|source| request_failed(service, source))?;
        read_body(service, response)
    }

    /// `POST url` with a plain-text body.
    pub fn post_text(&self, service: &'static str, url: &str, body: String) -> OsmResult<String> {
        debug!(service, url, bytes = body.len(), "POST");
        let response = self
            .inner
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(body)
            .send()
            .map_err(|source| request_failed(service, source))?;
        read_body(service, response)
    }
}

fn request_failed(service: &'static str, source: reqwest::Error) -> OsmError {
    error!(service, "request failed: {source}");
    OsmError::Http { service, source }
}

fn read_body(service: &'static str, response: reqwest::blocking::Response) -> OsmResult<String> {
    let status = response.status();
    debug!(service, %status, "response received");
    if !status.is_success() {
        return Err(OsmError::Status { service, status });
    }
    response.text().map_err(|source| OsmError::Http { service, source })
}
