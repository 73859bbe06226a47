//! Public IP lookup against a plain-text echo service.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::{Error, Result};

/// Raw answer from the lookup service.
#[derive(Debug, Clone)]
pub struct IpLookupResponse {
    pub status: u16,
    pub body: String,
}

/// Outbound call that reports the caller's public IP.
#[async_trait]
pub trait IpLookup: Send + Sync {
    async fn fetch(&self) -> Result<IpLookupResponse>;
}

/// `IpLookup` that GETs a fixed URL with reqwest.
pub struct CheckIpClient {
    http_client: reqwest::Client,
    url: String,
}

impl CheckIpClient {
    pub fn new(http_client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http_client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl IpLookup for CheckIpClient {
    async fn fetch(&self) -> Result<IpLookupResponse> {
        let response = self.http_client.get(&self.url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(IpLookupResponse { status, body })
    }
}

/// Ask the lookup service for our public IP.
///
/// Fails with `Non200Response` on any status other than 200 and with `NoIp`
/// when the body is blank.
pub async fn lookup_ip(lookup: &dyn IpLookup) -> Result<String> {
    let response = lookup.fetch().await?;

    if response.status != 200 {
        warn!("IP lookup returned status {}", response.status);
        return Err(Error::Non200Response(response.status));
    }

    let ip = response.body.trim();
    if ip.is_empty() {
        return Err(Error::NoIp);
    }

    info!("Resolved public IP {}", ip);
    Ok(ip.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Canned(u16, &'static str);

    #[async_trait]
    impl IpLookup for Canned {
        async fn fetch(&self) -> Result<IpLookupResponse> {
            Ok(IpLookupResponse {
                status: self.0,
                body: self.1.to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_non_200() {
        let err = lookup_ip(&Canned(503, "1.2.3.4")).await.unwrap_err();
        assert!(matches!(err, Error::Non200Response(503)));
    }

    #[tokio::test]
    async fn test_empty_body() {
        assert!(matches!(lookup_ip(&Canned(200, "")).await, Err(Error::NoIp)));
        assert!(matches!(lookup_ip(&Canned(200, "\n")).await, Err(Error::NoIp)));
    }

    #[tokio::test]
    async fn test_trailing_newline_trimmed() {
        assert_eq!(lookup_ip(&Canned(200, "1.2.3.4\n")).await.unwrap(), "1.2.3.4");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_http_error() {
        let client = CheckIpClient::new(reqwest::Client::new(), "http://127.0.0.1:1");

        let err = lookup_ip(&client).await.unwrap_err();
        assert!(matches!(err, Error::Http(_)));
        assert_eq!(err.status_code(), 502);
    }
}
