use crate::app::ports::{HttpClientPort, HttpGetResult};
use crate::config::Config;
use crate::error::{Result, ScraperError};
use async_trait::async_trait;
use reqwest::header::USER_AGENT;

pub struct ReqwestHttp {
    client: reqwest::Client,
    user_agent: String,
}

impl ReqwestHttp {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            user_agent: config.user_agent.clone(),
        })
    }
}

#[async_trait]
impl HttpClientPort for ReqwestHttp {
    async fn get(&self, url: &str) -> Result<HttpGetResult> {
        tracing::debug!("HTTP GET request to: {}", url);
        let resp = self
            .client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ScraperError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        let bytes = resp.bytes().await?.to_vec();
        tracing::debug!("HTTP response: status={}, size={} bytes", status.as_u16(), bytes.len());
        Ok(HttpGetResult { bytes })
    }
}
