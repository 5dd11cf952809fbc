use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::error::Result;

#[async_trait]
pub trait HttpClientPort: Send + Sync {
    /// Fetches `url`; non-2xx responses are errors.
    async fn get(&self, url: &str) -> Result<HttpGetResult>;
}

#[derive(Clone, Debug)]
pub struct HttpGetResult {
    pub bytes: Vec<u8>,
}

impl HttpGetResult {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

pub trait ClockPort: Send + Sync {
    /// Local wall-clock time used to stamp harvested events
    fn now(&self) -> NaiveDateTime;
}
