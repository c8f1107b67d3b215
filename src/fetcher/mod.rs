pub mod http_fetcher;

use async_trait::async_trait;

use crate::app::Result;

#[derive(Debug)]
pub enum FetchResult {
    /// Body of a successful response
    Content { body: Vec<u8> },
    /// Server answered with a non-success status
    Rejected { status: u16 },
}

#[async_trait]
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResult>;
}
