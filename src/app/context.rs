use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::app::error::Result;
use crate::config::FeedConfig;
use crate::domain::Advisory;
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::{FetchResult, Fetcher};
use crate::normalizer::Normalizer;

pub struct AppContext {
    pub fetcher: Arc<dyn Fetcher + Send + Sync>,
    pub normalizer: Normalizer,
}

impl AppContext {
    pub fn new(feed: &FeedConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(Duration::from_secs(feed.timeout_secs))?;
        Ok(Self::with_fetcher(
            Arc::new(fetcher),
            Normalizer::with_strict(feed.strict),
        ))
    }

    pub fn with_fetcher(fetcher: Arc<dyn Fetcher + Send + Sync>, normalizer: Normalizer) -> Self {
        Self {
            fetcher,
            normalizer,
        }
    }

    /// Fetch the feed at `url` and normalize it into advisories.
    ///
    /// A non-success HTTP status is reported to the operator and yields an
    /// empty list rather than an error; callers treat that as nothing to
    /// browse. Transport failures and malformed documents are errors.
    pub async fn fetch_advisories(&self, url: &str) -> Result<Vec<Advisory>> {
        let url = Url::parse(url)?;
        tracing::debug!("Fetching {}", url);

        match self.fetcher.fetch(url.as_str()).await? {
            FetchResult::Content { body } => self.normalizer.normalize(&body),
            FetchResult::Rejected { status } => {
                tracing::warn!("{} answered with HTTP {}", url, status);
                eprintln!("Failed to fetch data. HTTP Status Code: {}", status);
                Ok(Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::CvefeedError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FakeFetcher {
        response: fn() -> FetchResult,
        requested: Mutex<Vec<String>>,
    }

    impl FakeFetcher {
        fn new(response: fn() -> FetchResult) -> Arc<Self> {
            Arc::new(Self {
                response,
                requested: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl Fetcher for FakeFetcher {
        async fn fetch(&self, url: &str) -> Result<FetchResult> {
            self.requested.lock().unwrap().push(url.to_string());
            Ok((self.response)())
        }
    }

    const FEED: &str = r#"<rss><channel>
        <item>
          <title>CVE-2024-6387 regreSSHion</title>
          <link>https://cvefeed.io/vuln/detail/CVE-2024-6387</link>
          <description>Race condition in sshd</description>
          <pubDate>Mon, 01 Jul 2024 13:15:05 +0000</pubDate>
        </item>
        <item>
          <title>CVE-2024-3094 xz backdoor</title>
          <link>https://cvefeed.io/vuln/detail/CVE-2024-3094</link>
          <description>Malicious code in xz</description>
          <pubDate>Fri, 29 Mar 2024 17:15:21 +0000</pubDate>
        </item>
    </channel></rss>"#;

    fn content() -> FetchResult {
        FetchResult::Content {
            body: FEED.as_bytes().to_vec(),
        }
    }

    #[tokio::test]
    async fn test_fetch_returns_one_advisory_per_item() {
        let fetcher = FakeFetcher::new(content);
        let ctx = AppContext::with_fetcher(fetcher.clone(), Normalizer::new());

        let advisories = ctx
            .fetch_advisories("https://cvefeed.io/rssfeed/latest.xml")
            .await
            .unwrap();

        assert_eq!(advisories.len(), 2);
        assert_eq!(advisories[0].cve_id, "CVE-2024-6387");
        assert_eq!(advisories[1].published_short, "Mar 29");
        assert_eq!(
            *fetcher.requested.lock().unwrap(),
            ["https://cvefeed.io/rssfeed/latest.xml"]
        );
    }

    #[test]
    fn test_rejected_status_yields_empty_result() {
        let fetcher = FakeFetcher::new(|| FetchResult::Rejected { status: 503 });
        let ctx = AppContext::with_fetcher(fetcher, Normalizer::with_strict(true));

        let advisories =
            tokio_test::block_on(ctx.fetch_advisories("https://cvefeed.io/rssfeed/latest.xml"))
                .unwrap();
        assert!(advisories.is_empty());
    }

    #[test]
    fn test_invalid_url_is_not_fetched() {
        let fetcher = FakeFetcher::new(content);
        let ctx = AppContext::with_fetcher(fetcher.clone(), Normalizer::new());

        let result = tokio_test::block_on(ctx.fetch_advisories("not a url"));

        assert!(matches!(result, Err(CvefeedError::InvalidUrl(_))));
        assert!(fetcher.requested.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_body_propagates() {
        let fetcher = FakeFetcher::new(|| FetchResult::Content {
            body: b"<rss><item>".to_vec(),
        });
        let ctx = AppContext::with_fetcher(fetcher, Normalizer::new());

        let result = ctx.fetch_advisories("https://example.com/feed.xml").await;
        assert!(matches!(result, Err(CvefeedError::Xml(_))));
    }
}
