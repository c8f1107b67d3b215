use std::borrow::Cow;
use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset, Weekday};
use regex::Regex;

/// Identifier used when a title carries no CVE number.
pub const NO_CVE_ID: &str = "N/A";

static CVE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"CVE-\d{4}-\d{4,7}").expect("Invalid CVE id regex"));

/// `<strong>` spans are dropped together with their text.
static HTML_NOISE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<strong>(.*?)</strong>|<br\s*/?>").expect("Invalid HTML noise regex")
});

/// One advisory entry from the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    pub cve_id: String,
    pub title: String,
    pub link: String,
    pub description: String,
    /// pubDate exactly as it appeared in the feed.
    pub published: String,
    /// `"Jan 02"` style date for the list view.
    pub published_short: String,
}

impl Advisory {
    /// Build an advisory from raw feed fields.
    ///
    /// The CVE id is derived from the title, the description is cleaned and
    /// the short date is computed here, so a constructed value never needs
    /// normalizing again. Only the date can fail.
    pub fn new(
        title: String,
        link: String,
        description: &str,
        published: String,
    ) -> Result<Self, DateError> {
        let published_short = short_date(&published)?;

        Ok(Self {
            cve_id: extract_cve_id(&title),
            title,
            link,
            description: clean_description(description),
            published,
            published_short,
        })
    }

    pub fn has_cve_id(&self) -> bool {
        self.cve_id != NO_CVE_ID
    }
}

/// First `CVE-YYYY-NNNN` token in `title`, or `"N/A"`.
pub fn extract_cve_id(title: &str) -> String {
    CVE_ID
        .find(title)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NO_CVE_ID.to_string())
}

/// Strip `<strong>` spans and `<br>` tags, then trim.
///
/// Removal repeats until nothing matches, which keeps the function
/// idempotent even for input like `<stro<br>ng>x</strong>`.
pub fn clean_description(raw: &str) -> String {
    let mut current = raw.to_string();
    while let Cow::Owned(next) = HTML_NOISE.replace_all(&current, "") {
        current = next;
    }
    current.trim().to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("expected \"<weekday>, <day> <month> <year> <time> <offset>\"")]
    Shape,

    #[error("unknown weekday {0:?}")]
    Weekday(String),

    #[error("{0}")]
    Parse(#[from] chrono::ParseError),
}

/// Parse an RFC 822 style pubDate such as `Tue, 02 Jan 2024 00:00:00 +0000`.
///
/// The weekday must name a day but is not checked against the date. The
/// result stays in the offset given by the feed.
pub fn parse_pub_date(raw: &str) -> Result<DateTime<FixedOffset>, DateError> {
    let (weekday, rest) = raw.split_once(", ").ok_or(DateError::Shape)?;
    weekday
        .parse::<Weekday>()
        .map_err(|_| DateError::Weekday(weekday.to_string()))?;

    Ok(DateTime::parse_from_str(rest, "%d %b %Y %H:%M:%S %z")?)
}

/// Reformat a pubDate to `"<Mon> <DD>"`.
pub fn short_date(raw: &str) -> Result<String, DateError> {
    Ok(parse_pub_date(raw)?.format("%b %d").to_string())
}
