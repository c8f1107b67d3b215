use std::fmt::Write;

use crate::app::{AppContext, CvefeedError, Result};
use crate::config::Config;
use crate::domain::Advisory;
use crate::tui;

/// Fetch the feed and open the interactive browser.
///
/// Nothing to browse (an empty feed or a rejected request) ends the run
/// quietly without touching the terminal.
pub async fn browse(ctx: &AppContext, config: &Config) -> Result<()> {
    let advisories = ctx.fetch_advisories(&config.feed.url).await?;

    if advisories.is_empty() {
        println!("No advisories to browse");
        return Ok(());
    }

    tracing::debug!("Browsing {} advisories", advisories.len());
    match tui::run(advisories, config.colors.clone()) {
        Err(CvefeedError::Interrupted) => Ok(()),
        result => result,
    }
}

/// Fetch the feed and print it without entering the browser.
pub async fn list(ctx: &AppContext, config: &Config) -> Result<()> {
    let advisories = ctx.fetch_advisories(&config.feed.url).await?;

    if advisories.is_empty() {
        println!("No advisories");
        return Ok(());
    }

    print!("{}", format_list(&advisories));
    Ok(())
}

fn format_list(advisories: &[Advisory]) -> String {
    let width = advisories.len().to_string().len();
    let mut out = String::new();

    for (i, advisory) in advisories.iter().enumerate() {
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "{:>width$}. {}  {:<16} {}",
            i + 1,
            advisory.published_short,
            advisory.cve_id,
            advisory.title,
        );
        let _ = writeln!(out, "{:>width$}  {}", "", advisory.link);
    }

    out
}
