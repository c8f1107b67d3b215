//! # cvefeed
//!
//! A terminal browser for the latest CVE advisories published as an RSS feed.
//!
//! ## Architecture
//!
//! cvefeed is a one-shot pipeline followed by an interactive loop:
//!
//! ```text
//! Fetcher → Normalizer → BrowserSession → Renderer
//! ```
//!
//! - [`fetcher`]: one HTTP GET with a bounded timeout
//! - [`normalizer`]: RSS `item` elements to [`Advisory`](domain::Advisory) records
//! - [`tui`]: list/detail browser built with ratatui
//!
//! ## Quick Start
//!
//! ```bash
//! # Browse the default feed
//! cvefeed
//!
//! # Print another feed and exit
//! cvefeed list --url https://example.com/cves.xml
//! ```

/// Application context and error handling.
///
/// [`AppContext`](app::AppContext) wires the fetcher to the normalizer and
/// exposes the composed fetch operation.
pub mod app;

/// Command-line interface using clap.
///
/// - `browse` (default) - Interactive list and detail views
/// - `list` - Print advisories and exit
pub mod cli;

/// Configuration loaded from `~/.config/cvefeed/config.toml`.
pub mod config;

/// Core domain model: [`Advisory`](domain::Advisory) and its field normalization.
pub mod domain;

/// HTTP fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait for feed fetching
/// - [`HttpFetcher`](fetcher::http_fetcher::HttpFetcher): reqwest-based implementation
pub mod fetcher;

/// Feed parsing and normalization.
pub mod normalizer;

/// Terminal user interface.
///
/// [`BrowserSession`](tui::session::BrowserSession) owns the list/detail
/// state machine and talks to the screen only through the
/// [`Renderer`](tui::Renderer) trait.
pub mod tui;
