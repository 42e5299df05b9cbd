//! Command-line driver.
//!
//! Builds the client from the configuration and runs a `Session` either once
//! (URL given) or interactively over stdin.

mod session;

use anyhow::{Context, Result};
use log::info;
use tokio::io::BufReader;

use crate::client::AnalysisClient;
use crate::config::Config;
use crate::render::ResultView;

pub use session::{RunReport, Session};

/// Runs the client with the provided configuration.
///
/// With `config.url` set, one analysis is performed; otherwise URLs are read
/// from stdin, one per line, until EOF. Results go to stdout.
///
/// # Errors
///
/// Returns an error if the endpoint or HTTP client cannot be initialized, or
/// if reading stdin / writing stdout fails. Failed analyses are not errors;
/// they are reflected in the returned `RunReport`.
///
/// # Example
///
/// ```no_run
/// use link_analyzer::{run, Config};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config {
///     url: Some("https://example.com".to_string()),
///     ..Default::default()
/// };
/// let report = run(config).await?;
/// std::process::exit(report.exit_code());
/// # }
/// ```
pub async fn run(config: Config) -> Result<RunReport> {
    let client =
        AnalysisClient::from_config(&config).context("Failed to initialize analysis client")?;
    info!("Using analysis endpoint {}", client.endpoint());

    let view = ResultView::new(!config.no_color);
    let mut session = Session::new(client, view, config.output, std::io::stdout());

    match config.url.as_deref() {
        Some(url) => {
            session.analyze(url).await?;
        }
        None => {
            session
                .analyze_lines(BufReader::new(tokio::io::stdin()))
                .await?;
        }
    }

    Ok(session.report())
}
