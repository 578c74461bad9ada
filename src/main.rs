use std::sync::Arc;

use anyhow::{Result, bail};
use ecomparse::{ECommerceParser, HttpFetcher, config::Config};
use tokio::task::JoinSet;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const ENV_LOG_FORMAT: &str = "ECOMPARSE_LOG_FORMAT";

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let urls: Vec<String> = std::env::args().skip(1).collect();
    if urls.is_empty() {
        bail!("usage: ecomparse <product-url>...");
    }

    let config = Config::from_env()?;
    let fetcher = HttpFetcher::new(&config)?;
    let parser = ECommerceParser::new(Arc::new(fetcher));

    let mut tasks = JoinSet::new();
    for (index, url) in urls.into_iter().enumerate() {
        let parser = parser.clone();
        tasks.spawn(async move {
            let result = parser.parse_link(&url).await;
            (index, url, result)
        });
    }

    let mut results = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        results.push(joined?);
    }
    // Print in argument order
    results.sort_by_key(|(index, _, _)| *index);

    let mut failures = 0;
    for (_, url, result) in results {
        match result {
            Ok(product) => println!("{}", serde_json::to_string_pretty(&product)?),
            Err(e) => {
                error!(url = %url, error = %e, "failed to parse product");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{failures} url(s) could not be parsed");
    }
    info!("all products parsed");
    Ok(())
}

/// `ECOMPARSE_LOG_FORMAT=json` switches to structured output.
fn init_tracing() {
    let filter = EnvFilter::from_default_env();

    if std::env::var(ENV_LOG_FORMAT).is_ok_and(|format| format.eq_ignore_ascii_case("json")) {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}
