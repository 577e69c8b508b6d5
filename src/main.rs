//! Binary entry point: wire configuration, clients, and the mail sink
//! together and run one digest build-and-deliver cycle.

use clap::Parser;
use std::error::Error;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

use news_dashboard::aggregate::DigestBuilder;
use news_dashboard::cli::Cli;
use news_dashboard::config::DigestConfig;
use news_dashboard::mailer::{Mailer, SmtpConfig};
use news_dashboard::sources::naver::NaverClient;
use news_dashboard::sources::newsapi::NewsApiClient;
use news_dashboard::translate::GoogleTranslator;
use news_dashboard::util::DateWindow;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("news_dashboard starting up");

    let args = Cli::parse();
    debug!(?args.config, ?args.html_output, "Parsed CLI arguments");

    let config = DigestConfig::load(&args.config)?;

    let window = DateWindow::at(config.reference_time());
    info!(
        today = %window.today,
        yesterday = %window.yesterday,
        keywords = config.keywords.len(),
        "Computed digest window"
    );

    // NewsAPI filters server-side to the last full KST day; Naver items
    // are filtered to the current day during normalization.
    let newsapi = NewsApiClient::new(args.newsapi_key, window.yesterday);
    let naver = NaverClient::new(args.naver_client_id, args.naver_client_secret);
    let translator = GoogleTranslator::new();

    let mut builder = DigestBuilder::new(&config, &newsapi, &naver, &translator, window);
    let html = builder.build().await;
    info!(bytes = html.len(), "Rendered digest HTML");

    if let Some(ref path) = args.html_output {
        tokio::fs::write(path, &html).await?;
        info!(path = %path, "Wrote digest HTML copy");
    }

    let mailer = Mailer::new(SmtpConfig {
        host: args.smtp_server,
        port: args.smtp_port,
        username: args.smtp_user,
        password: args.smtp_password,
    });
    mailer
        .send(&config.subject, &html, &config.sender, &config.recipients)
        .await?;

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        recipients = config.recipients.len(),
        "Digest delivered"
    );

    Ok(())
}
