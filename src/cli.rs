//! Command-line interface definitions for the news dashboard.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Secrets (API keys, SMTP credentials) can be provided via command-line
//! flags or environment variables; everything else lives in the YAML
//! configuration file (see [`crate::config`]).

use clap::Parser;

use crate::mailer::{DEFAULT_SMTP_HOST, DEFAULT_SMTP_PORT};

/// Command-line arguments for the news dashboard.
///
/// # Examples
///
/// ```sh
/// # Basic usage, secrets from the environment
/// news_dashboard --config digest.yaml
///
/// # Keep a copy of the rendered HTML next to the mail send
/// news_dashboard --config digest.yaml --html-output /tmp/digest.html
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the digest configuration file (keywords, recipients, sender)
    #[arg(short, long, default_value = "digest.yaml")]
    pub config: String,

    /// NewsAPI key
    #[arg(long, env = "NEWSAPI_KEY")]
    pub newsapi_key: String,

    /// Naver application client id
    #[arg(long, env = "NAVER_CLIENT_ID")]
    pub naver_client_id: String,

    /// Naver application client secret
    #[arg(long, env = "NAVER_CLIENT_SECRET")]
    pub naver_client_secret: String,

    /// SMTP account username
    #[arg(long, env = "SMTP_USER")]
    pub smtp_user: String,

    /// SMTP account password (app password, not the account password)
    #[arg(long, env = "SMTP_PASSWORD")]
    pub smtp_password: String,

    /// SMTP relay host
    #[arg(long, env = "SMTP_SERVER", default_value = DEFAULT_SMTP_HOST)]
    pub smtp_server: String,

    /// SMTP relay port (STARTTLS)
    #[arg(long, env = "SMTP_PORT", default_value_t = DEFAULT_SMTP_PORT)]
    pub smtp_port: u16,

    /// Also write the rendered HTML to this path
    #[arg(long)]
    pub html_output: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Vec<&'static str> {
        vec![
            "news_dashboard",
            "--newsapi-key",
            "nk",
            "--naver-client-id",
            "id",
            "--naver-client-secret",
            "secret",
            "--smtp-user",
            "user@example.com",
            "--smtp-password",
            "pw",
        ]
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(base_args());
        assert_eq!(cli.config, "digest.yaml");
        assert_eq!(cli.smtp_server, DEFAULT_SMTP_HOST);
        assert_eq!(cli.smtp_port, DEFAULT_SMTP_PORT);
        assert!(cli.html_output.is_none());
    }

    #[test]
    fn test_cli_overrides() {
        let mut args = base_args();
        args.extend([
            "--config",
            "/etc/digest.yaml",
            "--smtp-server",
            "mail.example.com",
            "--smtp-port",
            "2525",
            "--html-output",
            "/tmp/digest.html",
        ]);
        let cli = Cli::parse_from(args);
        assert_eq!(cli.config, "/etc/digest.yaml");
        assert_eq!(cli.smtp_server, "mail.example.com");
        assert_eq!(cli.smtp_port, 2525);
        assert_eq!(cli.html_output.as_deref(), Some("/tmp/digest.html"));
    }
}
