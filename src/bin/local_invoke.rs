//! Fires one real invocation of the adapter against the configured tracker.
//!
//! Credentials come from the same environment variables the deployed
//! function reads: JIRA_URL, JIRA_USER, JIRA_API_TOKEN, JIRA_PROJECT_KEY.

use clap::Parser;
use colored::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jira_event_adapter::{Credentials, InboundEvent, JiraClient};

#[derive(Parser)]
#[command(name = "local-invoke")]
#[command(about = "Send one issue-creation event through the adapter", long_about = None)]
struct Cli {
    /// Issue summary (omit to exercise the default)
    #[arg(long)]
    summary: Option<String>,

    /// Issue description (omit to exercise the default)
    #[arg(long)]
    description: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let credentials = Credentials::from_env()?;
    let client = JiraClient::new(credentials);

    let event = InboundEvent {
        summary: cli.summary,
        description: cli.description,
    };

    match client.create_issue(&event).await {
        Ok(response) => {
            let label = format!("HTTP {}", response.status_code);
            if (200..300).contains(&response.status_code) {
                println!("{}", label.green().bold());
            } else {
                println!("{}", label.yellow().bold());
            }
            println!("{}", serde_json::to_string_pretty(&response.body)?);
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", "Invocation failed:".red().bold(), e);
            std::process::exit(1);
        }
    }
}
