//! `feed` — fetch the posts feed once and print it.

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use feed_core::{FeedBuilder, FeedConfig};

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "feed", about = "Fetch and list posts", version)]
struct Cli {
    /// Override `FEED_BASE_URL`.
    #[arg(long)]
    base_url: Option<String>,

    /// Log output format (text or json).
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Cli::parse();
    init_tracing(args.log_format);

    let mut config = match FeedConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    info!(base_url = %config.base_url, "loading feed");

    let view_model = match FeedBuilder::new().config(config).build() {
        Ok(view_model) => view_model,
        Err(err) => {
            error!(error = %err, "failed to initialise transport");
            return ExitCode::FAILURE;
        }
    };

    match view_model.fetch_posts().await {
        Ok(_) => {
            for post in view_model.posts() {
                println!("{:>4}  {}", post.id, post.title);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(kind = err.kind(), error = %err, "could not load posts");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(log_format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = fmt().with_env_filter(env_filter).with_writer(std::io::stderr);

    let result = match log_format {
        LogFormat::Text => subscriber.try_init(),
        LogFormat::Json => subscriber.json().try_init(),
    };
    if let Err(err) = result {
        eprintln!("failed to init tracing: {err}");
    }
}
