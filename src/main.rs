use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, Layer};

use mashup_client::api::MashupApi;
use mashup_client::config::Config;
use mashup_client::form::MashupForm;
use mashup_client::job::{JobController, JobOutcome};
use mashup_client::render::{ConsoleRenderer, Render};
use mashup_client::shutdown;

/// Create a singer mashup through the mashup generation service
#[derive(Parser, Debug)]
#[command(name = "mashup-client", version)]
struct Cli {
    /// Singer to build the mashup from
    singer: String,

    /// Number of videos to pull (must be greater than 10)
    #[arg(short, long)]
    count: String,

    /// Length of each clip in seconds (must be greater than 20)
    #[arg(short, long)]
    duration: String,

    /// Email address the finished mashup should be sent to
    #[arg(short, long)]
    email: Option<String>,

    /// Save the finished mashup to this file
    #[arg(short, long)]
    output: Option<std::path::PathBuf>,

    /// Override the service base URL from MASHUP_API_URL
    #[arg(long)]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Load configuration from environment
    let mut config = Config::from_env().expect("Failed to load configuration");
    if let Some(api_url) = cli.api_url.clone() {
        config.api_url = api_url;
    }

    // Create logs directory if it doesn't exist
    std::fs::create_dir_all(&config.log_dir).expect("Failed to create logs directory");

    // Initialize file-based logging with daily rotation and level separation,
    // plus console output on stderr so it never mixes with the progress bar
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());

    let info_file = tracing_appender::rolling::daily(&config.log_dir, "info.log");
    let error_file = tracing_appender::rolling::daily(&config.log_dir, "error.log");

    let info_layer = tracing_subscriber::fmt::layer()
        .with_writer(info_file)
        .with_ansi(false)
        .with_filter(LevelFilter::INFO);

    let error_layer = tracing_subscriber::fmt::layer()
        .with_writer(error_file)
        .with_ansi(false)
        .with_filter(LevelFilter::ERROR);

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(info_layer)
        .with(error_layer)
        .init();

    info!("Starting mashup client");
    info!("  - API base URL: {}", config.api_url);
    info!("  - Poll interval: {:?}", config.poll_interval);
    info!("  - Request timeout: {:?}", config.request_timeout);

    let renderer: Arc<dyn Render> = Arc::new(ConsoleRenderer::new());

    // Validator gates submission: every field check runs and toggles its
    // indicator before anything goes on the wire
    let form = MashupForm {
        singer: cli.singer,
        count: cli.count,
        duration: cli.duration,
        email: cli.email.unwrap_or_default(),
    };
    let Some(request) = form.validate(renderer.as_ref()) else {
        return ExitCode::from(2);
    };

    let api = match MashupApi::new(&config.api_url, config.request_timeout) {
        Ok(api) => Arc::new(api),
        Err(err) => {
            error!("Failed to build HTTP client: {}", err);
            return ExitCode::FAILURE;
        }
    };
    let mut controller = JobController::new(api.clone(), renderer, config.poll_interval);

    // Submission errors were already surfaced as a notification
    if controller.submit(request).await.is_err() {
        return ExitCode::FAILURE;
    }

    tokio::select! {
        outcome = controller.wait() => match outcome {
            Some(JobOutcome::Completed { download_url, .. }) => {
                if let (Some(path), Some(url)) = (cli.output.as_ref(), download_url.as_deref()) {
                    match api.download(url, path).await {
                        Ok(bytes) => {
                            info!("Saved mashup to {} ({} bytes)", path.display(), bytes);
                        }
                        Err(err) => {
                            error!("Download failed: {}", err);
                            return ExitCode::FAILURE;
                        }
                    }
                }
                ExitCode::SUCCESS
            }
            Some(JobOutcome::Failed { .. }) => ExitCode::FAILURE,
            None => ExitCode::FAILURE,
        },
        _ = shutdown::wait_for_interrupt() => {
            controller.cancel();
            ExitCode::from(130)
        }
    }
}
