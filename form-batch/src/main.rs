use clap::Parser;
use form_batch::{
    BATCH_SIZE, BatchError, Config, DEFAULT_CONFIG_PATH, NetworkFormClient, RecordTemplate,
    init_logger, run_batch,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

/// Submit a batch of tagged records and verify they were saved
#[derive(Debug, Parser)]
#[command(name = "form-batch", version)]
struct Args {
    /// Path to the YAML configuration file
    #[arg(long, env = "FORM_BATCH_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Default log filter when RUST_LOG is unset
    #[arg(long, env = "FORM_BATCH_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Log as JSON lines
    #[arg(long)]
    log_json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    if let Err(e) = init_logger(&args.log_level, args.log_json) {
        eprintln!("Failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(args: &Args) -> Result<(), BatchError> {
    let config = Config::load(&args.config)?;
    tracing::info!(config = %args.config.display(), "Configuration loaded");

    let api = Arc::new(NetworkFormClient::new(&config)?);
    let mut rng = rand::thread_rng();
    let summary = run_batch(api, &RecordTemplate::default(), BATCH_SIZE, &mut rng).await?;

    tracing::info!(
        saved = summary.submit.saved.len(),
        matched = summary.verification.matched,
        "Run finished"
    );
    Ok(())
}
