//! rollout-schema CLI binary

use std::process::ExitCode;

use rollout_schema::cli::CliApp;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging; stdout is reserved for --dry-run output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    "rollout_schema=info,rollout_crd=info,schema_generator=info".into()
                }),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse command line arguments
    let matches = CliApp::app().get_matches();

    // Run the CLI application
    match CliApp::run(&matches).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
