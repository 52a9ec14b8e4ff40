use std::env;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pokearena=info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    let code = pokearena::cli::run_with_args(&args).await;
    ExitCode::from(code.clamp(0, u8::MAX.into()) as u8)
}
