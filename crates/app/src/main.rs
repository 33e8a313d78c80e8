// CLI modules
mod args;
mod op;
mod ops;
mod state;

use args::Args;
use clap::{Parser, Subcommand};
use op::Op;
use ops::{Attenuate, Derive, Init, Root, Show, Storage, Version};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

command_enum! {
    (Attenuate, Attenuate),
    (Derive, Derive),
    (Init, Init),
    (Root, Root),
    (Show, Show),
    (Storage, Storage),
    (Version, Version),
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing; stdout is reserved for command output
    let log_level: tracing::Level = args.log_level.parse().unwrap_or(tracing::Level::WARN);
    let env_filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(stderr_layer).init();

    let ctx = op::OpContext::new(args.config_path, args.cloud_secret);

    match args.command.execute(&ctx).await {
        Ok(output) => {
            println!("{}", output);
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
