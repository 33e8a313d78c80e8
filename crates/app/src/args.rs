pub use clap::Parser;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rumpel")]
#[command(about = "Sparse capabilities for Rumpelstiltskin trees")]
pub struct Args {
    /// Path to the rumpel state directory (defaults to ~/.rumpel)
    #[arg(long, global = true)]
    pub config_path: Option<PathBuf>,

    /// Cloud secret to use instead of the configured one
    #[arg(long, global = true, env = "RUMPEL_CLOUD_SECRET", hide_env_values = true)]
    pub cloud_secret: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: crate::Command,
}
