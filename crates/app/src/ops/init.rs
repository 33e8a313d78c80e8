use clap::Args;

use crate::state::{AppConfig, AppState};

/// Create the state directory with a fresh server secret
#[derive(Args, Debug, Clone)]
pub struct Init;

#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("init failed: {0}")]
    StateFailed(#[from] crate::state::StateError),
}

#[async_trait::async_trait]
impl crate::op::Op for Init {
    type Error = InitError;
    type Output = String;

    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let config = AppConfig {
            cloud_secret: ctx.cloud_secret.clone().unwrap_or_default(),
        };

        let state = AppState::init(ctx.config_path.clone(), Some(config))?;

        let cloud_secret = if state.config.cloud_secret.is_empty() {
            "none"
        } else {
            "set"
        };

        let output = format!(
            "Initialized rumpel directory at: {}\n\
             - Server secret: {}\n\
             - Config: {}\n\
             - Cloud secret: {}",
            state.rumpel_dir.display(),
            state.server_secret_path.display(),
            state.config_path.display(),
            cloud_secret
        );

        Ok(output)
    }
}
