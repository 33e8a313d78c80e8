use clap::Args;

use common::crypto::{password_root_capability, random_root_capability, SecretError};

/// Print a new root capability
#[derive(Args, Debug, Clone)]
pub struct Root {
    /// Derive the root from a password instead of generating a random one
    #[arg(long, env = "RUMPEL_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum RootError {
    #[error("failed to generate root capability: {0}")]
    Generate(#[from] SecretError),
}

#[async_trait::async_trait]
impl crate::op::Op for Root {
    type Error = RootError;
    type Output = String;

    async fn execute(&self, _ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let root = match self.password.as_deref() {
            Some(password) => {
                tracing::debug!("stretching password into root capability");
                password_root_capability(password)
            }
            None => random_root_capability()?,
        };
        Ok(root.to_string())
    }
}
