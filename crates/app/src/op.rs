use std::error::Error;
use std::path::PathBuf;

use common::tree::{Client, Server};

use crate::state::{AppState, StateError};

#[derive(Debug, Clone)]
pub struct OpContext {
    /// Optional custom state directory (defaults to ~/.rumpel)
    pub config_path: Option<PathBuf>,
    /// Cloud secret overriding the configured one
    pub cloud_secret: Option<String>,
}

impl OpContext {
    pub fn new(config_path: Option<PathBuf>, cloud_secret: Option<String>) -> Self {
        Self {
            config_path,
            cloud_secret,
        }
    }

    /// Server over the stored server secret. Requires an initialized state
    ///  directory.
    pub fn server(&self) -> Result<Server, StateError> {
        let state = AppState::load(self.config_path.clone())?;
        state.server(self.cloud_secret.as_deref())
    }

    /// Client over the cloud secret. Only needs the config file, not the
    ///  server secret.
    ///
    /// Falls back to an empty cloud secret when there is neither an override
    /// nor a state directory. A state directory that exists but can't be read
    /// is an error.
    pub fn client(&self) -> Result<Client, StateError> {
        if let Some(cloud_secret) = self.cloud_secret.as_deref() {
            return Ok(Client::new(cloud_secret));
        }
        match AppState::load_config(self.config_path.clone()) {
            Ok(config) => Ok(Client::new(config.cloud_secret)),
            Err(StateError::NotInitialized) => {
                tracing::warn!("no state directory, using an empty cloud secret");
                Ok(Client::default())
            }
            Err(e) => Err(e),
        }
    }
}

#[async_trait::async_trait]
pub trait Op: Send + Sync {
    type Error: Error + Send + Sync + 'static;
    type Output;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error>;
}

#[macro_export]
macro_rules! command_enum {
    ($(($variant:ident, $type:ty)),* $(,)?) => {
        #[derive(Subcommand, Debug, Clone)]
        pub enum Command {
            $($variant($type),)*
        }

        #[derive(Debug)]
        pub enum OpOutput {
            $($variant(<$type as $crate::op::Op>::Output),)*
        }

        #[derive(Debug, thiserror::Error)]
        pub enum OpError {
            $(
                #[error(transparent)]
                $variant(<$type as $crate::op::Op>::Error),
            )*
        }

        #[async_trait::async_trait]
        impl $crate::op::Op for Command {
            type Output = OpOutput;
            type Error = OpError;

            async fn execute(&self, ctx: &$crate::op::OpContext) -> Result<Self::Output, Self::Error> {
                match self {
                    $(
                        Command::$variant(op) => {
                            op.execute(ctx).await
                                .map(OpOutput::$variant)
                                .map_err(OpError::$variant)
                        },
                    )*
                }
            }
        }

        impl std::fmt::Display for OpOutput {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(
                        OpOutput::$variant(output) => write!(f, "{}", output),
                    )*
                }
            }
        }
    };
}
