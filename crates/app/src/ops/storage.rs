use clap::Args;

use common::crypto::CapabilityError;

use crate::state::StateError;

/// Print the storage location and key of the node a capability designates
#[derive(Args, Debug, Clone)]
pub struct Storage {
    /// Capability of the node
    pub capability: String,
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error(transparent)]
    Capability(#[from] CapabilityError),
    #[error(transparent)]
    State(#[from] StateError),
}

#[async_trait::async_trait]
impl crate::op::Op for Storage {
    type Error = StorageError;
    type Output = String;

    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let storage = ctx.client()?.storage(&self.capability)?;
        Ok(format!(
            "location: {}\nkey:      {}",
            storage.location(),
            storage.key().to_hex()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::op::{Op, OpContext};
    use crate::state::{AppConfig, AppState};
    use common::testkit;
    use tempfile::TempDir;

    fn shared_state(temp: &TempDir) -> (std::path::PathBuf, AppState) {
        let dir = temp.path().join("rumpel");
        let config = AppConfig {
            cloud_secret: "shared".to_string(),
        };
        let state = AppState::init(Some(dir.clone()), Some(config)).unwrap();
        (dir, state)
    }

    #[tokio::test]
    async fn test_storage() {
        let ctx = OpContext::new(None, Some(String::new()));
        let op = Storage {
            capability: testkit::BOB_RO.to_string(),
        };
        let output = op.execute(&ctx).await.unwrap();
        assert_eq!(
            output,
            format!(
                "location: {}\nkey:      {}",
                testkit::BOB_LOCATION,
                testkit::BOB_STORAGE_KEY
            )
        );
    }

    #[tokio::test]
    async fn test_storage_uses_cloud_secret() {
        let ctx = OpContext::new(None, Some("shared".to_string()));
        let op = Storage {
            capability: testkit::KNOCK_KNOCK_ROOT.to_string(),
        };
        let output = op.execute(&ctx).await.unwrap();
        assert!(output.contains(testkit::KNOCK_KNOCK_SHARED_LOCATION));
    }

    #[tokio::test]
    async fn test_storage_without_server_secret() {
        let temp = TempDir::new().unwrap();
        let (dir, state) = shared_state(&temp);
        std::fs::remove_file(&state.server_secret_path).unwrap();

        let ctx = OpContext::new(Some(dir), None);
        let op = Storage {
            capability: testkit::KNOCK_KNOCK_ROOT.to_string(),
        };
        let output = op.execute(&ctx).await.unwrap();
        assert!(output.contains(testkit::KNOCK_KNOCK_SHARED_LOCATION));
    }

    #[tokio::test]
    async fn test_storage_unreadable_config_fails() {
        let temp = TempDir::new().unwrap();
        let (dir, state) = shared_state(&temp);
        std::fs::write(&state.config_path, "cloud_secret = [").unwrap();

        let ctx = OpContext::new(Some(dir), None);
        let op = Storage {
            capability: testkit::KNOCK_KNOCK_ROOT.to_string(),
        };
        assert!(matches!(
            op.execute(&ctx).await,
            Err(StorageError::State(_))
        ));
    }

    #[tokio::test]
    async fn test_storage_without_state_directory() {
        let temp = TempDir::new().unwrap();
        let ctx = OpContext::new(Some(temp.path().join("missing")), None);
        let op = Storage {
            capability: testkit::KNOCK_KNOCK_ROOT.to_string(),
        };
        let output = op.execute(&ctx).await.unwrap();
        assert!(output.contains(testkit::KNOCK_KNOCK_LOCATION));
    }
}
