use clap::Args;

use common::crypto::CapabilityError;

use crate::state::StateError;

/// Print the capability of a node below another
#[derive(Args, Debug, Clone)]
pub struct Derive {
    /// Capability to start from
    pub capability: String,

    /// `/`-separated path of names to descend
    pub path: String,

    /// Print the read-only capability even when a read/write one is available
    #[arg(long)]
    pub read_only: bool,

    /// Derive on the client side, without the server secret
    #[arg(long)]
    pub client: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum DeriveError {
    #[error(transparent)]
    Capability(#[from] CapabilityError),
    #[error(transparent)]
    State(#[from] StateError),
}

#[async_trait::async_trait]
impl crate::op::Op for Derive {
    type Error = DeriveError;
    type Output = String;

    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let node = if self.client {
            ctx.client()?.lookup(&self.capability)?
        } else {
            ctx.server()?.lookup(&self.capability)?
        };

        let mut node = node.descend(&self.path);
        if self.read_only {
            node = node.attenuate();
        }

        tracing::debug!(location = %node.location(), "derived node");
        Ok(node.least_attenuated_capability().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::op::{Op, OpContext};
    use common::testkit;

    fn derive(capability: &str, path: &str, read_only: bool) -> Derive {
        Derive {
            capability: capability.to_string(),
            path: path.to_string(),
            read_only,
            client: true,
        }
    }

    #[tokio::test]
    async fn test_derive() {
        let ctx = OpContext::new(None, Some(String::new()));

        let rw = derive(testkit::KNOCK_KNOCK_ROOT, "Bob", false)
            .execute(&ctx)
            .await
            .unwrap();
        assert_eq!(rw, testkit::BOB_RW);

        let ro = derive(testkit::KNOCK_KNOCK_ROOT, "/Bob/", true)
            .execute(&ctx)
            .await
            .unwrap();
        assert_eq!(ro, testkit::BOB_RO);

        let from_ro = derive(testkit::KNOCK_KNOCK_RO, "Bob", false)
            .execute(&ctx)
            .await
            .unwrap();
        assert_eq!(from_ro, testkit::BOB_RO);
    }

    #[tokio::test]
    async fn test_derive_empty_path() {
        let ctx = OpContext::new(None, Some(String::new()));
        let same = derive(testkit::KNOCK_KNOCK_ROOT, "", false)
            .execute(&ctx)
            .await
            .unwrap();
        assert_eq!(same, testkit::KNOCK_KNOCK_ROOT);
    }
}
