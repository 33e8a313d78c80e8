use clap::Args;

use common::crypto::CapabilityError;

use crate::state::StateError;

/// Print the read-only capability belonging with a capability
#[derive(Args, Debug, Clone)]
pub struct Attenuate {
    /// Capability to attenuate
    pub capability: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AttenuateError {
    #[error(transparent)]
    Capability(#[from] CapabilityError),
    #[error(transparent)]
    State(#[from] StateError),
}

#[async_trait::async_trait]
impl crate::op::Op for Attenuate {
    type Error = AttenuateError;
    type Output = String;

    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let node = ctx.client()?.attenuate(&self.capability)?;
        Ok(node.least_attenuated_capability().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::op::{Op, OpContext};
    use common::testkit;

    #[tokio::test]
    async fn test_attenuate() {
        let ctx = OpContext::new(None, Some(String::new()));
        for capability in [testkit::KNOCK_KNOCK_ROOT, testkit::KNOCK_KNOCK_RO] {
            let op = Attenuate {
                capability: capability.to_string(),
            };
            assert_eq!(op.execute(&ctx).await.unwrap(), testkit::KNOCK_KNOCK_RO);
        }
    }

    #[tokio::test]
    async fn test_attenuate_malformed() {
        let ctx = OpContext::new(None, Some(String::new()));
        let op = Attenuate {
            capability: "xx-AAAA".to_string(),
        };
        assert!(matches!(
            op.execute(&ctx).await,
            Err(AttenuateError::Capability(CapabilityError::UnknownTag))
        ));
    }
}
