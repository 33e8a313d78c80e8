use clap::Args;
use serde::Serialize;

use common::crypto::{Capability, CapabilityError};
use common::tree::Node;

use crate::state::StateError;

/// Show everything a capability designates
#[derive(Args, Debug, Clone)]
pub struct Show {
    /// Capability of the node (or of an ancestor, with PATH)
    pub capability: String,

    /// `/`-separated path of names below the capability
    pub path: Option<String>,

    /// Expand on the client side, without the server secret
    #[arg(long)]
    pub client: bool,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ShowError {
    #[error(transparent)]
    Capability(#[from] CapabilityError),
    #[error(transparent)]
    State(#[from] StateError),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serializable view of a node
#[derive(Debug, Serialize)]
pub struct NodeReport {
    pub rw_cap: Option<Capability>,
    pub ro_cap: Capability,
    pub location: String,
    pub storage_key: String,
    pub read_only: bool,
}

impl From<&Node> for NodeReport {
    fn from(node: &Node) -> Self {
        Self {
            rw_cap: node.rw_cap().cloned(),
            ro_cap: node.ro_cap().clone(),
            location: node.location().to_string(),
            storage_key: node.storage().key().to_hex(),
            read_only: node.is_read_only(),
        }
    }
}

impl std::fmt::Display for NodeReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.rw_cap {
            Some(rw_cap) => writeln!(f, "rw:        {}", rw_cap)?,
            None => writeln!(f, "rw:        -")?,
        }
        writeln!(f, "ro:        {}", self.ro_cap)?;
        writeln!(f, "location:  {}", self.location)?;
        writeln!(f, "key:       {}", self.storage_key)?;
        write!(f, "read-only: {}", self.read_only)
    }
}

#[async_trait::async_trait]
impl crate::op::Op for Show {
    type Error = ShowError;
    type Output = String;

    async fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let node = if self.client {
            ctx.client()?.lookup(&self.capability)?
        } else {
            ctx.server()?.lookup(&self.capability)?
        };
        let node = match self.path.as_deref() {
            Some(path) => node.descend(path),
            None => node,
        };

        let report = NodeReport::from(&node);
        if self.json {
            Ok(serde_json::to_string_pretty(&report)?)
        } else {
            Ok(report.to_string())
        }
    }
}
