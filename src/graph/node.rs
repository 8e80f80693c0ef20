use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

use crate::{Error, Result};

/// Opaque label identifying a node.
///
/// Equality is an exact string match: `NodeId::new("a")` and `NodeId::new("A")`
/// are different nodes. Front ends that accept free-form input should go
/// through [`NodeId::parse`], which applies the trim + upper-case normalization
/// used for labels typed by a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Wraps a label as is
    pub fn new(label: impl Into<String>) -> Self {
        NodeId(label.into())
    }

    /// Normalizes raw user input into a node label
    pub fn parse(raw: &str) -> Result<Self> {
        let label = raw.trim().to_uppercase();
        if label.is_empty() {
            return Err(Error::EmptyNodeName);
        }
        Ok(NodeId(label))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(label: &str) -> Self {
        NodeId::new(label)
    }
}

impl From<String> for NodeId {
    fn from(label: String) -> Self {
        NodeId(label)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
