//! Durable hand-off point between a gather run and the batch-read runs that follow it.
//!
//! The artifact is a JSON array of node ID strings at one well-known path. Every write fully
//! replaces the previous list. Runs are serialized by the operator, so no locking here.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::debug;

use crate::env::ENV_CONFIG;

#[derive(Debug, Error)]
pub enum StoreUnreadableError {
    #[error("no node list found at {path}, has a gather run completed?")]
    Missing { path: PathBuf },
    #[error("failed to read node list at {path}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed node list at {path}, expected a JSON array of strings")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub struct NodeListStore {
    path: PathBuf,
}

impl NodeListStore {
    pub fn new() -> Self {
        Self::new_with_path(&ENV_CONFIG.node_list_path)
    }

    pub fn new_with_path(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Replace whatever list is currently stored with the given one.
    pub fn write(&self, nodes: &[String]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create store dir {}", parent.display()))?;
        }

        let body = serde_json::to_vec(nodes).context("failed to serialize node list")?;
        fs::write(&self.path, body)
            .with_context(|| format!("failed to write node list to {}", self.path.display()))?;

        debug!(count = nodes.len(), path = %self.path.display(), "wrote node list");

        Ok(())
    }

    pub fn read(&self) -> Result<Vec<String>, StoreUnreadableError> {
        let body = fs::read(&self.path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => StoreUnreadableError::Missing {
                path: self.path.clone(),
            },
            _ => StoreUnreadableError::Unreadable {
                path: self.path.clone(),
                source,
            },
        })?;

        serde_json::from_slice(&body).map_err(|source| StoreUnreadableError::Malformed {
            path: self.path.clone(),
            source,
        })
    }
}

impl Default for NodeListStore {
    fn default() -> Self {
        Self::new()
    }
}
