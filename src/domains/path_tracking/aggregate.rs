use super::ports::KeyValueStore;
use crate::common::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Robot identifier as it appears in the feed. Numeric ids are kept in
/// their decimal form so `66` and `"66"` address the same robot.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RobotId(String);

impl RobotId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RobotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RobotId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<u32> for RobotId {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

/// Append-only trajectory of one robot, in recording order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<Position>);

impl Path {
    pub fn positions(&self) -> &[Position] {
        &self.0
    }

    pub fn last(&self) -> Option<&Position> {
        self.0.last()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn push(&mut self, position: Position) {
        self.0.push(position);
    }
}

impl From<Vec<Position>> for Path {
    fn from(positions: Vec<Position>) -> Self {
        Self(positions)
    }
}

pub type PathMap = BTreeMap<RobotId, Path>;

/// Per-robot trajectories, mirrored into a [`KeyValueStore`] after every
/// mutation. Every robot present in the map has at least one position.
pub struct PathStore {
    paths: PathMap,
    storage: Arc<dyn KeyValueStore>,
    key: String,
}

impl PathStore {
    /// Empty store bound to `storage`; nothing is read or written yet.
    pub fn new(storage: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            paths: PathMap::new(),
            storage,
            key: key.into(),
        }
    }

    /// Load the previously persisted mapping. Missing, unreadable or corrupt
    /// data yields an empty store.
    pub fn restore(storage: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let mut store = Self::new(storage, key);
        match store.storage.get(&store.key) {
            Ok(Some(raw)) => match serde_json::from_str::<PathMap>(&raw) {
                Ok(paths) => {
                    store.paths = paths.into_iter().filter(|(_, p)| !p.is_empty()).collect();
                    debug!("Restored {} robot path(s) from '{}'", store.paths.len(), store.key);
                }
                Err(e) => warn!("Discarding corrupt path data under '{}': {}", store.key, e),
            },
            Ok(None) => debug!("No stored paths under '{}'", store.key),
            Err(e) => warn!("Could not read stored paths: {}", e),
        }
        store
    }

    /// Append `(x, y)` to the path of `robot_id` and persist.
    ///
    /// The in-memory append stands even when persisting fails; the error is
    /// returned so the caller can report it.
    pub fn record_position(&mut self, robot_id: RobotId, x: f64, y: f64) -> DomainResult<()> {
        self.paths
            .entry(robot_id)
            .or_default()
            .push(Position::new(x, y));
        self.persist()
    }

    pub fn paths(&self) -> &PathMap {
        &self.paths
    }

    pub fn path(&self, robot_id: &RobotId) -> Option<&Path> {
        self.paths.get(robot_id)
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Forget every path and remove the storage entry.
    pub fn clear(&mut self) -> DomainResult<()> {
        self.paths.clear();
        self.storage.remove(&self.key)
    }

    pub fn persist(&self) -> DomainResult<()> {
        let raw = serde_json::to_string(&self.paths).map_err(|e| DomainError::Storage {
            key: self.key.clone(),
            reason: format!("serialize failed: {}", e),
        })?;
        self.storage.set(&self.key, &raw)
    }
}
