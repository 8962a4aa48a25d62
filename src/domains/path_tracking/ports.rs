use crate::common::DomainResult;

/// Durable key-value storage the path store mirrors itself into.
/// Values are opaque strings (the store writes JSON).
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> DomainResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> DomainResult<()>;
    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> DomainResult<()>;
}

/// Decides whether an incoming sample is a real reading worth recording.
pub trait PositionFilter: Send + Sync {
    fn accepts(&self, x: f64, y: f64) -> bool;
}
