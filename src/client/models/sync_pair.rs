//! Sync pair addressing keys

use std::fmt;

/// One side of a sync pair: an AWS account and region.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SyncEndpoint {
    pub account_id: String,
    pub region: String,
}

impl SyncEndpoint {
    pub fn new(account_id: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            region: region.into(),
        }
    }
}

impl fmt::Display for SyncEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.account_id, self.region)
    }
}

/// Source and target endpoints under which recovery points are organized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SyncPair {
    pub source: SyncEndpoint,
    pub target: SyncEndpoint,
}

impl SyncPair {
    pub fn new(
        source_account_id: impl Into<String>,
        source_region: impl Into<String>,
        target_account_id: impl Into<String>,
        target_region: impl Into<String>,
    ) -> Self {
        Self {
            source: SyncEndpoint::new(source_account_id, source_region),
            target: SyncEndpoint::new(target_account_id, target_region),
        }
    }
}

impl fmt::Display for SyncPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.source, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let pair = SyncPair::new("111", "us-east-1", "222", "us-west-2");
        assert_eq!(pair.source.to_string(), "111/us-east-1");
        assert_eq!(pair.to_string(), "111/us-east-1/222/us-west-2");
    }

    #[test]
    fn test_structural_equality() {
        let a = SyncPair::new("111", "us-east-1", "222", "us-west-2");
        let b = SyncPair::new("111", "us-east-1", "222", "us-west-2");
        let c = SyncPair::new("111", "us-east-1", "222", "eu-west-1");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
