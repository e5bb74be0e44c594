// Mon Feb 02 2026 - Alex

use crate::decode::HostProfile;
use serde::{Deserialize, Serialize};

/// Limits and policy for one inspection session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectConfig {
    /// Hard cap on items produced by any linked or bucketed walk, so a
    /// corrupted chain can never hang the session.
    pub max_items: usize,
    /// Upper bound on a plausible hash-table bucket array.
    pub max_buckets: usize,
    /// Longest string payload read before truncating the display.
    pub max_string_length: usize,
    /// Bytes shown when a value can only be hex-dumped.
    pub max_raw_bytes: usize,
    /// Default depth of children materialized without explicit expansion.
    pub expand_depth: usize,
    pub profile: HostProfile,
    pub use_color: bool,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            max_items: 10_000,
            max_buckets: 1 << 20,
            max_string_length: 4096,
            max_raw_bytes: 64,
            expand_depth: 1,
            profile: HostProfile::Modern,
            use_color: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = InspectConfig::default();
        assert_eq!(c.max_items, 10_000);
        assert_eq!(c.expand_depth, 1);
        assert_eq!(c.profile, HostProfile::Modern);
    }

    #[test]
    fn test_serde_round_trip() {
        let c = InspectConfig {
            max_items: 5,
            profile: HostProfile::Legacy,
            ..InspectConfig::default()
        };
        let text = serde_json::to_string(&c).unwrap();
        let back: InspectConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(back.max_items, 5);
        assert_eq!(back.profile, HostProfile::Legacy);
    }
}
