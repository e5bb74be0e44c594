// Mon Feb 09 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which front-end script runtime the display output targets. The two
/// runtimes disagree on one point: whether a sentinel value ("(null)",
/// "<uninitialized>") is followed by an explicit zero child count or the
/// count is left for the host to infer. They are kept as separate
/// profiles rather than unified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostProfile {
    #[default]
    Modern,
    Legacy,
}

impl HostProfile {
    pub fn states_empty_children(&self) -> bool {
        matches!(self, Self::Modern)
    }
}

impl fmt::Display for HostProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Modern => write!(f, "modern"),
            Self::Legacy => write!(f, "legacy"),
        }
    }
}

impl FromStr for HostProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "modern" => Ok(Self::Modern),
            "legacy" => Ok(Self::Legacy),
            other => Err(format!("unknown host profile '{}'", other)),
        }
    }
}
