use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What to hand back to the caller when the routing provider fails.
///
/// Both variants record the failure first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutingFailurePolicy {
    /// Surface the provider failure as an error.
    Strict,
    /// Answer with a great-circle estimate flagged as approximate.
    #[default]
    Fallback,
}

impl FromStr for RoutingFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "fallback" => Ok(Self::Fallback),
            other => Err(format!(
                "unknown routing failure policy '{}', expected 'strict' or 'fallback'",
                other
            )),
        }
    }
}

impl fmt::Display for RoutingFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => f.write_str("strict"),
            Self::Fallback => f.write_str("fallback"),
        }
    }
}
