use codequest_types::Result;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

fn default_currency() -> String {
    "EUR".to_string()
}

/// Platform wide configuration, resolved once at startup and handed into the
/// predicates explicitly. None of the helpers in this crate read the process
/// environment themselves.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlatformConfig {
    /// Designated super-user, matched case sensitively against user emails
    /// (see [`crate::access::is_owner_by_email`]).
    #[serde(default)]
    pub owner_email: Option<String>,
    /// Display currency for the pricing page.
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            owner_email: None,
            currency: default_currency(),
        }
    }
}

impl PlatformConfig {
    /// Resolve the config from the process environment (`OWNER_EMAIL`,
    /// `PLATFORM_CURRENCY`). Missing variables fall back to the defaults.
    pub fn from_env() -> Self {
        Self {
            owner_email: std::env::var("OWNER_EMAIL").ok(),
            currency: std::env::var("PLATFORM_CURRENCY").unwrap_or_else(|_| default_currency()),
        }
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(codequest_types::json::from_str(raw)?)
    }
}
