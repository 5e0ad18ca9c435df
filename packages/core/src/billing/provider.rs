use crate::subscription::SubscriptionStatus;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Provider statuses we expect to encounter. Everything outside this list is
/// logged before the default mapping applies.
const KNOWN_PROVIDER_STATUSES: &[&str] = &[
    "active",
    "canceled",
    "incomplete",
    "incomplete_expired",
    "past_due",
    "unpaid",
    "trialing",
    "paused",
];

/// Map a billing provider subscription status onto the internal vocabulary.
///
/// Total over all strings: only `active` and `canceled` map onto their
/// counterparts, everything else (including garbage input) degrades to
/// `Expired`. Provider payloads are partially trusted, so this must never
/// panic.
pub fn map_billing_status(provider_status: &str) -> SubscriptionStatus {
    match provider_status {
        "active" => SubscriptionStatus::Active,
        "canceled" => SubscriptionStatus::Canceled,
        other => {
            if !KNOWN_PROVIDER_STATUSES.contains(&other) {
                tracing::warn!(
                    status = %other,
                    "Unknown billing provider status, treating as expired"
                );
            }
            SubscriptionStatus::Expired
        }
    }
}

/// Paid plans offered on the pricing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionPlan {
    Monthly,
    Yearly,
    Lifetime,
}

/// Resolve a plan from the provider price nickname. Case sensitive, exact
/// match; an unrecognized nickname yields `None`, which callers must handle
/// (it is not an error).
pub fn map_plan_from_price_nickname(nickname: &str) -> Option<SubscriptionPlan> {
    match nickname {
        "Monthly" => Some(SubscriptionPlan::Monthly),
        "Yearly" => Some(SubscriptionPlan::Yearly),
        "Lifetime" => Some(SubscriptionPlan::Lifetime),
        _ => None,
    }
}

/// Price object as returned by the billing provider. Only the fields this
/// layer reads are modeled; missing nicknames are expected.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ProviderPrice {
    #[serde(default)]
    pub nickname: Option<String>,
}

impl ProviderPrice {
    pub fn plan(&self) -> Option<SubscriptionPlan> {
        self.nickname.as_deref().and_then(map_plan_from_price_nickname)
    }
}
