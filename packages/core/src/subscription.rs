use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Closed subscription vocabulary shared with the frontend and the billing
/// provider mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionStatus {
    Active,
    Canceled,
    Expired,
}

/// Derived, user facing subscription state. Unlike [`SubscriptionStatus`]
/// this carries an `Unknown` arm for stored values outside the current
/// vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectiveStatus {
    Active,
    Canceled,
    Expired,
    Unknown,
}

/// Stored subscription record as fetched from the database.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// Raw persisted status. Kept as a string since historic rows may carry
    /// values outside the current vocabulary.
    pub status: String,
    /// Instant at which the subscription stops granting access, if bounded.
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
}

const STORED_ACTIVE: &str = "ACTIVE";
const STORED_CANCELED: &str = "CANCELED";

/// Derive the effective subscription state at the given instant.
///
/// `None` in, `None` out: what a missing subscription means is up to the
/// caller (access checks treat it as no entitlement). Otherwise the first
/// matching rule wins:
///
/// 1. a stored `CANCELED` is terminal and reported as-is, even when the end
///    date lies in the future;
/// 2. an end date at or before `now` means the subscription has expired;
/// 3. a stored `ACTIVE` with a live end date is active;
/// 4. anything else is `Unknown`.
///
/// `now` is an explicit parameter so callers (and tests) control the clock.
/// Comparisons are instant based, so an end date persisted with any UTC
/// offset compares correctly.
pub fn effective_status(
    subscription: Option<&Subscription>,
    now: DateTime<Utc>,
) -> Option<EffectiveStatus> {
    let subscription = subscription?;

    if subscription.status == STORED_CANCELED {
        return Some(EffectiveStatus::Canceled);
    }

    if let Some(end_date) = subscription.end_date {
        if end_date <= now {
            return Some(EffectiveStatus::Expired);
        }
    }

    if subscription.status == STORED_ACTIVE {
        return Some(EffectiveStatus::Active);
    }

    tracing::warn!(
        status = %subscription.status,
        "Unrecognized stored subscription status"
    );
    Some(EffectiveStatus::Unknown)
}
