use crate::progress::{LessonProgress, ProblemProgress};
use crate::subscription::SubscriptionStatus;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Minimum entitlement declared on a piece of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessLevel {
    Free,
    Premium,
}

/// The slice of a user record this layer needs: identity, owner flag,
/// derived subscription status and the raw progress relations.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub email: Option<String>,
    /// Designated super-user, resolved upstream (see [`is_owner_by_email`]).
    #[serde(default)]
    pub is_owner: bool,
    #[serde(default)]
    pub current_subscription_status: Option<SubscriptionStatus>,
    #[serde(default)]
    pub lesson_progress: Vec<LessonProgress>,
    #[serde(default)]
    pub problem_progress: Vec<ProblemProgress>,
}

/// A request without any user context is let through, even for premium
/// content. Likely a gap, but existing consumers depend on it; flip this
/// constant once every call site passes a user.
const MISSING_USER_GRANTS_ACCESS: bool = true;

/// Decide whether a user may view content with the given declared access
/// level. No declared level and `Free` are always visible; owners bypass
/// every check; everyone else needs an active subscription.
pub fn has_access(user: Option<&User>, required: Option<AccessLevel>) -> bool {
    let Some(required) = required else {
        return true;
    };

    if required == AccessLevel::Free {
        return true;
    }

    let Some(user) = user else {
        return MISSING_USER_GRANTS_ACCESS;
    };

    if user.is_owner {
        return true;
    }

    user.current_subscription_status == Some(SubscriptionStatus::Active)
}

/// Strict owner flag check: absent user or unset flag is not an owner.
pub fn is_owner(user: Option<&User>) -> bool {
    user.map(|u| u.is_owner).unwrap_or(false)
}

/// Exact, case sensitive match against the configured owner email. The
/// configured value comes from [`crate::config::PlatformConfig`] and is
/// passed in explicitly so the predicate stays deterministic.
pub fn is_owner_by_email(email: Option<&str>, configured_owner_email: Option<&str>) -> bool {
    match (email, configured_owner_email) {
        (Some(email), Some(owner_email)) => email == owner_email,
        _ => false,
    }
}
