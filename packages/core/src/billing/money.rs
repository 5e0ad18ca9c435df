use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Display symbol for the platform's fixed currency (see
/// [`crate::config::PlatformConfig::currency`]).
const CURRENCY_SYMBOL: &str = "€";

/// Coupon attached to a checkout session. At most one of the two fields is
/// meaningful; a percentage discount takes precedence when both are set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActiveCoupon {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent_off: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_off: Option<f64>,
}

/// Render an amount in the platform currency: symbol prefix, comma grouped
/// thousands, no decimals for whole amounts and exactly two otherwise.
///
/// The exact output strings are a compatibility contract with the frontend,
/// e.g. `€10`, `€10.50`, `€1,000,000`.
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as i64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    if fraction == 0 {
        format!("{sign}{CURRENCY_SYMBOL}{grouped}")
    } else {
        format!("{sign}{CURRENCY_SYMBOL}{grouped}.{fraction:02}")
    }
}

/// Apply a coupon to a price. An absent or empty coupon leaves the price
/// unchanged; a fixed amount discount never takes the price below zero.
///
/// A field set to zero counts as unset, so a `percentOff: 0` coupon falls
/// through to its `amountOff` if any.
pub fn apply_discount(price: f64, coupon: Option<&ActiveCoupon>) -> f64 {
    let Some(coupon) = coupon else {
        return price;
    };

    if let Some(percent) = coupon.percent_off.filter(|p| *p != 0.0) {
        return price * (1.0 - percent / 100.0);
    }

    if let Some(amount) = coupon.amount_off.filter(|a| *a != 0.0) {
        return (price - amount).max(0.0);
    }

    price
}

/// Price breakdown recorded alongside a completed purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseSummary {
    /// Price before any discount.
    pub original_price: f64,
    /// Discount granted (0 if none).
    pub discount_amount: f64,
    /// Amount actually charged.
    pub price_paid: f64,
}

impl PurchaseSummary {
    pub fn new(original_price: f64, coupon: Option<&ActiveCoupon>) -> Self {
        let price_paid = apply_discount(original_price, coupon);
        Self {
            original_price,
            discount_amount: original_price - price_paid,
            price_paid,
        }
    }
}
