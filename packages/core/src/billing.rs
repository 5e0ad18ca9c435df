//! Pricing and billing provider helpers backing the checkout page.

pub mod money;
pub mod provider;
