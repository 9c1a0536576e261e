//! Cart price calculator.

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use gaming_odyssey_core::price::format_amount;

use crate::models::CartItem;

/// Sales tax applied to the subtotal (10%).
pub const TAX_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Subtotals strictly above this ship free.
pub const FREE_SHIPPING_THRESHOLD: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Flat shipping charge below the free-shipping threshold.
pub const FLAT_SHIPPING: Decimal = Decimal::from_parts(999, 0, 0, false, 2);

/// Cart totals, each rounded to two places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartTotals {
    #[serde(serialize_with = "serialize_amount")]
    pub subtotal: Decimal,
    #[serde(serialize_with = "serialize_amount")]
    pub tax: Decimal,
    #[serde(serialize_with = "serialize_amount")]
    pub shipping: Decimal,
    #[serde(serialize_with = "serialize_amount")]
    pub total: Decimal,
}

/// Compute subtotal, tax, shipping and total for a cart.
///
/// All arithmetic runs on unrounded values; rounding happens once per
/// figure on the way out. Sums saturate at [`Decimal::MAX`] instead of
/// overflowing. Currency codes are not reconciled.
#[must_use]
pub fn compute_totals(cart: &[CartItem]) -> CartTotals {
    let subtotal = cart
        .iter()
        .map(|item| item.price.line_amount(item.quantity))
        .fold(Decimal::ZERO, Decimal::saturating_add);
    let tax = subtotal.saturating_mul(TAX_RATE);
    let shipping = if subtotal > FREE_SHIPPING_THRESHOLD {
        Decimal::ZERO
    } else {
        FLAT_SHIPPING
    };
    let total = subtotal.saturating_add(tax).saturating_add(shipping);

    CartTotals {
        subtotal: round(subtotal),
        tax: round(tax),
        shipping: round(shipping),
        total: round(total),
    }
}

fn round(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

fn serialize_amount<S>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_amount(*amount))
}
