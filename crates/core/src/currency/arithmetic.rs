//! Overflow-tolerant decimal arithmetic for aggregated amounts.
//!
//! `Decimal` panics when an operation overflows its 96-bit mantissa. Amounts
//! that reach that range are treated like any other unusable amount: the
//! offending term counts as zero and a warning is logged.

use rust_decimal::Decimal;
use tracing::warn;

/// `total + value`, or `total` unchanged when the sum overflows.
pub(crate) fn add(total: Decimal, value: Decimal) -> Decimal {
    total.checked_add(value).unwrap_or_else(|| {
        warn!(%total, %value, "Amount overflow, term ignored");
        total
    })
}

/// Sum of `values` in iteration order, skipping terms that would overflow.
pub(crate) fn sum(values: impl IntoIterator<Item = Decimal>) -> Decimal {
    values.into_iter().fold(Decimal::ZERO, add)
}

/// `lhs - rhs`, or zero when the difference overflows.
pub(crate) fn sub(lhs: Decimal, rhs: Decimal) -> Decimal {
    lhs.checked_sub(rhs).unwrap_or_else(|| {
        warn!(%lhs, %rhs, "Amount overflow, difference set to zero");
        Decimal::ZERO
    })
}

/// `lhs * rhs`, or zero when the product overflows.
pub(crate) fn mul(lhs: Decimal, rhs: Decimal) -> Decimal {
    lhs.checked_mul(rhs).unwrap_or_else(|| {
        warn!(%lhs, %rhs, "Amount overflow, product set to zero");
        Decimal::ZERO
    })
}
