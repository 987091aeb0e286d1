//! Money parsing and formatting
//!
//! Amounts travel as JSON numbers, but older deployments of the order
//! server serialize some of them as strings. `lossy` accepts both and maps
//! anything unparsable to zero so a single bad record cannot fail a whole
//! dashboard refresh.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Deserializer};

/// Deserialize an amount from a JSON number or a numeric string.
///
/// Unparsable values decode as `Decimal::ZERO` instead of failing the
/// surrounding record.
pub fn lossy<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    let amount = match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Decimal::from_f64(n).unwrap_or(Decimal::ZERO),
        Raw::Text(s) => s.trim().parse().unwrap_or_else(|_| {
            tracing::debug!(amount = %s, "unparsable amount, treating as zero");
            Decimal::ZERO
        }),
        Raw::Other(_) => Decimal::ZERO,
    };
    Ok(amount)
}

/// Format an amount as rupees with two decimal places
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use shared::money::format_rupees;
///
/// assert_eq!(format_rupees(Decimal::from(897)), "₹897.00");
/// assert_eq!(format_rupees(Decimal::new(15050, 2)), "₹150.50");
/// ```
pub fn format_rupees(amount: Decimal) -> String {
    format!("₹{:.2}", amount)
}
