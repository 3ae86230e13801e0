use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::LazyLock;
use tracing::debug;

/// Longest leading run of text that reads as a decimal number, optionally in
/// scientific notation. Anything after it is ignored.
static NUMERIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
        .expect("numeric prefix pattern is valid")
});

/// Coerces raw form text into a number.
///
/// Reads the leading numeric part of `raw` the way a browser number box does
/// (`"12abc"` reads as 12, `" .5"` as 0.5, `"1e3"` as 1000). Blank text, text
/// without a numeric prefix, and values outside the `Decimal` range all read
/// as zero. This never fails.
pub fn coerce_amount(raw: &str) -> Decimal {
    let Some(prefix) = NUMERIC_PREFIX.captures(raw).and_then(|caps| caps.get(1)) else {
        if !raw.trim().is_empty() {
            debug!(input = %raw, "no numeric prefix, reading as 0");
        }
        return Decimal::ZERO;
    };

    parse_prefix(prefix.as_str()).unwrap_or_else(|| {
        debug!(input = %raw, "numeric prefix out of range, reading as 0");
        Decimal::ZERO
    })
}

/// Decimal carries at most 28 significant digits; exponents past this can only
/// overflow or vanish.
const MAX_EXPONENT: u32 = 56;

fn parse_prefix(text: &str) -> Option<Decimal> {
    let (mantissa, exponent) = match text.find(['e', 'E']) {
        Some(pos) => (&text[..pos], Some(&text[pos + 1..])),
        None => (text, None),
    };

    let negative = mantissa.starts_with('-');
    let unsigned = mantissa.trim_start_matches(['+', '-']).trim_end_matches('.');
    let unsigned = if unsigned.starts_with('.') {
        format!("0{unsigned}")
    } else {
        unsigned.to_string()
    };

    let mut value = Decimal::from_str(&unsigned).ok()?;
    if let Some(exp) = exponent {
        let exp: i32 = exp.parse().ok()?;
        if exp.unsigned_abs() > MAX_EXPONENT {
            return None;
        }
        for _ in 0..exp.unsigned_abs() {
            value = if exp > 0 {
                value.checked_mul(Decimal::TEN)?
            } else {
                value / Decimal::TEN
            };
        }
    }

    if value.is_zero() {
        Some(Decimal::ZERO)
    } else if negative {
        Some(-value)
    } else {
        Some(value)
    }
}
