//! Coercion of loosely-typed input into cart numbers.
//!
//! Quantities, ids and prices arrive from form fields, data attributes and
//! previously stored documents, so they may be numbers, numeric strings, or
//! garbage. Every conversion in the crate goes through this module and
//! follows a "parse or default" policy: nothing here fails.
//!
//! Integer parsing reads a leading run of decimal digits, the way a form
//! field is read: `"12abc"` is 12, `"3.7"` is 3, `"abc"` is nothing.

use serde_json::Value;

use crate::types::ItemId;

/// Parse a value as an integer.
///
/// - Integers are returned as-is; finite floats are truncated toward zero.
/// - Strings skip leading whitespace, accept an optional sign, then read the
///   leading decimal digits.
/// - Booleans, null, arrays, objects, and values that overflow `i64` give
///   `None`.
pub fn parse_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i)
            } else if let Some(u) = n.as_u64() {
                i64::try_from(u).ok()
            } else {
                n.as_f64().and_then(truncate)
            }
        }
        Value::String(s) => int_prefix(s),
        _ => None,
    }
}

/// Parse a value as a float.
///
/// Strings yield their longest leading decimal literal (`"9.99 USD"` is
/// 9.99). Non-finite results give `None`.
pub fn parse_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => float_prefix(s),
        _ => None,
    }
}

/// Parse a value as an item id.
pub fn parse_id(value: &Value) -> Option<ItemId> {
    parse_int(value).map(ItemId)
}

/// Parse a quantity to assign: default 1, floor 1.
///
/// Zero counts as "not given" and also becomes 1.
pub fn parse_quantity(value: &Value) -> i64 {
    match parse_int(value) {
        Some(n) if n != 0 => n.max(1),
        _ => 1,
    }
}

/// Parse an amount to add to an existing quantity: default 1.
///
/// Unlike [`parse_quantity`] the result may be negative; the caller floors
/// the merged quantity.
pub fn parse_increment(value: &Value) -> i64 {
    match parse_int(value) {
        Some(n) if n != 0 => n,
        _ => 1,
    }
}

/// Parse a price: default 0, floor 0.
pub fn parse_price(value: &Value) -> f64 {
    parse_float(value).map_or(0.0, |p| p.max(0.0))
}

fn truncate(f: f64) -> Option<i64> {
    if !f.is_finite() {
        return None;
    }
    let t = f.trunc();
    // i64::MAX as f64 rounds up to 2^63, which is already out of range.
    if t >= -(2f64.powi(63)) && t < 2f64.powi(63) {
        Some(t as i64)
    } else {
        None
    }
}

fn int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = digits_from(bytes, sign);
    if digits == 0 {
        return None;
    }
    s[..sign + digits].parse().ok()
}

fn float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_digits = digits_from(bytes, end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(bytes, end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits_from(bytes, exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok().filter(|f| f.is_finite())
}

fn digits_from(bytes: &[u8], start: usize) -> usize {
    bytes
        .get(start..)
        .map_or(0, |tail| tail.iter().take_while(|b| b.is_ascii_digit()).count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_parse_int_numbers() {
        assert_eq!(parse_int(&json!(5)), Some(5));
        assert_eq!(parse_int(&json!(-3)), Some(-3));
        assert_eq!(parse_int(&json!(2.9)), Some(2));
        assert_eq!(parse_int(&json!(-2.9)), Some(-2));
        assert_eq!(parse_int(&json!(1e300)), None);
    }

    #[test]
    fn test_parse_int_strings() {
        assert_eq!(parse_int(&json!("12")), Some(12));
        assert_eq!(parse_int(&json!("  7")), Some(7));
        assert_eq!(parse_int(&json!("12abc")), Some(12));
        assert_eq!(parse_int(&json!("3.7")), Some(3));
        assert_eq!(parse_int(&json!("-4")), Some(-4));
        assert_eq!(parse_int(&json!("+4")), Some(4));
        assert_eq!(parse_int(&json!("abc")), None);
        assert_eq!(parse_int(&json!("")), None);
        assert_eq!(parse_int(&json!("-")), None);
        assert_eq!(parse_int(&json!("99999999999999999999")), None);
    }

    #[test]
    fn test_parse_int_other_types() {
        assert_eq!(parse_int(&json!(null)), None);
        assert_eq!(parse_int(&json!(true)), None);
        assert_eq!(parse_int(&json!([1])), None);
        assert_eq!(parse_int(&json!({"qty": 1})), None);
    }

    #[test]
    fn test_parse_float() {
        assert_eq!(parse_float(&json!(9.99)), Some(9.99));
        assert_eq!(parse_float(&json!("9.99 USD")), Some(9.99));
        assert_eq!(parse_float(&json!(".5")), Some(0.5));
        assert_eq!(parse_float(&json!("5.")), Some(5.0));
        assert_eq!(parse_float(&json!("1e2")), Some(100.0));
        assert_eq!(parse_float(&json!("1e")), Some(1.0));
        assert_eq!(parse_float(&json!("-0.25")), Some(-0.25));
        assert_eq!(parse_float(&json!(".")), None);
        assert_eq!(parse_float(&json!("price")), None);
        assert_eq!(parse_float(&json!(null)), None);
    }

    #[test]
    fn test_parse_quantity_defaults() {
        assert_eq!(parse_quantity(&json!(3)), 3);
        assert_eq!(parse_quantity(&json!("abc")), 1);
        assert_eq!(parse_quantity(&json!(null)), 1);
        assert_eq!(parse_quantity(&json!(0)), 1);
        assert_eq!(parse_quantity(&json!(-5)), 1);
        assert_eq!(parse_quantity(&json!("4 pcs")), 4);
    }

    #[test]
    fn test_parse_increment_keeps_sign() {
        assert_eq!(parse_increment(&json!(2)), 2);
        assert_eq!(parse_increment(&json!(-2)), -2);
        assert_eq!(parse_increment(&json!("x")), 1);
        assert_eq!(parse_increment(&json!(0)), 1);
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price(&json!("16.50")), 16.5);
        assert_eq!(parse_price(&json!(-3.0)), 0.0);
        assert_eq!(parse_price(&json!("free")), 0.0);
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id(&json!("8")), Some(ItemId(8)));
        assert_eq!(parse_id(&json!("sku-8")), None);
    }

    proptest! {
        #[test]
        fn parse_quantity_is_at_least_one(s in ".*") {
            prop_assert!(parse_quantity(&Value::String(s)) >= 1);
        }

        #[test]
        fn parse_int_reads_integer_strings(n in any::<i64>()) {
            prop_assert_eq!(parse_int(&Value::String(n.to_string())), Some(n));
        }

        #[test]
        fn parse_price_is_never_negative(f in any::<f64>()) {
            let value = serde_json::Number::from_f64(f).map_or(Value::Null, Value::Number);
            prop_assert!(parse_price(&value) >= 0.0);
        }
    }
}
