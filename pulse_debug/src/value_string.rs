// value_string.rs - property values flattened to display strings

use pulse_nodes::PropertyValue;

/// Flatten a property value into the inspector's display string.
///
/// Composites enumerate their fields in declaration/insertion order,
/// recursively, joined by commas with no trailing separator. Numbers render
/// with two decimals; everything else uses its default string form.
pub fn value_string(value: &PropertyValue) -> String {
    match value {
        PropertyValue::Null => "null".to_string(),
        PropertyValue::Bool(b) => b.to_string(),
        PropertyValue::Number(n) => fixed2(*n),
        PropertyValue::String(s) => s.to_string(),
        PropertyValue::Vector2(v) => format!("{},{}", fixed2_f32(v.x), fixed2_f32(v.y)),
        PropertyValue::Size(s) => format!("{},{}", fixed2_f32(s.width), fixed2_f32(s.height)),
        PropertyValue::Array(items) => items
            .iter()
            .map(value_string)
            .collect::<Vec<_>>()
            .join(","),
        PropertyValue::Object(fields) => fields
            .values()
            .map(value_string)
            .collect::<Vec<_>>()
            .join(","),
    }
}

/// Two-decimal rendering with half-up rounding applied to the value's
/// shortest decimal form. A bare `{:.2}` rounds the underlying binary
/// float, which turns 1.005 into "1.00"; rounding the decimal digits
/// instead gives the "1.01" a reader of the panel expects.
fn fixed2(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    round_half_up(&format!("{}", value.abs()), value < 0.0)
}

/// Same, but from the f32's own shortest form: widening 1.005f32 to f64
/// first would expose the binary tail (1.0049999...) and round down.
fn fixed2_f32(value: f32) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    round_half_up(&format!("{}", value.abs()), value < 0.0)
}

fn round_half_up(text: &str, negative: bool) -> String {
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, f),
        None => (text, ""),
    };

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(2))
        .map(|b| b - b'0')
        .collect();
    for _ in frac_part.len()..2 {
        digits.push(0);
    }

    if frac_part.as_bytes().get(2).is_some_and(|&b| b >= b'5') {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, 1);
                break;
            }
            i -= 1;
            if digits[i] == 9 {
                digits[i] = 0;
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - 2;
    let mut out = String::with_capacity(digits.len() + 2);
    if negative && digits.iter().any(|&d| d != 0) {
        out.push('-');
    }
    if split == 0 {
        out.push('0');
    }
    for &d in &digits[..split] {
        out.push((d + b'0') as char);
    }
    out.push('.');
    for &d in &digits[split..] {
        out.push((d + b'0') as char);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_nodes::{Size, Vector2};
    use serde_json::json;

    // -------------------- Scalars --------------------

    #[test]
    fn numbers_get_two_decimals() {
        assert_eq!(value_string(&PropertyValue::Number(5.0)), "5.00");
        assert_eq!(value_string(&PropertyValue::Number(2.0)), "2.00");
        assert_eq!(value_string(&PropertyValue::Number(0.0)), "0.00");
        assert_eq!(value_string(&PropertyValue::Number(-3.5)), "-3.50");
    }

    #[test]
    fn strings_pass_through() {
        assert_eq!(value_string(&PropertyValue::string("abc")), "abc");
    }

    #[test]
    fn bool_and_null_use_default_conversion() {
        assert_eq!(value_string(&PropertyValue::Bool(true)), "true");
        assert_eq!(value_string(&PropertyValue::Null), "null");
    }

    // -------------------- Rounding --------------------

    #[test]
    fn half_up_rounding_on_decimal_form() {
        assert_eq!(fixed2(1.005), "1.01");
        assert_eq!(fixed2(1.004), "1.00");
        assert_eq!(fixed2(0.999), "1.00");
        assert_eq!(fixed2(99.995), "100.00");
        assert_eq!(fixed2(-1.005), "-1.01");
    }

    #[test]
    fn f32_values_round_on_their_own_decimal_form() {
        assert_eq!(fixed2_f32(1.005_f32), "1.01");
        assert_eq!(
            value_string(&PropertyValue::Vector2(Vector2::new(1.005, 2.0))),
            "1.01,2.00"
        );
    }

    #[test]
    fn tiny_and_negative_zero_values() {
        assert_eq!(fixed2(0.0000001), "0.00");
        // Sign is suppressed when every digit rounds away to zero.
        assert_eq!(fixed2(-0.004), "0.00");
        assert_eq!(fixed2(-0.0), "0.00");
    }

    // -------------------- Composites --------------------

    #[test]
    fn object_fields_join_in_insertion_order() {
        let value = PropertyValue::from_json(json!({ "x": 1.005, "y": 2 }));
        assert_eq!(value_string(&value), "1.01,2.00");
    }

    #[test]
    fn vector_and_size_follow_declaration_order() {
        assert_eq!(
            value_string(&PropertyValue::Vector2(Vector2::new(35.0, 325.0))),
            "35.00,325.00"
        );
        assert_eq!(
            value_string(&PropertyValue::Size(Size::new(64.0, 32.0))),
            "64.00,32.00"
        );
    }

    #[test]
    fn nested_composites_flatten_recursively() {
        let value = PropertyValue::from_json(json!({
            "bounds": { "x": 1, "y": 2 },
            "label": "hud",
        }));
        assert_eq!(value_string(&value), "1.00,2.00,hud");
    }

    #[test]
    fn arrays_join_like_objects() {
        let value = PropertyValue::from_json(json!([1, "a", 2.5]));
        assert_eq!(value_string(&value), "1.00,a,2.50");
    }

    #[test]
    fn empty_composite_is_empty_string() {
        assert_eq!(value_string(&PropertyValue::object()), "");
    }
}
