use serde::Deserialize;

/// A request parameter that may arrive as a JSON number or a string.
///
/// Clients historically sent numeric ids both ways; the guards treat the two
/// forms alike.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum ParamValue {
    Int(i64),
    Text(String),
}

/// Extracts an integer from a loosely-typed parameter.
///
/// `None` when the parameter is absent or not numeric.
pub fn numeric_param(value: Option<&ParamValue>) -> Option<i64> {
    match value {
        Some(ParamValue::Int(n)) => Some(*n),
        Some(ParamValue::Text(s)) => s.trim().parse().ok(),
        None => None,
    }
}

/// Extracts a non-empty string of at most `max_len` characters.
pub fn text_param(value: Option<&str>, max_len: usize) -> Option<&str> {
    match value {
        Some(s) if !s.is_empty() && s.chars().count() <= max_len => Some(s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_param_accepts_numbers_and_numeric_strings() {
        assert_eq!(numeric_param(Some(&ParamValue::Int(42))), Some(42));
        assert_eq!(
            numeric_param(Some(&ParamValue::Text("42".to_string()))),
            Some(42)
        );
        assert_eq!(
            numeric_param(Some(&ParamValue::Text(" 7 ".to_string()))),
            Some(7)
        );
    }

    #[test]
    fn numeric_param_rejects_non_numeric_input() {
        assert_eq!(
            numeric_param(Some(&ParamValue::Text("forty-two".to_string()))),
            None
        );
        assert_eq!(numeric_param(Some(&ParamValue::Text(String::new()))), None);
        assert_eq!(numeric_param(None), None);
    }

    #[test]
    fn text_param_requires_non_empty_bounded_input() {
        assert_eq!(text_param(Some("spam"), 255), Some("spam"));
        assert_eq!(text_param(Some(""), 255), None);
        assert_eq!(text_param(None, 255), None);

        let long = "x".repeat(256);
        assert_eq!(text_param(Some(&long), 255), None);
        let fits = "x".repeat(255);
        assert_eq!(text_param(Some(&fits), 255), Some(fits.as_str()));
    }
}
