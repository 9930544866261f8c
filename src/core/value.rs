use crate::domain::model::Value;

pub fn is_string(value: &Value) -> bool {
    matches!(value, Value::Text(_))
}

/// 字串回傳字元數，數字回傳兩倍的值
pub fn process_value(value: &Value) -> f64 {
    match value {
        Value::Text(text) => text.chars().count() as f64,
        Value::Number(n) => n * 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_string() {
        assert!(is_string(&Value::from("hello")));
        assert!(!is_string(&Value::from(7)));
    }

    #[test]
    fn test_narrowing_accessors() {
        let text = Value::from("hello");
        assert_eq!(text.as_text(), Some("hello"));
        assert_eq!(text.as_number(), None);

        let number = Value::from(2.5);
        assert_eq!(number.as_text(), None);
        assert_eq!(number.as_number(), Some(2.5));
    }

    #[test]
    fn test_process_value() {
        assert_eq!(process_value(&Value::from("hello")), 5.0);
        assert_eq!(process_value(&Value::from(7)), 14.0);
        assert_eq!(process_value(&Value::from("")), 0.0);
        assert_eq!(process_value(&Value::from(-1.5)), -3.0);
    }

    #[test]
    fn test_text_length_counts_characters() {
        assert_eq!(process_value(&Value::from("héllo")), 5.0);
    }
}
