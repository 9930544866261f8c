use crate::utils::error::ShowcaseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 有標題與評分的項目，評分可能缺漏
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub title: String,
    #[serde(default)]
    pub rating: Option<f64>,
}

impl Item {
    pub fn new(title: impl Into<String>, rating: Option<f64>) -> Self {
        Self {
            title: title.into(),
            rating,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// 字串或數字；untagged 反序列化，`"hello"` 與 `7` 各自對應一種
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Number(f64),
}

impl Value {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            Value::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Text(_) => None,
            Value::Number(n) => Some(*n),
        }
    }
}

impl FromStr for Value {
    type Err = std::convert::Infallible;

    /// 能解析成數字就當數字，否則當字串
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().parse::<f64>() {
            Ok(n) => Value::Number(n),
            Err(_) => Value::Text(s.to_string()),
        })
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Day {
    type Err = ShowcaseError;

    /// 接受完整名稱或三個字母的縮寫，不分大小寫
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Day::ALL
            .into_iter()
            .find(|day| {
                let name = day.name().to_ascii_lowercase();
                lowered == name || lowered == name[..3]
            })
            .ok_or_else(|| ShowcaseError::UnknownDay {
                input: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DayType {
    Weekday,
    Weekend,
}

impl DayType {
    pub fn as_str(self) -> &'static str {
        match self {
            DayType::Weekday => "Weekday",
            DayType::Weekend => "Weekend",
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 單一示範執行後的結果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoOutcome {
    pub name: String,
    pub success: bool,
    pub output: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DemoOutcome {
    pub fn success(name: impl Into<String>, output: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            success: true,
            output,
            error: None,
        }
    }

    pub fn failure(name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            success: false,
            output: serde_json::Value::Null,
            error: Some(error.into()),
        }
    }

    pub fn with_output(mut self, output: serde_json::Value) -> Self {
        self.output = output;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_from_str() {
        assert_eq!("Saturday".parse::<Day>().unwrap(), Day::Saturday);
        assert_eq!("wed".parse::<Day>().unwrap(), Day::Wednesday);
        assert_eq!(" SUN ".parse::<Day>().unwrap(), Day::Sunday);
        assert!("funday".parse::<Day>().is_err());
        assert!("".parse::<Day>().is_err());
    }

    #[test]
    fn test_value_deserializes_untagged() {
        let values: Vec<Value> = serde_json::from_str(r#"["hello", 7, ""]"#).unwrap();
        assert_eq!(
            values,
            vec![
                Value::Text("hello".to_string()),
                Value::Number(7.0),
                Value::Text(String::new())
            ]
        );
    }

    #[test]
    fn test_value_from_str() {
        assert_eq!("7".parse::<Value>().unwrap(), Value::Number(7.0));
        assert_eq!("-2.5".parse::<Value>().unwrap(), Value::Number(-2.5));
        assert_eq!("hello".parse::<Value>().unwrap(), Value::from("hello"));
        assert_eq!("".parse::<Value>().unwrap(), Value::from(""));
    }

    #[test]
    fn test_item_missing_rating_deserializes_as_none() {
        let item: Item = serde_json::from_str(r#"{"title": "Unrated"}"#).unwrap();
        assert_eq!(item.rating, None);
    }

    #[test]
    fn test_day_serde_lowercase() {
        let day: Day = serde_json::from_str(r#""friday""#).unwrap();
        assert_eq!(day, Day::Friday);
        assert_eq!(serde_json::to_string(&Day::Monday).unwrap(), r#""monday""#);
    }
}
