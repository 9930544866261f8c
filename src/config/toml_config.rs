use crate::domain::model::{Day, Item, Product, Value};
use crate::utils::error::{Result, ShowcaseError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_SQUARE_DELAY_MS: u64 = 1000;
pub const MAX_SQUARE_DELAY_MS: u64 = 60_000;
pub const DEFAULT_REPORT_FILENAME: &str = "showcase_report.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowcaseConfig {
    pub showcase: ShowcaseSection,
    pub text: Option<TextConfig>,
    pub ratings: Option<RatingsConfig>,
    pub concat: Option<ConcatConfig>,
    pub vehicle: Option<VehicleConfig>,
    pub values: Option<ValuesConfig>,
    pub products: Option<ProductsConfig>,
    pub days: Option<DaysConfig>,
    pub square: Option<SquareConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowcaseSection {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextConfig {
    pub inputs: Vec<String>,
    pub uppercase: Option<bool>,
}

/// 評分資料可以直接寫在設定檔，也可以指向 CSV/JSON 檔
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingsConfig {
    pub items: Option<Vec<Item>>,
    pub file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConcatConfig {
    pub sequences: Vec<Vec<Value>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleConfig {
    pub make: String,
    pub year: i32,
    pub model: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuesConfig {
    pub inputs: Vec<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductsConfig {
    pub items: Option<Vec<Product>>,
    pub file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaysConfig {
    pub days: Vec<Day>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SquareConfig {
    pub inputs: Vec<f64>,
    pub delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    pub filename: Option<String>,
}

impl ShowcaseConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ShowcaseError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ShowcaseError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})，找不到的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ShowcaseError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("showcase.name", &self.showcase.name)?;

        if let Some(ratings) = &self.ratings {
            Self::validate_record_source("ratings", ratings.items.is_some(), ratings.file.as_deref())?;
        }

        if let Some(products) = &self.products {
            Self::validate_record_source(
                "products",
                products.items.is_some(),
                products.file.as_deref(),
            )?;
            for product in products.items.iter().flatten() {
                product.validate()?;
            }
        }

        if let Some(vehicle) = &self.vehicle {
            validation::validate_non_empty_string("vehicle.make", &vehicle.make)?;
        }

        if let Some(square) = &self.square {
            if let Some(delay_ms) = square.delay_ms {
                validation::validate_range("square.delay_ms", delay_ms, 0, MAX_SQUARE_DELAY_MS)?;
            }
            if let Some(bad) = square.inputs.iter().find(|n| !n.is_finite()) {
                return Err(ShowcaseError::InvalidConfigValueError {
                    field: "square.inputs".to_string(),
                    value: bad.to_string(),
                    reason: "Inputs must be finite numbers".to_string(),
                });
            }
        }

        if let Some(output) = &self.output {
            validation::validate_path("output.path", &output.path)?;
        }

        Ok(())
    }

    fn validate_record_source(section: &str, has_items: bool, file: Option<&str>) -> Result<()> {
        match (has_items, file) {
            (true, Some(_)) => Err(ShowcaseError::ConfigValidationError {
                field: section.to_string(),
                message: "Set either 'items' or 'file', not both".to_string(),
            }),
            (false, None) => Err(ShowcaseError::MissingConfigError {
                field: format!("{}.items or {}.file", section, section),
            }),
            (false, Some(file)) => {
                let field = format!("{}.file", section);
                validation::validate_path(&field, file)?;
                validation::validate_file_extension(&field, file, &["csv", "json"])
            }
            (true, None) => Ok(()),
        }
    }

    /// 取得平方示範的延遲時間
    pub fn square_delay(&self) -> Duration {
        let millis = self
            .square
            .as_ref()
            .and_then(|s| s.delay_ms)
            .unwrap_or(DEFAULT_SQUARE_DELAY_MS);
        Duration::from_millis(millis)
    }

    pub fn report_filename(&self) -> &str {
        self.output
            .as_ref()
            .and_then(|o| o.filename.as_deref())
            .unwrap_or(DEFAULT_REPORT_FILENAME)
    }
}

impl Validate for ShowcaseConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const FULL_CONFIG: &str = r#"
[showcase]
name = "all-demos"
description = "Every demo once"

[text]
inputs = ["Hello", "World"]
uppercase = false

[ratings]
items = [
    { title = "Dune", rating = 4.8 },
    { title = "Unrated" },
]

[concat]
sequences = [[1, 2], ["three"], []]

[vehicle]
make = "Toyota"
year = 2020
model = "Corolla"

[values]
inputs = ["hello", 7, ""]

[products]
items = [
    { name = "A", price = 10 },
    { name = "B", price = 10 },
]

[days]
days = ["saturday", "wednesday"]

[square]
inputs = [5, -3]
delay_ms = 50

[output]
path = "./out"
"#;

    #[test]
    fn test_parse_full_config() {
        let config = ShowcaseConfig::from_toml_str(FULL_CONFIG).unwrap();

        assert_eq!(config.showcase.name, "all-demos");
        assert_eq!(config.text.as_ref().unwrap().uppercase, Some(false));

        let items = config.ratings.as_ref().unwrap().items.as_ref().unwrap();
        assert_eq!(items[1], Item::new("Unrated", None));

        let sequences = &config.concat.as_ref().unwrap().sequences;
        assert_eq!(sequences[1], vec![Value::Text("three".to_string())]);
        assert!(sequences[2].is_empty());

        assert_eq!(
            config.values.as_ref().unwrap().inputs,
            vec![Value::from("hello"), Value::from(7), Value::from("")]
        );
        assert_eq!(config.days.as_ref().unwrap().days, vec![Day::Saturday, Day::Wednesday]);
        assert_eq!(config.square_delay(), Duration::from_millis(50));
        assert_eq!(config.report_filename(), DEFAULT_REPORT_FILENAME);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_minimal_config_defaults() {
        let config = ShowcaseConfig::from_toml_str("[showcase]\nname = \"empty\"\n").unwrap();
        assert!(config.square.is_none());
        assert_eq!(config.square_delay(), Duration::from_millis(DEFAULT_SQUARE_DELAY_MS));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SHOWCASE_TEST_DATA_DIR", "fixtures");
        let toml_content = r#"
[showcase]
name = "env"

[ratings]
file = "${SHOWCASE_TEST_DATA_DIR}/items.csv"

[products]
file = "${SHOWCASE_TEST_UNSET_VAR}/products.csv"
"#;
        let config = ShowcaseConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.ratings.unwrap().file.as_deref(),
            Some("fixtures/items.csv")
        );
        assert_eq!(
            config.products.unwrap().file.as_deref(),
            Some("${SHOWCASE_TEST_UNSET_VAR}/products.csv")
        );
    }

    #[test]
    fn test_record_source_requires_items_or_file() {
        let config =
            ShowcaseConfig::from_toml_str("[showcase]\nname = \"x\"\n\n[ratings]\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ShowcaseError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_rejects_unsupported_record_file() {
        let config = ShowcaseConfig::from_toml_str(
            "[showcase]\nname = \"x\"\n\n[products]\nfile = \"products.xml\"\n",
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_accepts_upper_case_record_extension() {
        let config = ShowcaseConfig::from_toml_str(
            "[showcase]\nname = \"x\"\n\n[ratings]\nfile = \"items.CSV\"\n",
        )
        .unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_excessive_delay() {
        let config = ShowcaseConfig::from_toml_str(
            "[showcase]\nname = \"x\"\n\n[square]\ninputs = [1]\ndelay_ms = 120000\n",
        )
        .unwrap();
        assert!(matches!(
            config.validate(),
            Err(ShowcaseError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_rejects_unknown_day() {
        let result =
            ShowcaseConfig::from_toml_str("[showcase]\nname = \"x\"\n\n[days]\ndays = [\"funday\"]\n");
        assert!(matches!(
            result,
            Err(ShowcaseError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(FULL_CONFIG.as_bytes()).unwrap();

        let config = ShowcaseConfig::from_file(file.path()).unwrap();
        assert_eq!(config.vehicle.unwrap().model.as_deref(), Some("Corolla"));
    }
}
