use crate::domain::model::{Item, Product};
use crate::utils::error::{Result, ShowcaseError};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ShowcaseError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ShowcaseError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extension(field_name: &str, file: &str, allowed_extensions: &[&str]) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    let extension = std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some(extension) if allowed_set.contains(extension) => Ok(()),
        Some(extension) => Err(ShowcaseError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(ShowcaseError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ShowcaseError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ShowcaseError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

impl Validate for Product {
    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ShowcaseError::ValidationError {
                message: "product name cannot be empty".to_string(),
            });
        }
        // total_cmp 會把 NaN 排在最前面，所以先擋掉
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ShowcaseError::ValidationError {
                message: format!("product '{}' has invalid price {}", self.name, self.price),
            });
        }
        Ok(())
    }
}

impl Validate for Item {
    fn validate(&self) -> Result<()> {
        if let Some(rating) = self.rating {
            if rating.is_nan() {
                return Err(ShowcaseError::ValidationError {
                    message: format!("item '{}' has a NaN rating", self.title),
                });
            }
        }
        Ok(())
    }
}
