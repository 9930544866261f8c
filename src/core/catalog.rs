use crate::core::Storage;
use crate::domain::model::{Item, Product};
use crate::utils::error::{Result, ShowcaseError};
use crate::utils::validation::Validate;
use serde::de::DeserializeOwned;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecordFormat {
    Csv,
    Json,
}

impl RecordFormat {
    fn from_path(path: &str) -> Result<Self> {
        let extension = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("csv") => Ok(RecordFormat::Csv),
            Some("json") => Ok(RecordFormat::Json),
            _ => Err(ShowcaseError::UnsupportedFormat {
                path: path.to_string(),
            }),
        }
    }
}

fn decode_records<T: DeserializeOwned>(format: RecordFormat, data: &[u8]) -> Result<Vec<T>> {
    match format {
        RecordFormat::Csv => {
            let mut reader = csv::ReaderBuilder::new()
                .trim(csv::Trim::All)
                .from_reader(data);
            let records = reader.deserialize().collect::<std::result::Result<Vec<T>, _>>()?;
            Ok(records)
        }
        RecordFormat::Json => Ok(serde_json::from_slice(data)?),
    }
}

async fn load_records<S, T>(storage: &S, path: &str) -> Result<Vec<T>>
where
    S: Storage,
    T: DeserializeOwned + Validate,
{
    let format = RecordFormat::from_path(path)?;
    tracing::debug!("Loading {:?} records from {}", format, path);

    let data = storage.read_file(path).await?;
    let records: Vec<T> = decode_records(format, &data)?;
    for record in &records {
        record.validate()?;
    }

    tracing::info!("Loaded {} records from {}", records.len(), path);
    Ok(records)
}

/// 從 CSV 或 JSON 檔載入項目；CSV 中空白的 rating 欄位視為沒有評分
pub async fn load_items<S: Storage>(storage: &S, path: &str) -> Result<Vec<Item>> {
    load_records(storage, path).await
}

pub async fn load_products<S: Storage>(storage: &S, path: &str) -> Result<Vec<Product>> {
    load_records(storage, path).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        async fn with_file(path: &str, content: &str) -> Self {
            let storage = Self::default();
            storage
                .files
                .lock()
                .await
                .insert(path.to_string(), content.as_bytes().to_vec());
            storage
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                ShowcaseError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_load_items_from_csv_with_missing_rating() {
        let storage =
            MockStorage::with_file("items.csv", "title,rating\nDune, 4.8\nUnrated,\nMeh,3\n").await;

        let items = load_items(&storage, "items.csv").await.unwrap();
        assert_eq!(
            items,
            vec![
                Item::new("Dune", Some(4.8)),
                Item::new("Unrated", None),
                Item::new("Meh", Some(3.0)),
            ]
        );
    }

    #[tokio::test]
    async fn test_load_products_from_json() {
        let storage = MockStorage::with_file(
            "products.json",
            r#"[{"name": "A", "price": 10}, {"name": "B", "price": 12.5}]"#,
        )
        .await;

        let products = load_products(&storage, "products.json").await.unwrap();
        assert_eq!(products, vec![Product::new("A", 10.0), Product::new("B", 12.5)]);
    }

    #[tokio::test]
    async fn test_invalid_price_is_rejected() {
        let storage = MockStorage::with_file("products.csv", "name,price\nBroken,-4\n").await;

        let err = load_products(&storage, "products.csv").await.unwrap_err();
        assert!(matches!(err, ShowcaseError::ValidationError { .. }));
    }

    #[tokio::test]
    async fn test_unsupported_extension() {
        let storage = MockStorage::with_file("items.txt", "whatever").await;

        let err = load_items(&storage, "items.txt").await.unwrap_err();
        assert!(matches!(err, ShowcaseError::UnsupportedFormat { .. }));
    }

    #[tokio::test]
    async fn test_missing_file_surfaces_io_error() {
        let storage = MockStorage::default();

        let err = load_items(&storage, "nope.csv").await.unwrap_err();
        assert!(matches!(err, ShowcaseError::IoError(_)));
    }
}
