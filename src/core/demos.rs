use crate::config::toml_config::ShowcaseConfig;
use crate::core::vehicle::{Car, Vehicle};
use crate::core::{catalog, concat, day, delay, pricing, rating, text, value, Demo, Storage};
use crate::domain::model::{Day, DemoOutcome, Item, Product, Value};
use crate::utils::error::{Result, ShowcaseError};
use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;

pub struct CaseDemo {
    pub inputs: Vec<String>,
    pub uppercase: Option<bool>,
}

#[async_trait]
impl Demo for CaseDemo {
    fn name(&self) -> &str {
        "text_case"
    }

    async fn run(&self) -> Result<DemoOutcome> {
        let converted: Vec<String> = self
            .inputs
            .iter()
            .map(|input| text::transform_case(input, self.uppercase))
            .collect();
        Ok(DemoOutcome::success(self.name(), json!(converted)))
    }
}

pub struct RatingDemo {
    pub items: Vec<Item>,
}

#[async_trait]
impl Demo for RatingDemo {
    fn name(&self) -> &str {
        "top_rated"
    }

    async fn run(&self) -> Result<DemoOutcome> {
        let top = rating::filter_top_rated(&self.items);
        tracing::debug!("{} of {} items passed the rating filter", top.len(), self.items.len());
        Ok(DemoOutcome::success(self.name(), serde_json::to_value(top)?))
    }
}

pub struct ConcatDemo {
    pub sequences: Vec<Vec<Value>>,
}

#[async_trait]
impl Demo for ConcatDemo {
    fn name(&self) -> &str {
        "concatenate"
    }

    async fn run(&self) -> Result<DemoOutcome> {
        let joined = concat::concatenate(self.sequences.iter().cloned());
        Ok(DemoOutcome::success(self.name(), serde_json::to_value(joined)?))
    }
}

pub struct VehicleDemo {
    pub make: String,
    pub year: i32,
    pub model: Option<String>,
}

#[async_trait]
impl Demo for VehicleDemo {
    fn name(&self) -> &str {
        "vehicle"
    }

    async fn run(&self) -> Result<DemoOutcome> {
        let output = match &self.model {
            Some(model) => {
                let car = Car::new(self.make.clone(), self.year, model.clone());
                json!({ "info": car.info(), "model": car.model_info() })
            }
            None => {
                let vehicle = Vehicle::new(self.make.clone(), self.year);
                json!({ "info": vehicle.info() })
            }
        };
        Ok(DemoOutcome::success(self.name(), output))
    }
}

pub struct ValueDemo {
    pub inputs: Vec<Value>,
}

#[async_trait]
impl Demo for ValueDemo {
    fn name(&self) -> &str {
        "process_value"
    }

    async fn run(&self) -> Result<DemoOutcome> {
        let results: Vec<serde_json::Value> = self
            .inputs
            .iter()
            .map(|input| {
                json!({
                    "input": input,
                    "is_string": value::is_string(input),
                    "result": value::process_value(input),
                })
            })
            .collect();
        Ok(DemoOutcome::success(self.name(), json!(results)))
    }
}

pub struct PriciestDemo {
    pub products: Vec<Product>,
}

#[async_trait]
impl Demo for PriciestDemo {
    fn name(&self) -> &str {
        "most_expensive"
    }

    async fn run(&self) -> Result<DemoOutcome> {
        // 空清單時輸出 null
        let priciest = pricing::most_expensive_product(&self.products);
        Ok(DemoOutcome::success(self.name(), serde_json::to_value(priciest)?))
    }
}

pub struct DayDemo {
    pub days: Vec<Day>,
}

#[async_trait]
impl Demo for DayDemo {
    fn name(&self) -> &str {
        "day_type"
    }

    async fn run(&self) -> Result<DemoOutcome> {
        let classified: serde_json::Map<String, serde_json::Value> = self
            .days
            .iter()
            .map(|d| (d.name().to_string(), json!(day::day_type(*d))))
            .collect();
        Ok(DemoOutcome::success(self.name(), serde_json::Value::Object(classified)))
    }
}

/// 同時計算所有輸入的平方；有負數時示範失敗，但其他結果照樣輸出
pub struct SquareDemo {
    pub inputs: Vec<f64>,
    pub delay: Duration,
}

#[async_trait]
impl Demo for SquareDemo {
    fn name(&self) -> &str {
        "square_async"
    }

    async fn run(&self) -> Result<DemoOutcome> {
        let handles: Vec<_> = self
            .inputs
            .iter()
            .map(|&n| (n, tokio::spawn(delay::square_after(n, self.delay))))
            .collect();

        let mut results = Vec::with_capacity(handles.len());
        let mut first_error = None;
        for (n, handle) in handles {
            let squared = handle.await.map_err(|e| ShowcaseError::ProcessingError {
                message: format!("square task for {} did not finish: {}", n, e),
            })?;
            match squared {
                Ok(squared) => results.push(json!({ "input": n, "result": squared })),
                Err(e) => {
                    results.push(json!({ "input": n, "error": e.to_string() }));
                    first_error.get_or_insert(e.to_string());
                }
            }
        }

        let outcome = match first_error {
            None => DemoOutcome::success(self.name(), json!(results)),
            Some(error) => DemoOutcome::failure(self.name(), error).with_output(json!(results)),
        };
        Ok(outcome)
    }
}

/// 依設定檔建立示範清單；評分與商品檔案透過 storage 讀取
pub async fn demos_from_config<S: Storage>(
    config: &ShowcaseConfig,
    storage: &S,
) -> Result<Vec<Box<dyn Demo>>> {
    let mut demos: Vec<Box<dyn Demo>> = Vec::new();

    if let Some(text) = &config.text {
        demos.push(Box::new(CaseDemo {
            inputs: text.inputs.clone(),
            uppercase: text.uppercase,
        }));
    }

    if let Some(ratings) = &config.ratings {
        let items = match (&ratings.items, &ratings.file) {
            (Some(items), _) => items.clone(),
            (None, Some(file)) => catalog::load_items(storage, file).await?,
            (None, None) => Vec::new(),
        };
        demos.push(Box::new(RatingDemo { items }));
    }

    if let Some(concat) = &config.concat {
        demos.push(Box::new(ConcatDemo {
            sequences: concat.sequences.clone(),
        }));
    }

    if let Some(vehicle) = &config.vehicle {
        demos.push(Box::new(VehicleDemo {
            make: vehicle.make.clone(),
            year: vehicle.year,
            model: vehicle.model.clone(),
        }));
    }

    if let Some(values) = &config.values {
        demos.push(Box::new(ValueDemo {
            inputs: values.inputs.clone(),
        }));
    }

    if let Some(products) = &config.products {
        let products = match (&products.items, &products.file) {
            (Some(items), _) => items.clone(),
            (None, Some(file)) => catalog::load_products(storage, file).await?,
            (None, None) => Vec::new(),
        };
        demos.push(Box::new(PriciestDemo { products }));
    }

    if let Some(days) = &config.days {
        demos.push(Box::new(DayDemo {
            days: days.days.clone(),
        }));
    }

    if let Some(square) = &config.square {
        demos.push(Box::new(SquareDemo {
            inputs: square.inputs.clone(),
            delay: config.square_delay(),
        }));
    }

    tracing::debug!("Built {} demos from config '{}'", demos.len(), config.showcase.name);
    Ok(demos)
}
