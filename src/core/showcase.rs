use crate::core::{Demo, Storage};
use crate::domain::model::DemoOutcome;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ShowcaseReport {
    pub name: String,
    pub generated_at: DateTime<Utc>,
    pub outcomes: Vec<DemoOutcome>,
}

impl ShowcaseReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.success).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn outcome(&self, name: &str) -> Option<&DemoOutcome> {
        self.outcomes.iter().find(|o| o.name == name)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 將報告寫入 storage，回傳檔名
    pub async fn save<S: Storage>(&self, storage: &S, filename: &str) -> Result<String> {
        let json = self.to_json()?;
        storage.write_file(filename, json.as_bytes()).await?;
        tracing::info!("Report written to {}", filename);
        Ok(filename.to_string())
    }
}

pub struct ShowcaseEngine {
    name: String,
    demos: Vec<Box<dyn Demo>>,
}

impl ShowcaseEngine {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            demos: Vec::new(),
        }
    }

    pub fn with_demos(name: impl Into<String>, demos: Vec<Box<dyn Demo>>) -> Self {
        Self {
            name: name.into(),
            demos,
        }
    }

    pub fn add_demo(&mut self, demo: Box<dyn Demo>) {
        self.demos.push(demo);
    }

    pub fn len(&self) -> usize {
        self.demos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.demos.is_empty()
    }

    /// 依序執行所有示範，出錯的記為失敗並繼續
    pub async fn run(&self) -> ShowcaseReport {
        tracing::info!("Starting showcase '{}' with {} demos", self.name, self.demos.len());

        let mut outcomes = Vec::with_capacity(self.demos.len());
        for demo in &self.demos {
            tracing::debug!("Running demo {}", demo.name());
            let outcome = match demo.run().await {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::warn!("Demo {} returned an error: {}", demo.name(), e);
                    DemoOutcome::failure(demo.name(), e.to_string())
                }
            };

            if outcome.success {
                tracing::info!("✅ {}", outcome.name);
            } else {
                tracing::warn!(
                    "❌ {}: {}",
                    outcome.name,
                    outcome.error.as_deref().unwrap_or("unknown error")
                );
            }
            outcomes.push(outcome);
        }

        let report = ShowcaseReport {
            name: self.name.clone(),
            generated_at: Utc::now(),
            outcomes,
        };
        tracing::info!(
            "Showcase '{}' finished: {} succeeded, {} failed",
            report.name,
            report.succeeded(),
            report.failed()
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ShowcaseError;
    use async_trait::async_trait;
    use serde_json::json;

    struct FixedDemo(&'static str);

    #[async_trait]
    impl Demo for FixedDemo {
        fn name(&self) -> &str {
            self.0
        }

        async fn run(&self) -> Result<DemoOutcome> {
            Ok(DemoOutcome::success(self.0, json!("ok")))
        }
    }

    struct BrokenDemo;

    #[async_trait]
    impl Demo for BrokenDemo {
        fn name(&self) -> &str {
            "broken"
        }

        async fn run(&self) -> Result<DemoOutcome> {
            Err(ShowcaseError::ProcessingError {
                message: "boom".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_runs_demos_in_order() {
        let mut engine = ShowcaseEngine::new("ordered");
        engine.add_demo(Box::new(FixedDemo("first")));
        engine.add_demo(Box::new(FixedDemo("second")));

        let report = engine.run().await;
        let names: Vec<&str> = report.outcomes.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
        assert_eq!(report.succeeded(), 2);
        assert_eq!(report.failed(), 0);
    }

    #[tokio::test]
    async fn test_error_becomes_failed_outcome() {
        let demos: Vec<Box<dyn Demo>> = vec![
            Box::new(BrokenDemo) as Box<dyn Demo>,
            Box::new(FixedDemo("after")),
        ];
        let engine = ShowcaseEngine::with_demos("mixed", demos);

        let report = engine.run().await;
        assert_eq!(report.failed(), 1);
        let broken = report.outcome("broken").unwrap();
        assert!(broken.error.as_deref().unwrap().contains("boom"));
        assert!(report.outcome("after").unwrap().success);
    }

    #[tokio::test]
    async fn test_empty_engine() {
        let engine = ShowcaseEngine::new("nothing");
        assert!(engine.is_empty());
        let report = engine.run().await;
        assert!(report.outcomes.is_empty());
        assert!(report.to_json().unwrap().contains("\"name\": \"nothing\""));
    }
}
