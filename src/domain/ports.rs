use crate::domain::model::DemoOutcome;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// 可以被 ShowcaseEngine 執行的單一示範
#[async_trait]
pub trait Demo: Send + Sync {
    fn name(&self) -> &str;
    async fn run(&self) -> Result<DemoOutcome>;
}
