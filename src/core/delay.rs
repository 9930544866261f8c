use crate::utils::error::{Result, ShowcaseError};
use std::time::Duration;

pub const SQUARE_DELAY: Duration = Duration::from_secs(1);

/// 等待 SQUARE_DELAY 後回傳平方，負數則在同樣延遲後回傳錯誤
pub async fn square_async(n: f64) -> Result<f64> {
    square_after(n, SQUARE_DELAY).await
}

pub async fn square_after(n: f64, delay: Duration) -> Result<f64> {
    tracing::debug!("Squaring {} after {:?}", n, delay);
    tokio::time::sleep(delay).await;

    if n < 0.0 {
        return Err(ShowcaseError::NegativeInput { value: n });
    }
    Ok(n * n)
}
