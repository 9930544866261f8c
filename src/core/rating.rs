use crate::domain::model::Item;

pub const MIN_RATING: f64 = 4.0;

/// 保留評分達 MIN_RATING 的項目並維持原順序，沒有評分的不算通過
pub fn filter_top_rated(items: &[Item]) -> Vec<Item> {
    items
        .iter()
        .filter(|item| item.rating.is_some_and(|rating| rating >= MIN_RATING))
        .cloned()
        .collect()
}
