use crate::domain::model::Product;
use std::cmp::Ordering;

// -0.0 + 0.0 為 +0.0，正負零視為同價
fn normalized_price(product: &Product) -> f64 {
    product.price + 0.0
}

fn by_price_desc(a: &Product, b: &Product) -> Ordering {
    normalized_price(b).total_cmp(&normalized_price(a))
}

/// 回傳價格最高的商品，空清單回傳 None；同價格取最前面的，不改動輸入
pub fn most_expensive_product(products: &[Product]) -> Option<&Product> {
    let mut ranked: Vec<&Product> = products.iter().collect();
    ranked.sort_by(|a, b| by_price_desc(a, b));
    ranked.first().copied()
}

/// 依價格由高到低就地排序（穩定排序，同價格維持原順序）
pub fn sort_by_price_desc(products: &mut [Product]) {
    products.sort_by(by_price_desc);
}
