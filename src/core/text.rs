/// 依旗標轉換大小寫：`None` 與 `Some(true)` 轉大寫，`Some(false)` 轉小寫
pub fn transform_case(input: &str, uppercase: Option<bool>) -> String {
    if uppercase.unwrap_or(true) {
        input.to_uppercase()
    } else {
        input.to_lowercase()
    }
}
