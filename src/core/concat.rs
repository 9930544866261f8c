/// 將任意數量的序列由左至右串成一個 Vec
pub fn concatenate<T, I, S>(sequences: S) -> Vec<T>
where
    S: IntoIterator<Item = I>,
    I: IntoIterator<Item = T>,
{
    sequences.into_iter().flatten().collect()
}

/// 可變參數版本：`concatenate![a, b, c]`
#[macro_export]
macro_rules! concatenate {
    () => {
        ::std::vec::Vec::new()
    };
    ($($seq:expr),+ $(,)?) => {{
        let mut joined = ::std::vec::Vec::new();
        $(joined.extend($seq);)+
        joined
    }};
}
