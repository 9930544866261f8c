pub mod catalog;
pub mod concat;
pub mod day;
pub mod delay;
pub mod demos;
pub mod pricing;
pub mod rating;
pub mod showcase;
pub mod text;
pub mod value;
pub mod vehicle;

pub use crate::domain::model::{Day, DayType, DemoOutcome, Item, Product, Value};
pub use crate::domain::ports::{Demo, Storage};
pub use crate::utils::error::Result;
