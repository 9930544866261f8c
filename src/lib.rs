pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::config::{cli::LocalStorage, toml_config::ShowcaseConfig};
pub use crate::core::{
    concat::concatenate,
    day::day_type,
    delay::square_async,
    demos::demos_from_config,
    pricing::most_expensive_product,
    rating::filter_top_rated,
    showcase::{ShowcaseEngine, ShowcaseReport},
    text::transform_case,
    value::{is_string, process_value},
    vehicle::{Car, Vehicle},
};
pub use domain::model::{Day, DayType, DemoOutcome, Item, Product, Value};
pub use utils::error::{Result, ShowcaseError};
