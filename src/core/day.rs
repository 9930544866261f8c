use crate::domain::model::{Day, DayType};

pub fn classify_day(day: Day) -> DayType {
    match day {
        Day::Saturday | Day::Sunday => DayType::Weekend,
        Day::Monday | Day::Tuesday | Day::Wednesday | Day::Thursday | Day::Friday => {
            DayType::Weekday
        }
    }
}

/// 回傳 "Weekend" 或 "Weekday"
pub fn day_type(day: Day) -> &'static str {
    classify_day(day).as_str()
}
