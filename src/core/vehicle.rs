use serde::{Deserialize, Serialize};

/// 車輛的基本資料：製造商與年份
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    make: String,
    year: i32,
}

impl Vehicle {
    pub fn new(make: impl Into<String>, year: i32) -> Self {
        Self {
            make: make.into(),
            year,
        }
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn set_make(&mut self, make: impl Into<String>) {
        self.make = make.into();
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn set_year(&mut self, year: i32) {
        self.year = year;
    }

    pub fn info(&self) -> String {
        format!("Make: {}, Year: {}", self.make, self.year)
    }
}

/// 帶車型的車輛；info() 只描述車輛本身，車型請用 model_info()
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    vehicle: Vehicle,
    model: String,
}

impl Car {
    pub fn new(make: impl Into<String>, year: i32, model: impl Into<String>) -> Self {
        Self {
            vehicle: Vehicle::new(make, year),
            model: model.into(),
        }
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn vehicle_mut(&mut self) -> &mut Vehicle {
        &mut self.vehicle
    }

    pub fn make(&self) -> &str {
        self.vehicle.make()
    }

    pub fn set_make(&mut self, make: impl Into<String>) {
        self.vehicle.set_make(make);
    }

    pub fn year(&self) -> i32 {
        self.vehicle.year()
    }

    pub fn set_year(&mut self, year: i32) {
        self.vehicle.set_year(year);
    }

    pub fn info(&self) -> String {
        self.vehicle.info()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
    }

    pub fn model_info(&self) -> String {
        format!("Model: {}", self.model)
    }
}

impl From<Car> for Vehicle {
    fn from(car: Car) -> Self {
        car.vehicle
    }
}
