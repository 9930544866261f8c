// Domain layer: records, the value/day enums and the ports the engine runs against.

pub mod model;
pub mod ports;
