mod display_service;
mod sensor_service;

pub use display_service::*;
pub use sensor_service::*;
