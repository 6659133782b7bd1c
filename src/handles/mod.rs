mod history_handle;
mod led_handle;
mod page_handle;
mod sensor_handle;

pub use history_handle::*;
pub use led_handle::*;
pub use page_handle::*;
pub use sensor_handle::*;
