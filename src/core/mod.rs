pub mod dispatch;
pub mod roman;
pub mod service;

pub use crate::domain::model::{BatchEntry, Conversion, Direction};
pub use crate::domain::ports::{Clock, ConfigProvider, SystemClock};
pub use crate::utils::error::{ConversionError, Result};
