pub mod calendar;
pub mod error;
pub mod money;
pub mod store;
pub mod traits;

pub use calendar::Calendar;
pub use error::{AppError, Result};
pub use store::{Latency, MemoryStore};
