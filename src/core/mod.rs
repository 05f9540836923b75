//! Core schedule functionality
//!
//! Loading the spreadsheet into a day-keyed table, resolving day and week
//! expressions, and rendering the result.

pub mod format;
pub mod loader;
pub mod resolver;
pub mod schedule;

pub use loader::ScheduleLoader;
pub use resolver::{DateResolver, DayTarget, WeekRange};
pub use schedule::{DayKey, DayRecord, ScheduleTable};
