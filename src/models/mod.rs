pub mod action;
pub mod event;
pub mod query;
pub mod summary;

pub use action::Action;
pub use event::{AttendanceEvent, NewEvent};
pub use query::{Query, StatusFilter};
pub use summary::SummaryCounts;
