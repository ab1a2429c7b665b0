pub mod clock;
pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod table;

pub use clock::{Clock, FixedClock, SystemClock};
pub use formatting::session_label;
