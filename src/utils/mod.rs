pub mod clock;
pub mod colors;
pub mod formatting;
pub mod logging;
pub mod path;
pub mod time;
