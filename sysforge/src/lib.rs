//! Shared pieces of the sysforge tools: opening inputs, the error type,
//! logging setup and the stream algorithms behind `counter`, `filter`,
//! `lister` and `printer`.

pub mod copy;
pub mod count;
pub mod error;
pub mod input;
pub mod listing;
pub mod logging;
pub mod report;
pub mod search;

pub use error::{Error, StreamError};
pub use input::Input;
