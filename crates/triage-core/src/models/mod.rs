//! Domain models for the triage intake engine.

mod case;
mod category;
mod clipboard;
mod session;

pub use case::*;
pub use category::*;
pub use clipboard::*;
pub use session::*;
