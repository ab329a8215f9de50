//! Console messenger for cosmid.
//!
//! Prints a colored welcome banner and tab-separated status lines tagged
//! with the sending program and a category label.

pub mod banner;
pub mod category;
pub mod config;
pub mod error;
pub mod messenger;

pub use category::Category;
pub use config::{ColorMode, MessengerConfig};
pub use error::{MessengerError, Result};
pub use messenger::Messenger;
