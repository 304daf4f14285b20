pub mod error;
pub mod format;
pub mod interactive;
pub mod output;

pub use interactive::*;
pub use output::{DisplayFormatter, OutputStyle};
