pub mod assemble;
pub mod calendar;
pub mod config;
pub mod error;
pub mod generate;
pub mod io;
pub mod markup;
pub mod model;

pub use error::{Result, ToolError};
