pub mod csv;
pub mod error;
pub mod export;
pub mod source;

pub use error::{Result, SheetError};
