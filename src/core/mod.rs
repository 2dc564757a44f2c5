pub mod dataset;
pub mod resolver;

pub use crate::domain::model::{CafeQuery, Limit};
pub use crate::domain::ports::CafeCatalog;
pub use crate::utils::error::{ResolutionError, Result};
