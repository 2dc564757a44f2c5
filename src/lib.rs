pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use app::server::CafeServer;
pub use config::ServiceSettings;
pub use crate::core::{dataset::Dataset, resolver::Resolver};
pub use utils::error::{CafeError, ResolutionError, Result};
