/// Shared types and configuration for charset-devolve.
///
/// This crate holds the options bundle, charset selection, rune helpers and
/// the TOML configuration loader used across the workspace.

pub mod charset;
pub mod config;
pub mod error;
pub mod rune;

pub use charset::Charset;
pub use config::DevolveOptions;
pub use error::CoreError;
pub use rune::Rune;
