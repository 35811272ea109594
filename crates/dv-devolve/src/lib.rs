//! Streaming devolution engine.
//!
//! Reads UTF-8 or Latin-1 bytes, writes 7-bit ASCII. Known characters are
//! replaced from static tables; everything else is escaped so the output
//! stays ASCII and the damage stays visible.

pub mod context;
pub mod decode;
pub mod devolver;
pub mod error;
pub mod escape;
pub mod latin1;
pub mod source;
pub mod stats;
pub mod table;

pub use context::{FileContext, FileCounts, FilePosition, Status, Tallies};
pub use devolver::Devolver;
pub use error::DevolveError;
pub use table::RuneTable;
