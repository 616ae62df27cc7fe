/*!
 * Core Module
 * Shared types, identifiers, and error handling
 */

pub mod errors;
pub mod id;
pub mod types;

pub use errors::{Result, SimulationError};
pub use id::Ident;
pub use types::{Address, PageRef, ProcessId, Size, Tick};
