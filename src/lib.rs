/*!
 * OS Simulation Engine Library
 * Deterministic educational simulators for CPU scheduling, contiguous
 * memory allocation, and page replacement, exposed as pure functions
 */

pub mod core;
pub mod dispatch;
pub mod memory;
pub mod paging;
pub mod scheduling;
pub mod workload;

// Re-export public API
pub use crate::core::errors::{Result, SimulationError};
pub use crate::core::id::Ident;
pub use crate::core::types::{Address, PageRef, ProcessId, Size, Tick};
pub use dispatch::Category;
pub use workload::{MemoryRequest, ProcessSpec};
