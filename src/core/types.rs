/*!
 * Core Types
 * Common types used across the simulation engines
 */

use super::id::Ident;

/// Discrete simulation time unit (arrival, burst, start, end times)
pub type Tick = u64;

/// Address type for memory operations (unit slots)
pub type Address = usize;

/// Size type for memory operations (unit slots)
pub type Size = usize;

/// Process identifier, unique within one request
pub type ProcessId = Ident;

/// Raw page identifier appearing in a reference string
pub type PageRef = Ident;
