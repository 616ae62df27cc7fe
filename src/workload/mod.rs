/*!
 * Workload Model
 * Value types describing schedulable processes and memory requests
 */

use crate::core::types::{ProcessId, Size, Tick};
use serde::{Deserialize, Serialize};

/// A schedulable process as submitted by the caller.
///
/// Immutable for the duration of a simulation; engines compute derived
/// values (start/end/waiting/turnaround) on working copies and never mutate
/// the input list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessSpec {
    pub id: ProcessId,
    /// Time the process becomes ready (>= 0 by construction)
    pub arrival_time: Tick,
    /// CPU time required before completion (must be > 0)
    pub burst_time: Tick,
    /// Lower value = higher priority; consulted only by the Priority algorithm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
}

impl ProcessSpec {
    pub fn new(id: impl Into<ProcessId>, arrival_time: Tick, burst_time: Tick) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority: None,
        }
    }

    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// A contiguous-allocation request, consumed in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryRequest {
    pub id: ProcessId,
    /// Requested unit count (must be > 0); either fully fits in one free
    /// run or fails entirely
    pub size: Size,
}

impl MemoryRequest {
    pub fn new(id: impl Into<ProcessId>, size: Size) -> Self {
        Self { id: id.into(), size }
    }
}
