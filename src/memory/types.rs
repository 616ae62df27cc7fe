/*!
 * Memory Types
 * Strategy identifiers and result types for contiguous allocation runs
 */

use crate::core::errors::{Result, SimulationError};
use crate::core::types::{Address, ProcessId, Size};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Contiguous allocation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// First qualifying free run in address order
    FirstFit,
    /// Smallest qualifying free run (ties go to the lowest address)
    BestFit,
    /// Largest qualifying free run (ties go to the lowest address)
    WorstFit,
}

impl Strategy {
    /// Parse from string representation (case-insensitive)
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "first-fit" | "first_fit" | "firstfit" => Ok(Self::FirstFit),
            "best-fit" | "best_fit" | "bestfit" => Ok(Self::BestFit),
            "worst-fit" | "worst_fit" | "worstfit" => Ok(Self::WorstFit),
            _ => Err(SimulationError::unsupported("memory", s)),
        }
    }

    /// Convert to canonical string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FirstFit => "first-fit",
            Self::BestFit => "best-fit",
            Self::WorstFit => "worst-fit",
        }
    }
}

impl Serialize for Strategy {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Strategy {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Outcome of one allocation request. Successful records carry addresses;
/// failures carry a reason and leave memory untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AllocationRecord {
    #[serde(rename_all = "camelCase")]
    Allocated {
        process_id: ProcessId,
        size: Size,
        start_address: Address,
        end_address: Address,
        allocated: bool,
        /// Length of the chosen free run; reported by best-fit and
        /// worst-fit, where the run choice is the interesting part
        #[serde(skip_serializing_if = "Option::is_none")]
        block_size: Option<Size>,
    },
    #[serde(rename_all = "camelCase")]
    Failed {
        process_id: ProcessId,
        size: Size,
        allocated: bool,
        reason: String,
    },
}

impl AllocationRecord {
    pub fn is_allocated(&self) -> bool {
        matches!(self, AllocationRecord::Allocated { .. })
    }
}

/// A maximal contiguous free run in the final memory state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeBlock {
    pub start_address: Address,
    pub end_address: Address,
    pub size: Size,
}

/// Aggregate statistics over one allocation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryStatistics {
    pub total_memory: Size,
    pub allocated_memory: Size,
    pub free_memory: Size,
    pub successful_allocations: usize,
    pub failed_allocations: usize,
    /// Free space wasted by fragmentation relative to the best-case single
    /// block (total free minus the largest free run); first-fit only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_fragmentation: Option<Size>,
}

/// Full result of one allocation run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryReport {
    pub algorithm: Strategy,
    /// One slot per memory unit: `None` when free, otherwise the owner id
    pub memory_state: Vec<Option<ProcessId>>,
    /// Successful records first, then failures
    pub allocations: Vec<AllocationRecord>,
    pub free_blocks: Vec<FreeBlock>,
    pub statistics: MemoryStatistics,
}
