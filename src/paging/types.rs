/*!
 * Paging Types
 * Algorithm identifiers and result types for page replacement runs
 */

use crate::core::errors::{Result, SimulationError};
use crate::core::types::PageRef;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Page replacement algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Circular-pointer first-in-first-out replacement
    Fifo,
    /// Least-recently-used replacement
    Lru,
    /// Belady's optimal replacement (farthest next use)
    Optimal,
}

impl Algorithm {
    /// Parse from string representation (case-insensitive)
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "fifo" => Ok(Self::Fifo),
            "lru" => Ok(Self::Lru),
            "optimal" | "belady" => Ok(Self::Optimal),
            _ => Err(SimulationError::unsupported("paging", s)),
        }
    }

    /// Convert to canonical string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fifo => "fifo",
            Self::Lru => "lru",
            Self::Optimal => "optimal",
        }
    }
}

impl Serialize for Algorithm {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Algorithm {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// One processed reference: hit or fault, with the frame set snapshot taken
/// after the reference was handled. Empty frame slots snapshot as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// 1-based position in the reference string
    pub step: usize,
    pub page: PageRef,
    pub frames: Vec<Option<PageRef>>,
    pub is_hit: bool,
    pub is_fault: bool,
    /// Evicted page, or `None` on a hit or when an empty slot was filled
    pub replaced_page: Option<PageRef>,
}

/// Aggregate statistics over one replacement run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagingStatistics {
    pub total_references: usize,
    pub page_faults: usize,
    pub page_hits: usize,
    /// Percentage string with two decimals and a trailing `%`, e.g. "57.14%"
    pub hit_ratio: String,
    pub fault_ratio: String,
}

/// Full result of one replacement run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagingReport {
    pub algorithm: Algorithm,
    pub page_frames: usize,
    pub reference_string: Vec<PageRef>,
    pub steps: Vec<Step>,
    pub statistics: PagingStatistics,
}
