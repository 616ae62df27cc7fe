/*!
 * Scheduling Types
 * Algorithm identifiers and result types for CPU scheduling runs
 */

use crate::core::errors::{Result, SimulationError};
use crate::core::types::{ProcessId, Tick};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// CPU scheduling algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// First-come-first-served, non-preemptive
    Fcfs,
    /// Shortest job first, non-preemptive
    Sjf,
    /// Round-robin with fixed time quantum
    RoundRobin,
    /// Priority-based, non-preemptive (lower value = higher priority)
    Priority,
}

impl Algorithm {
    /// Parse from string representation (case-insensitive)
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "fcfs" => Ok(Self::Fcfs),
            "sjf" => Ok(Self::Sjf),
            "round-robin" | "round_robin" | "roundrobin" | "rr" => Ok(Self::RoundRobin),
            "priority" => Ok(Self::Priority),
            _ => Err(SimulationError::unsupported("scheduling", s)),
        }
    }

    /// Convert to canonical string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::RoundRobin => "round-robin",
            Self::Priority => "priority",
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

/// One executing interval in the timeline. Idle time is never emitted;
/// it shows up as gaps between consecutive segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GanttSegment {
    pub process_id: ProcessId,
    pub start_time: Tick,
    pub end_time: Tick,
    pub duration: Tick,
}

impl GanttSegment {
    pub(super) fn new(process_id: ProcessId, start_time: Tick, end_time: Tick) -> Self {
        Self {
            process_id,
            start_time,
            end_time,
            duration: end_time - start_time,
        }
    }
}

/// Per-process timing metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessMetrics {
    pub id: ProcessId,
    pub arrival_time: Tick,
    pub burst_time: Tick,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    /// First dispatch time
    pub start_time: Tick,
    /// Completion time
    pub end_time: Tick,
    pub waiting_time: Tick,
    pub turnaround_time: Tick,
}

/// Full result of one scheduling run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleReport {
    pub gantt_chart: Vec<GanttSegment>,
    pub process_results: Vec<ProcessMetrics>,
    pub average_waiting_time: f64,
    pub average_turnaround_time: f64,
}
