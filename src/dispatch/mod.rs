/*!
 * Dispatcher
 * Request-shape validation and algorithm resolution per simulation category
 */

use crate::core::errors::{Result, SimulationError};
use crate::core::types::{PageRef, Size, Tick};
use crate::workload::{MemoryRequest, ProcessSpec};
use crate::{memory, paging, scheduling};
use log::debug;
use serde::Deserialize;
use serde_json::Value;

/// Simulation category selecting which engine a request is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Scheduling,
    Memory,
    Paging,
}

impl Category {
    /// Parse from string representation (case-insensitive)
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "scheduling" | "cpu" | "cpu-scheduling" => Ok(Self::Scheduling),
            "memory" | "memory-allocation" => Ok(Self::Memory),
            "paging" | "page-replacement" => Ok(Self::Paging),
            _ => Err(SimulationError::unsupported("simulation", s)),
        }
    }

    /// Convert to canonical string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduling => "scheduling",
            Self::Memory => "memory",
            Self::Paging => "paging",
        }
    }
}

/// CPU scheduling request shape
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingRequest {
    pub algorithm: String,
    pub processes: Vec<ProcessSpec>,
    #[serde(default)]
    pub time_quantum: Option<Tick>,
}

/// Memory allocation request shape
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryRequestPayload {
    pub algorithm: String,
    pub memory_size: Size,
    pub processes: Vec<MemoryRequest>,
}

/// Page replacement request shape
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagingRequest {
    pub algorithm: String,
    pub page_frames: usize,
    pub reference_string: Vec<PageRef>,
}

/// Route a raw request payload to the engine for `category` and return the
/// serialized report.
///
/// The dispatcher performs no computation: it checks required-field
/// presence, resolves the algorithm name, and forwards. Missing or
/// ill-typed fields signal [`SimulationError::InvalidInput`]; unknown names
/// signal [`SimulationError::UnsupportedAlgorithm`].
pub fn run(category: Category, payload: &Value) -> Result<Value> {
    debug!("dispatching {} simulation request", category.as_str());

    let report = match category {
        Category::Scheduling => {
            let request: SchedulingRequest = parse(category, payload)?;
            let algorithm = scheduling::Algorithm::from_str(&request.algorithm)?;
            to_value(scheduling::simulate(
                algorithm,
                &request.processes,
                request.time_quantum,
            )?)?
        }
        Category::Memory => {
            let request: MemoryRequestPayload = parse(category, payload)?;
            let strategy = memory::Strategy::from_str(&request.algorithm)?;
            to_value(memory::simulate(
                strategy,
                request.memory_size,
                &request.processes,
            )?)?
        }
        Category::Paging => {
            let request: PagingRequest = parse(category, payload)?;
            let algorithm = paging::Algorithm::from_str(&request.algorithm)?;
            to_value(paging::simulate(
                algorithm,
                request.page_frames,
                &request.reference_string,
            )?)?
        }
    };

    Ok(report)
}

/// Deserialize the typed request, checking `algorithm` presence first so a
/// missing name reads as a missing field rather than a type error.
fn parse<'de, T: Deserialize<'de>>(category: Category, payload: &'de Value) -> Result<T> {
    match payload.get("algorithm") {
        None | Some(Value::Null) => return Err(SimulationError::missing_field("algorithm")),
        Some(Value::String(_)) => {}
        Some(_) => {
            return Err(SimulationError::InvalidInput(
                "field `algorithm` must be a string".to_string(),
            ))
        }
    }

    T::deserialize(payload).map_err(|e| {
        SimulationError::InvalidInput(format!("malformed {} request: {}", category.as_str(), e))
    })
}

fn to_value<T: serde::Serialize>(report: T) -> Result<Value> {
    serde_json::to_value(report)
        .map_err(|e| SimulationError::Internal(format!("report serialization failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_parsing() {
        assert_eq!(Category::from_str("scheduling").unwrap(), Category::Scheduling);
        assert_eq!(Category::from_str("memory").unwrap(), Category::Memory);
        assert_eq!(Category::from_str("page-replacement").unwrap(), Category::Paging);
        assert!(Category::from_str("networking").is_err());
    }

    #[test]
    fn test_scheduling_roundtrip() {
        let payload = json!({
            "algorithm": "fcfs",
            "processes": [
                {"id": "P1", "arrivalTime": 0, "burstTime": 5},
                {"id": "P2", "arrivalTime": 1, "burstTime": 3}
            ]
        });
        let result = run(Category::Scheduling, &payload).unwrap();
        assert_eq!(result["ganttChart"][0]["processId"], "P1");
        assert_eq!(result["averageWaitingTime"], 2.0);
    }

    #[test]
    fn test_missing_algorithm_is_invalid_input() {
        let payload = json!({"processes": []});
        let err = run(Category::Scheduling, &payload).unwrap_err();
        assert_eq!(err, SimulationError::missing_field("algorithm"));
    }

    #[test]
    fn test_unknown_algorithm_is_unsupported() {
        let payload = json!({
            "algorithm": "multilevel-feedback",
            "processes": [{"id": "P1", "arrivalTime": 0, "burstTime": 1}]
        });
        let err = run(Category::Scheduling, &payload).unwrap_err();
        assert!(matches!(err, SimulationError::UnsupportedAlgorithm { .. }));
    }

    #[test]
    fn test_algorithm_name_is_case_insensitive() {
        let payload = json!({
            "algorithm": "FIFO",
            "pageFrames": 2,
            "referenceString": [1, 2]
        });
        assert!(run(Category::Paging, &payload).is_ok());
    }

    #[test]
    fn test_ill_typed_field_is_invalid_input() {
        let payload = json!({
            "algorithm": "fifo",
            "pageFrames": "three",
            "referenceString": [1, 2]
        });
        let err = run(Category::Paging, &payload).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidInput(_)));
    }

    #[test]
    fn test_memory_roundtrip() {
        let payload = json!({
            "algorithm": "first-fit",
            "memorySize": 10,
            "processes": [{"id": "A", "size": 4}]
        });
        let result = run(Category::Memory, &payload).unwrap();
        assert_eq!(result["statistics"]["allocatedMemory"], 4);
        assert_eq!(result["algorithm"], "first-fit");
    }
}
