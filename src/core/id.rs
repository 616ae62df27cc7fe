/*!
 * Identifiers
 * Opaque request-scoped identifiers for processes and pages
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier carried through a simulation unchanged.
///
/// Workloads arrive as JSON, where callers name processes and pages with
/// either strings ("P1") or bare integers (7). Both forms are accepted and
/// echoed back verbatim; the engines only ever compare identifiers for
/// equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ident {
    Num(i64),
    Text(String),
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ident::Num(n) => write!(f, "{}", n),
            Ident::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Ident {
    fn from(n: i64) -> Self {
        Ident::Num(n)
    }
}

impl From<&str> for Ident {
    fn from(s: &str) -> Self {
        Ident::Text(s.to_string())
    }
}

impl From<String> for Ident {
    fn from(s: String) -> Self {
        Ident::Text(s)
    }
}
