//! Resolved study assignments.

use std::fmt;

use serde::Serialize;

/// A page of Talmud, such as Pesachim 103.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Daf {
    pub tractate: &'static str,
    pub page: u32,
}

impl fmt::Display for Daf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tractate, self.page)
    }
}

/// Outcome of a lookup for a cycle that has study-free days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Assignment {
    Daf(Daf),
    NoStudy,
}

impl Assignment {
    pub fn daf(&self) -> Option<Daf> {
        match self {
            Assignment::Daf(daf) => Some(*daf),
            Assignment::NoStudy => None,
        }
    }
}

impl From<Daf> for Assignment {
    fn from(daf: Daf) -> Self {
        Assignment::Daf(daf)
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Assignment::Daf(daf) => write!(f, "{daf}"),
            Assignment::NoStudy => f.write_str("No daf today"),
        }
    }
}
