//! Immutable identity of one unit of work

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name and ordinal of one job within a batch.
///
/// Indices start at 1 and are assigned in input order by the coordinating
/// task before submission; this is the only ordering the scheduler
/// guarantees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDescription {
    pub name: String,
    pub index: u64,
}

impl JobDescription {
    pub fn new(name: impl Into<String>, index: u64) -> Self {
        Self {
            name: name.into(),
            index,
        }
    }
}

impl fmt::Display for JobDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "job {} ({})", self.index, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_index_and_name() {
        let description = JobDescription::new("segment-liver", 3);
        assert_eq!(description.to_string(), "job 3 (segment-liver)");
    }
}
