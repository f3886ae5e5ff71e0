use serde::{Deserialize, Serialize};

/// How a tracking column behaves, derived from its observed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnRole {
    /// Binary completion indicator: values restricted to 0, 1, or missing.
    SubStep,
    /// Textual status column (e.g. "COMPLETED", "IN_PROGRESS").
    MainStep,
}

/// One status column together with the sub-step columns that roll up into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepGroup {
    pub main: String,
    #[serde(default)]
    pub subs: Vec<String>,
}

/// The hand-authored rollup table mapping status columns to their sub-steps.
///
/// This encodes domain knowledge that is not derivable from the data; it is
/// supplied as configuration at startup, never inferred.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepGroupConfig {
    pub groups: Vec<StepGroup>,
}

impl StepGroupConfig {
    pub fn new(groups: Vec<StepGroup>) -> Self {
        Self { groups }
    }

    /// Exact-name lookup. An unmatched main step is an unmapped group with
    /// no subs, not an error.
    pub fn subs_of(&self, main: &str) -> &[String] {
        self.groups
            .iter()
            .find(|group| group.main == main)
            .map(|group| group.subs.as_slice())
            .unwrap_or(&[])
    }
}
