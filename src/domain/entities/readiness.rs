use serde::{Deserialize, Serialize};

/// Readiness score of one user, recomputed on every request.
///
/// `breakdown` entries are rounded independently of `total_score`, which is
/// rounded from the unrounded sum, so the entries may not add up to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessReport {
    pub total_score: i64,
    pub breakdown: ReadinessBreakdown,
    pub counts: ReadinessCounts,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessBreakdown {
    pub skills: i64,
    pub projects: i64,
    pub mock_tests: i64,
    pub certifications: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessCounts {
    pub skills: usize,
    pub projects: usize,
    pub mock_tests: usize,
    pub certifications: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadinessStatus {
    High,
    Medium,
    Low,
}

/// Report plus the derived status label and improvement suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessSummary {
    #[serde(flatten)]
    pub report: ReadinessReport,
    pub status: ReadinessStatus,
    pub suggestions: Vec<String>,
}
