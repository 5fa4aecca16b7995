//! Readiness scoring.
//!
//! | component      | weight | saturates at          |
//! |----------------|--------|-----------------------|
//! | skills         | 30     | 10 skills             |
//! | projects       | 25     | 5 projects            |
//! | mock tests     | 25     | mean score ratio of 1 |
//! | certifications | 20     | 4 certifications      |
//!
//! Everything here is a pure function of its arguments.

use crate::entities::{
    certification::Certification,
    mock_test::MockTest,
    project::Project,
    readiness::{ReadinessBreakdown, ReadinessCounts, ReadinessReport, ReadinessStatus, ReadinessSummary},
    skill::Skill,
};

pub const SKILLS_WEIGHT: f64 = 30.0;
pub const PROJECTS_WEIGHT: f64 = 25.0;
pub const MOCK_TESTS_WEIGHT: f64 = 25.0;
pub const CERTIFICATIONS_WEIGHT: f64 = 20.0;

const SKILLS_FOR_FULL_SCORE: f64 = 10.0;
const PROJECTS_FOR_FULL_SCORE: f64 = 5.0;
const CERTIFICATIONS_FOR_FULL_SCORE: f64 = 4.0;

const HIGH_THRESHOLD: i64 = 75;
const MEDIUM_THRESHOLD: i64 = 41;

const MIN_SKILLS: usize = 3;
const MIN_PROJECTS: usize = 1;
const MIN_MOCK_TESTS: usize = 2;
const MIN_CERTIFICATIONS: usize = 1;

pub const SKILLS_SUGGESTION: &str = "Add at least 3 technical skills to showcase your expertise.";
pub const PROJECTS_SUGGESTION: &str = "Complete at least 1 project to demonstrate practical application.";
pub const MOCK_TESTS_SUGGESTION: &str = "Take more mock tests to improve your aptitude and technical speed.";
pub const CERTIFICATIONS_SUGGESTION: &str = "Earn a certification to validate your skills to employers.";
pub const ON_TRACK_MESSAGE: &str = "Great job! Keep refining your skills and projects to stay competitive.";

/// Unrounded component scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentScores {
    pub skills: f64,
    pub projects: f64,
    pub mock_tests: f64,
    pub certifications: f64,
}

impl ComponentScores {
    pub fn total(&self) -> f64 {
        self.skills + self.projects + self.mock_tests + self.certifications
    }
}

fn capped(count: usize, full_at: f64, weight: f64) -> f64 {
    (count as f64 / full_at * weight).min(weight)
}

fn mock_test_score(mock_tests: &[MockTest]) -> f64 {
    if mock_tests.is_empty() {
        return 0.0;
    }
    let sum = mock_tests.iter().fold(0.0, |acc, test| acc + test.ratio());
    sum / mock_tests.len() as f64 * MOCK_TESTS_WEIGHT
}

fn round_score(value: f64) -> i64 {
    value.round() as i64
}

pub fn component_scores(
    skills: &[Skill],
    projects: &[Project],
    mock_tests: &[MockTest],
    certifications: &[Certification],
) -> ComponentScores {
    ComponentScores {
        skills: capped(skills.len(), SKILLS_FOR_FULL_SCORE, SKILLS_WEIGHT),
        projects: capped(projects.len(), PROJECTS_FOR_FULL_SCORE, PROJECTS_WEIGHT),
        mock_tests: mock_test_score(mock_tests),
        certifications: capped(certifications.len(), CERTIFICATIONS_FOR_FULL_SCORE, CERTIFICATIONS_WEIGHT),
    }
}

/// Computes the readiness report from one user's four record collections.
///
/// The collections must already be filtered to a single user.
pub fn compute_readiness(
    skills: &[Skill],
    projects: &[Project],
    mock_tests: &[MockTest],
    certifications: &[Certification],
) -> ReadinessReport {
    let scores = component_scores(skills, projects, mock_tests, certifications);

    ReadinessReport {
        total_score: round_score(scores.total()),
        breakdown: ReadinessBreakdown {
            skills: round_score(scores.skills),
            projects: round_score(scores.projects),
            mock_tests: round_score(scores.mock_tests),
            certifications: round_score(scores.certifications),
        },
        counts: ReadinessCounts {
            skills: skills.len(),
            projects: projects.len(),
            mock_tests: mock_tests.len(),
            certifications: certifications.len(),
        },
    }
}

impl ReadinessStatus {
    pub fn from_score(total_score: i64) -> Self {
        if total_score >= HIGH_THRESHOLD {
            ReadinessStatus::High
        } else if total_score >= MEDIUM_THRESHOLD {
            ReadinessStatus::Medium
        } else {
            ReadinessStatus::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReadinessStatus::High => "High",
            ReadinessStatus::Medium => "Medium",
            ReadinessStatus::Low => "Low",
        }
    }
}

/// Improvement hints in fixed order: skills, projects, mock tests, certifications.
/// Never empty.
pub fn suggestions(counts: &ReadinessCounts) -> Vec<&'static str> {
    let mut hints = Vec::new();

    if counts.skills < MIN_SKILLS {
        hints.push(SKILLS_SUGGESTION);
    }
    if counts.projects < MIN_PROJECTS {
        hints.push(PROJECTS_SUGGESTION);
    }
    if counts.mock_tests < MIN_MOCK_TESTS {
        hints.push(MOCK_TESTS_SUGGESTION);
    }
    if counts.certifications < MIN_CERTIFICATIONS {
        hints.push(CERTIFICATIONS_SUGGESTION);
    }

    if hints.is_empty() {
        hints.push(ON_TRACK_MESSAGE);
    }
    hints
}

impl From<ReadinessReport> for ReadinessSummary {
    fn from(report: ReadinessReport) -> Self {
        let status = ReadinessStatus::from_score(report.total_score);
        let suggestions = suggestions(&report.counts)
            .into_iter()
            .map(str::to_string)
            .collect();

        ReadinessSummary { report, status, suggestions }
    }
}
