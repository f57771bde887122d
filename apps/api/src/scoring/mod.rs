//! Derived numbers: dashboard counts, portal match averages and risk
//! interpretation. Everything here is pure and recomputed per request.

pub mod dashboard;
pub mod handlers;
pub mod risk;

use crate::models::JobMatchResult;

pub use dashboard::{CandidateSummary, DashboardStats};
pub use risk::{status_for_risk, RiskTone};

/// How many job matches feed a candidate's basic score.
pub const MATCH_SAMPLE: usize = 5;

/// Rounded (half-up) mean overall score of the first `MATCH_SAMPLE` results.
pub fn average_match_score(results: &[JobMatchResult]) -> Option<u32> {
    let sample = &results[..results.len().min(MATCH_SAMPLE)];
    if sample.is_empty() {
        return None;
    }
    let n = sample.len() as u32;
    let sum: u32 = sample.iter().map(|r| r.overall_score).sum();
    Some((2 * sum + n) / (2 * n))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(scores: &[u32]) -> Vec<JobMatchResult> {
        scores
            .iter()
            .enumerate()
            .map(|(i, s)| JobMatchResult {
                job_id: i.to_string(),
                overall_score: *s,
                skills_match_score: *s,
                matched_skills: vec![],
                missing_skills: vec![],
                reason: String::new(),
                experience_analysis: None,
                location_analysis: None,
                candidate_years_experience: None,
                required_years_experience: None,
            })
            .collect()
    }

    #[test]
    fn test_average_of_four() {
        assert_eq!(average_match_score(&scored(&[80, 60, 70, 90])), Some(75));
    }

    #[test]
    fn test_average_rounds_half_up() {
        assert_eq!(average_match_score(&scored(&[70, 71])), Some(71));
        assert_eq!(average_match_score(&scored(&[70, 70, 71])), Some(70));
    }

    #[test]
    fn test_only_first_five_count() {
        assert_eq!(
            average_match_score(&scored(&[50, 50, 50, 50, 50, 100])),
            Some(50)
        );
    }

    #[test]
    fn test_no_results_no_score() {
        assert_eq!(average_match_score(&[]), None);
    }
}
