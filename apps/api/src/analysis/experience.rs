//! Experience guard. Enforces the 40% experience weighting on model match scores.
//!
//! The model is asked to deduct heavily for an experience shortfall but does
//! not always do so. When both year counts are known and the candidate falls
//! short, the overall score is capped and the analysis text names the gap,
//! whatever the skill overlap. Counts the model leaves out are read back from
//! the job description and the model's own experience analysis.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::{Job, JobMatchResult};

/// Cap when the candidate has less than half the required years.
pub const SEVERE_GAP_CAP: u32 = 35;
/// Cap for any smaller shortfall.
pub const MODERATE_GAP_CAP: u32 = 60;

fn years_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\b(\d{1,2})\s*\+?\s*(?:years?|yrs?)\b")
            .expect("static experience pattern is valid")
    })
}

/// Largest "N years" figure mentioned in a job description.
pub fn required_years_from_text(text: &str) -> Option<u32> {
    years_pattern()
        .captures_iter(text)
        .filter_map(|c| c.get(1)?.as_str().parse::<u32>().ok())
        .max()
}

/// Smallest "N years" figure in the model's experience analysis. The text
/// usually quotes the requirement too, and that is never the lower number
/// when there is a shortfall.
pub fn candidate_years_from_analysis(text: &str) -> Option<u32> {
    years_pattern()
        .captures_iter(text)
        .filter_map(|c| c.get(1)?.as_str().parse::<u32>().ok())
        .min()
}

pub fn apply_experience_guard(mut result: JobMatchResult, job: &Job) -> JobMatchResult {
    let required = result
        .required_years_experience
        .filter(|years| *years > 0)
        .or_else(|| required_years_from_text(&job.description));
    result.required_years_experience = required;

    if result.candidate_years_experience.is_none() {
        result.candidate_years_experience = result
            .experience_analysis
            .as_deref()
            .and_then(candidate_years_from_analysis);
    }

    let (Some(required), Some(candidate)) = (required, result.candidate_years_experience) else {
        return result;
    };
    if candidate >= required {
        return result;
    }

    let severe = (candidate as f64) < (required as f64) / 2.0;
    let cap = if severe { SEVERE_GAP_CAP } else { MODERATE_GAP_CAP };
    result.overall_score = result.overall_score.min(cap);

    let mentions_gap = result
        .experience_analysis
        .as_deref()
        .map(|a| a.to_lowercase().contains("gap"))
        .unwrap_or(false);
    if !mentions_gap {
        let gap_note = format!(
            "Job requires {required} years, candidate has {candidate}. {} experience gap.",
            if severe { "Severe" } else { "Moderate" }
        );
        result.experience_analysis = Some(match result.experience_analysis.take() {
            Some(existing) if !existing.trim().is_empty() => format!("{gap_note} {existing}"),
            _ => gap_note,
        });
    }

    result
}
