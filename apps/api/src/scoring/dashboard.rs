use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{Candidate, CandidateSource, CandidateStatus, RiskLevel};
use crate::scoring::RiskTone;

const RECENT_LIMIT: usize = 5;

/// List row for a candidate. Leaves out documents and full reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateSummary {
    pub id: String,
    pub name: String,
    pub role: String,
    pub status: CandidateStatus,
    pub timestamp: DateTime<Utc>,
    pub source: CandidateSource,
    pub district_of_origin: Option<String>,
    pub risk_level: Option<RiskLevel>,
    pub risk_tone: Option<RiskTone>,
    pub basic_score: Option<u32>,
}

impl From<&Candidate> for CandidateSummary {
    fn from(c: &Candidate) -> Self {
        let level = c.report.as_ref().map(|r| r.risk_assessment.level);
        Self {
            id: c.id.clone(),
            name: c.name.clone(),
            role: c.role.clone(),
            status: c.status,
            timestamp: c.timestamp,
            source: c.source,
            district_of_origin: c.report.as_ref().map(|r| r.district_of_origin.clone()),
            risk_level: level,
            risk_tone: level.map(RiskLevel::tone),
            basic_score: c.basic_score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total: usize,
    pub verified: usize,
    pub host_community: usize,
    pub high_risk: usize,
    pub recent: Vec<CandidateSummary>,
}

impl DashboardStats {
    pub fn compute(candidates: &[Candidate]) -> Self {
        let mut recent: Vec<&Candidate> = candidates.iter().collect();
        recent.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        Self {
            total: candidates.len(),
            verified: candidates
                .iter()
                .filter(|c| c.status == CandidateStatus::Verified)
                .count(),
            host_community: candidates
                .iter()
                .filter(|c| c.report.as_ref().is_some_and(|r| r.is_host_community))
                .count(),
            high_risk: candidates
                .iter()
                .filter(|c| {
                    c.report
                        .as_ref()
                        .is_some_and(|r| r.risk_assessment.level.is_high())
                })
                .count(),
            recent: recent
                .into_iter()
                .take(RECENT_LIMIT)
                .map(CandidateSummary::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{candidate, with_risk};

    #[test]
    fn test_counts() {
        let mut outsider = with_risk(candidate("B", CandidateStatus::Pending, 2), RiskLevel::Medium);
        if let Some(report) = outsider.report.as_mut() {
            report.is_host_community = false;
        }
        let candidates = vec![
            with_risk(candidate("A", CandidateStatus::Verified, 1), RiskLevel::Low),
            outsider,
            with_risk(candidate("C", CandidateStatus::Rejected, 3), RiskLevel::High),
            with_risk(candidate("D", CandidateStatus::Rejected, 4), RiskLevel::Critical),
            candidate("E", CandidateStatus::Pending, 5),
        ];

        let stats = DashboardStats::compute(&candidates);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.verified, 1);
        assert_eq!(stats.host_community, 3);
        assert_eq!(stats.high_risk, 2);
    }

    #[test]
    fn test_high_risk_is_monotone_under_additions() {
        let mut candidates = vec![with_risk(
            candidate("A", CandidateStatus::Rejected, 1),
            RiskLevel::High,
        )];
        let mut previous = DashboardStats::compute(&candidates).high_risk;

        for (i, level) in [RiskLevel::Low, RiskLevel::Critical, RiskLevel::Medium]
            .into_iter()
            .enumerate()
        {
            candidates.push(with_risk(
                candidate("N", CandidateStatus::Pending, i as i64),
                level,
            ));
            let now = DashboardStats::compute(&candidates).high_risk;
            assert!(now >= previous);
            previous = now;
        }
        assert_eq!(previous, 2);
    }

    #[test]
    fn test_recent_is_newest_five() {
        let candidates: Vec<_> = (0..7)
            .map(|age| candidate(&format!("C{age}"), CandidateStatus::Pending, 10 - age))
            .collect();

        let recent = DashboardStats::compute(&candidates).recent;
        let names: Vec<_> = recent.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["C6", "C5", "C4", "C3", "C2"]);
    }

    #[test]
    fn test_summary_carries_risk_tone() {
        let c = with_risk(candidate("A", CandidateStatus::Rejected, 0), RiskLevel::High);
        let summary = CandidateSummary::from(&c);
        assert_eq!(summary.risk_tone, Some(RiskTone::Orange));
        assert_eq!(summary.district_of_origin.as_deref(), Some("Hoima"));
    }
}
