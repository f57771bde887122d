use serde::Serialize;

use crate::models::{CandidateStatus, RiskLevel};

/// Colour token a client renders a risk badge with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTone {
    Emerald,
    Yellow,
    Orange,
    Red,
}

impl RiskLevel {
    /// LOW < MEDIUM < HIGH < CRITICAL. Display only; lists are never sorted by it.
    pub fn severity(self) -> u8 {
        match self {
            RiskLevel::Low => 0,
            RiskLevel::Medium => 1,
            RiskLevel::High => 2,
            RiskLevel::Critical => 3,
        }
    }

    pub fn tone(self) -> RiskTone {
        match self {
            RiskLevel::Low => RiskTone::Emerald,
            RiskLevel::Medium => RiskTone::Yellow,
            RiskLevel::High => RiskTone::Orange,
            RiskLevel::Critical => RiskTone::Red,
        }
    }

    pub fn is_high(self) -> bool {
        self.severity() >= RiskLevel::High.severity()
    }
}

/// Automatic decision after a document scan. The integrity score plays no part.
pub fn status_for_risk(level: RiskLevel) -> CandidateStatus {
    if level.is_high() {
        CandidateStatus::Rejected
    } else {
        CandidateStatus::Verified
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::Critical,
    ];

    #[test]
    fn test_scan_never_leaves_candidate_pending() {
        for level in ALL {
            assert_ne!(status_for_risk(level), CandidateStatus::Pending);
        }
        assert_eq!(status_for_risk(RiskLevel::Medium), CandidateStatus::Verified);
        assert_eq!(status_for_risk(RiskLevel::Critical), CandidateStatus::Rejected);
    }

    #[test]
    fn test_severity_is_strictly_ordered() {
        let severities: Vec<u8> = ALL.iter().map(|l| l.severity()).collect();
        assert!(severities.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_tones() {
        assert_eq!(RiskLevel::Low.tone(), RiskTone::Emerald);
        assert_eq!(
            serde_json::to_value(RiskLevel::Critical.tone()).unwrap(),
            "red"
        );
    }
}
