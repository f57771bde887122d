//! Fixed dataset shown whenever a collection has no live records.

use chrono::{Duration, Utc};

use crate::models::{
    Candidate, CandidateSource, CandidateStatus, ComplianceReport, EmploymentType, Job,
    RiskAssessment, RiskLevel,
};

fn report(
    name: &str,
    district: &str,
    host: bool,
    integrity: u32,
    level: RiskLevel,
    reason: &str,
    notes: &str,
) -> ComplianceReport {
    ComplianceReport {
        candidate_name: name.to_string(),
        district_of_origin: district.to_string(),
        is_host_community: host,
        certifications_valid: matches!(level, RiskLevel::Low | RiskLevel::Medium),
        integrity_score: integrity,
        risk_assessment: RiskAssessment {
            level,
            reason: reason.to_string(),
        },
        audit_notes: notes.to_string(),
        missing_documents: vec![],
        identity_verification: None,
        sector_compliance: None,
    }
}

pub fn demo_candidates() -> Vec<Candidate> {
    let now = Utc::now();
    vec![
        Candidate {
            id: "demo-1".to_string(),
            name: "John Baptist Okello".to_string(),
            role: "QHSE Supervisor".to_string(),
            status: CandidateStatus::Verified,
            timestamp: now - Duration::hours(2),
            source: CandidateSource::Upload,
            report: Some(report(
                "John Baptist Okello",
                "Hoima",
                true,
                92,
                RiskLevel::Low,
                "ID, LC1 letter and NEBOSH certificate are consistent.",
                "Host community status confirmed for Hoima. NEBOSH IGC verified.",
            )),
            osint: None,
            documents: None,
            basic_score: Some(84),
            email: None,
            email_verified: None,
        },
        Candidate {
            id: "demo-2".to_string(),
            name: "Sarah Namukasa".to_string(),
            role: "Finance Officer".to_string(),
            status: CandidateStatus::Rejected,
            timestamp: now - Duration::days(1),
            source: CandidateSource::Upload,
            report: Some(report(
                "Sarah Namukasa",
                "Wakiso",
                false,
                41,
                RiskLevel::High,
                "CPA certificate number does not match the issuing body format.",
                "Fit and Proper review failed: certificate inconsistencies found.",
            )),
            osint: None,
            documents: None,
            basic_score: None,
            email: None,
            email_verified: None,
        },
        Candidate {
            id: "demo-3".to_string(),
            name: "David K. Muwonge".to_string(),
            role: "Heavy Equipment Operator".to_string(),
            status: CandidateStatus::Pending,
            timestamp: now - Duration::days(2),
            source: CandidateSource::Linkedin,
            report: None,
            osint: None,
            documents: None,
            basic_score: None,
            email: None,
            email_verified: None,
        },
    ]
}

pub fn demo_jobs() -> Vec<Job> {
    let now = Utc::now();
    vec![
        Job {
            id: "1".to_string(),
            title: "QHSE Supervisor".to_string(),
            company: "TotalEnergies EP".to_string(),
            location: "Tilenga Project".to_string(),
            employment_type: EmploymentType::FullTime,
            description: "Looking for an experienced QHSE supervisor with NEBOSH certification \
                and at least 5 years in oil & gas. Must be willing to work in a rotational shift."
                .to_string(),
            required_skills: ["NEBOSH", "HSE", "Audit", "Risk Management"]
                .map(String::from)
                .to_vec(),
            posted_date: now,
        },
        Job {
            id: "2".to_string(),
            title: "Heavy Equipment Operator".to_string(),
            company: "CNOOC".to_string(),
            location: "Kingfisher".to_string(),
            employment_type: EmploymentType::Contract,
            description: "Certified operator for Excavators and Graders. Valid permit class H \
                required. Minimum 3 years experience operating in challenging terrain."
                .to_string(),
            required_skills: ["Driving Permit", "Heavy Machinery", "Excavator", "Grader"]
                .map(String::from)
                .to_vec(),
            posted_date: now - Duration::minutes(1),
        },
    ]
}
