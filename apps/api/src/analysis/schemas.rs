//! Response schemas in the Gemini OpenAPI-subset dialect.
//!
//! These constrain generation; the records are still validated on receipt.

use serde_json::{json, Value};

/// `with_identity` makes the face-match sub-result mandatory.
pub fn compliance_schema(with_identity: bool) -> Value {
    let mut required = vec![
        "candidateName",
        "districtOfOrigin",
        "isHostCommunity",
        "certificationsValid",
        "integrityScore",
        "riskAssessment",
        "auditNotes",
    ];
    if with_identity {
        required.push("identityVerification");
    }

    json!({
        "type": "OBJECT",
        "properties": {
            "candidateName": { "type": "STRING", "description": "Name extracted from ID or documents" },
            "districtOfOrigin": { "type": "STRING", "description": "District extracted from National ID or LC1 letter" },
            "isHostCommunity": { "type": "BOOLEAN", "description": "True if the district is a host community for the sector's local content" },
            "certificationsValid": { "type": "BOOLEAN", "description": "True if technical certificates (OPITO, NEBOSH, CPA, ERB) look authentic" },
            "integrityScore": { "type": "INTEGER", "description": "0-100 based on document consistency and fraud markers" },
            "riskAssessment": {
                "type": "OBJECT",
                "properties": {
                    "level": { "type": "STRING", "enum": ["LOW", "MEDIUM", "HIGH", "CRITICAL"] },
                    "reason": { "type": "STRING" }
                },
                "required": ["level", "reason"]
            },
            "auditNotes": { "type": "STRING", "description": "Summary of the compliance check against sector regulations" },
            "missingDocuments": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Required documents that appear missing or illegible"
            },
            "identityVerification": {
                "type": "OBJECT",
                "properties": {
                    "isMatch": { "type": "BOOLEAN" },
                    "confidence": { "type": "INTEGER", "description": "0-100" },
                    "reason": { "type": "STRING" }
                },
                "required": ["isMatch", "confidence", "reason"]
            },
            "sectorCompliance": {
                "type": "OBJECT",
                "properties": {
                    "sector": { "type": "STRING" },
                    "details": {
                        "type": "OBJECT",
                        "properties": {
                            "regulator": { "type": "STRING" },
                            "findings": { "type": "ARRAY", "items": { "type": "STRING" } }
                        }
                    }
                },
                "required": ["sector"]
            }
        },
        "required": required
    })
}

pub fn job_match_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "overallScore": { "type": "INTEGER", "description": "0-100 overall fit score" },
            "skillsMatchScore": { "type": "INTEGER", "description": "0-100 score based strictly on required skills" },
            "experienceAnalysis": { "type": "STRING", "description": "Years of experience vs required. Mention specific gaps." },
            "locationAnalysis": { "type": "STRING", "description": "Candidate location vs job location and willingness to relocate." },
            "candidateYearsExperience": { "type": "INTEGER", "description": "Total years of relevant experience; 0 if none" },
            "requiredYearsExperience": { "type": "INTEGER", "description": "Years the job requires; 0 if unstated" },
            "matchedSkills": { "type": "ARRAY", "items": { "type": "STRING" } },
            "missingSkills": { "type": "ARRAY", "items": { "type": "STRING" } },
            "reason": { "type": "STRING", "description": "Executive summary explaining the score" }
        },
        "required": [
            "overallScore",
            "skillsMatchScore",
            "experienceAnalysis",
            "candidateYearsExperience",
            "requiredYearsExperience",
            "reason"
        ]
    })
}

pub fn sourcing_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "searchString": { "type": "STRING" },
            "explanation": { "type": "STRING" },
            "simulatedMatches": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "headline": { "type": "STRING" },
                        "currentRole": { "type": "STRING" },
                        "matchExplanation": { "type": "STRING" },
                        "profileUrl": { "type": "STRING" }
                    },
                    "required": ["name", "headline", "currentRole", "matchExplanation", "profileUrl"]
                }
            }
        },
        "required": ["searchString", "explanation", "simulatedMatches"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_verification_only_required_with_selfie() {
        let without = compliance_schema(false);
        let with = compliance_schema(true);
        let required = |v: &Value| {
            v["required"]
                .as_array()
                .unwrap()
                .iter()
                .any(|r| r == "identityVerification")
        };
        assert!(!required(&without));
        assert!(required(&with));
    }

    #[test]
    fn test_job_match_requires_both_year_counts() {
        let schema = job_match_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect();
        assert!(required.contains(&"candidateYearsExperience"));
        assert!(required.contains(&"requiredYearsExperience"));
    }
}
