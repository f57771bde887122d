use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EmploymentType {
    #[default]
    #[serde(rename = "Full-time")]
    FullTime,
    Contract,
    Casual,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub employment_type: EmploymentType,
    pub description: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    pub posted_date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employment_type_wire_names() {
        assert_eq!(serde_json::to_value(EmploymentType::FullTime).unwrap(), "Full-time");
        let parsed: EmploymentType = serde_json::from_str(r#""Contract""#).unwrap();
        assert_eq!(parsed, EmploymentType::Contract);
    }
}
