//! Job board: filtering, sorting and facets over the job collection, plus
//! validation of new postings.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{EmploymentType, Job};

pub mod handlers;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobSort {
    #[default]
    Newest,
    Oldest,
    /// Keeps collection order; relevance ranking happens in the portal.
    Relevance,
}

/// Exact-match filters. Blank values are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobQuery {
    #[serde(rename = "type")]
    pub employment_type: Option<EmploymentType>,
    pub location: Option<String>,
    pub company: Option<String>,
    #[serde(default)]
    pub sort: JobSort,
}

fn matches_filter(filter: &Option<String>, value: &str) -> bool {
    match filter.as_deref().map(str::trim) {
        Some(wanted) if !wanted.is_empty() => wanted == value,
        _ => true,
    }
}

impl JobQuery {
    pub fn apply(&self, jobs: &[Job]) -> Vec<Job> {
        let mut result: Vec<Job> = jobs
            .iter()
            .filter(|j| self.employment_type.map_or(true, |t| j.employment_type == t))
            .filter(|j| matches_filter(&self.location, &j.location))
            .filter(|j| matches_filter(&self.company, &j.company))
            .cloned()
            .collect();

        match self.sort {
            JobSort::Newest => result.sort_by(|a, b| b.posted_date.cmp(&a.posted_date)),
            JobSort::Oldest => result.sort_by(|a, b| a.posted_date.cmp(&b.posted_date)),
            JobSort::Relevance => {}
        }
        result
    }
}

/// Distinct filter values, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JobFacets {
    pub locations: Vec<String>,
    pub companies: Vec<String>,
    pub types: Vec<EmploymentType>,
}

impl JobFacets {
    pub fn collect(jobs: &[Job]) -> Self {
        let mut facets = Self::default();
        for job in jobs {
            if !facets.locations.contains(&job.location) {
                facets.locations.push(job.location.clone());
            }
            if !facets.companies.contains(&job.company) {
                facets.companies.push(job.company.clone());
            }
            if !facets.types.contains(&job.employment_type) {
                facets.types.push(job.employment_type);
            }
        }
        facets
    }
}

/// Body of a new posting. Only title and description are mandatory.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    #[serde(default)]
    pub title: String,
    pub company: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub employment_type: Option<EmploymentType>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
}

fn or_default(value: Option<String>, default: &str) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

impl NewJob {
    pub fn into_job(self) -> Result<Job, AppError> {
        let title = self.title.trim().to_string();
        let description = self.description.trim().to_string();
        if title.is_empty() || description.is_empty() {
            return Err(AppError::Validation(
                "A job needs a title and a description".to_string(),
            ));
        }

        Ok(Job {
            id: Uuid::new_v4().to_string(),
            title,
            company: or_default(self.company, "Unknown"),
            location: or_default(self.location, "Uganda"),
            employment_type: self.employment_type.unwrap_or_default(),
            description,
            required_skills: self
                .required_skills
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            posted_date: Utc::now(),
        })
    }
}
