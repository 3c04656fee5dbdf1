/// Data models for jobs-service
///
/// This module defines structures for:
/// - JobView: Listings with filterable attributes and company fields
/// - CompanyView: Directory entries with aggregate open-role counts
/// - JobDecision: Swipe outcomes (applied/skipped)
/// - Certificate: Registered documents identified by SHA-256 digest
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Work model of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkModel {
    Remote,
    Hybrid,
    OnSite,
}

impl WorkModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkModel::Remote => "remote",
            WorkModel::Hybrid => "hybrid",
            WorkModel::OnSite => "on_site",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "remote" => Some(WorkModel::Remote),
            "hybrid" => Some(WorkModel::Hybrid),
            "on_site" => Some(WorkModel::OnSite),
            _ => None,
        }
    }
}

/// Employment type of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    FullTime,
    PartTime,
    Internship,
    Contract,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "full_time",
            JobType::PartTime => "part_time",
            JobType::Internship => "internship",
            JobType::Contract => "contract",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "full_time" => Some(JobType::FullTime),
            "part_time" => Some(JobType::PartTime),
            "internship" => Some(JobType::Internship),
            "contract" => Some(JobType::Contract),
            _ => None,
        }
    }
}

/// Experience level of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Entry,
    Junior,
    Mid,
    Senior,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "entry",
            ExperienceLevel::Junior => "junior",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "entry" => Some(ExperienceLevel::Entry),
            "junior" => Some(ExperienceLevel::Junior),
            "mid" => Some(ExperienceLevel::Mid),
            "senior" => Some(ExperienceLevel::Senior),
            _ => None,
        }
    }
}

/// Swipe outcome on a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDecision {
    Applied,
    Skipped,
}

impl SwipeDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwipeDecision::Applied => "applied",
            SwipeDecision::Skipped => "skipped",
        }
    }
}

/// A job as listed: stored fields plus the company name and rating
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct JobView {
    pub id: Uuid,
    pub company_id: Uuid,
    pub title: String,
    pub location: String,
    pub work_model: String,
    pub job_type: String,
    pub experience_level: String,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub skills: Vec<String>,
    pub tags: Vec<String>,
    pub description: String,
    pub posted_at: DateTime<Utc>,
    pub company_name: String,
    pub company_rating: f64,
}

/// Company directory entry with its open-role count
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CompanyView {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub industry: Vec<String>,
    pub description: String,
    pub hiring_focus: Vec<String>,
    pub rating: f64,
    pub review_count: i32,
    pub open_roles: i64,
}

/// Swipe decision entity - one row per (job, user)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct JobDecision {
    pub id: Uuid,
    pub job_id: Uuid,
    pub user_id: Uuid,
    pub decision: String,
    pub created_at: DateTime<Utc>,
}

/// Certificate entity - identified by the SHA-256 digest of its document
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Certificate {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub issuer: String,
    pub issued_on: NaiveDate,
    pub digest: String,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_model_round_trip() {
        for model in [WorkModel::Remote, WorkModel::Hybrid, WorkModel::OnSite] {
            assert_eq!(WorkModel::parse(model.as_str()), Some(model));
        }
        assert_eq!(WorkModel::parse("onsite"), None);
    }

    #[test]
    fn test_job_type_round_trip() {
        for ty in [
            JobType::FullTime,
            JobType::PartTime,
            JobType::Internship,
            JobType::Contract,
        ] {
            assert_eq!(JobType::parse(ty.as_str()), Some(ty));
        }
        assert_eq!(JobType::parse("freelance"), None);
    }

    #[test]
    fn test_swipe_decision_wire_names() {
        let d: SwipeDecision = serde_json::from_str("\"applied\"").unwrap();
        assert_eq!(d, SwipeDecision::Applied);
        assert!(serde_json::from_str::<SwipeDecision>("\"maybe\"").is_err());
    }
}
