/// Job service - listing filters, swipe decisions, saved jobs
use crate::db::job_repo::{self, JobOrder};
use crate::db::{company_repo, decision_repo};
use crate::error::{AppError, Result};
use crate::models::{
    CompanyView, ExperienceLevel, JobDecision, JobType, JobView, SwipeDecision, WorkModel,
};
use sqlx::PgPool;
use uuid::Uuid;

/// Sort modes accepted by the listing endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobSort {
    Recent,
    Salary,
}

impl JobSort {
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "" | "recent" => Ok(JobSort::Recent),
            "salary" => Ok(JobSort::Salary),
            other => Err(AppError::BadRequest(format!(
                "Invalid sort parameter '{other}'. Must be 'recent' or 'salary'"
            ))),
        }
    }
}

/// Validated listing filters
///
/// Multi-value filters arrive as comma-separated query values; unknown
/// values are rejected rather than silently dropped so a typo never
/// reads as "no constraint".
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    pub search: String,
    pub location: String,
    pub work_models: Vec<String>,
    pub job_types: Vec<String>,
    pub experience_levels: Vec<String>,
}

impl JobFilter {
    pub fn parse(
        search: Option<&str>,
        location: Option<&str>,
        work_model: Option<&str>,
        job_type: Option<&str>,
        experience: Option<&str>,
    ) -> Result<Self> {
        let work_models = parse_list(work_model, |v| {
            WorkModel::parse(v).map(|m| m.as_str().to_string())
        })
        .map_err(|v| AppError::BadRequest(format!("Unknown work_model '{v}'")))?;

        let job_types = parse_list(job_type, |v| {
            JobType::parse(v).map(|t| t.as_str().to_string())
        })
        .map_err(|v| AppError::BadRequest(format!("Unknown job_type '{v}'")))?;

        let experience_levels = parse_list(experience, |v| {
            ExperienceLevel::parse(v).map(|l| l.as_str().to_string())
        })
        .map_err(|v| AppError::BadRequest(format!("Unknown experience level '{v}'")))?;

        Ok(JobFilter {
            search: search.unwrap_or("").trim().to_string(),
            location: location.unwrap_or("").trim().to_string(),
            work_models,
            job_types,
            experience_levels,
        })
    }
}

/// Split a comma-separated filter value, validating each entry.
/// Returns the offending entry on failure.
fn parse_list(
    raw: Option<&str>,
    validate: impl Fn(&str) -> Option<String>,
) -> std::result::Result<Vec<String>, String> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };

    let mut values = Vec::new();
    for entry in raw.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        match validate(entry) {
            Some(v) => values.push(v),
            None => return Err(entry.to_string()),
        }
    }
    Ok(values)
}

pub struct JobService {
    pool: PgPool,
}

impl JobService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List open jobs matching the filters, in the requested order
    pub async fn list_jobs(
        &self,
        filter: &JobFilter,
        sort: JobSort,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<JobView>> {
        let order = match sort {
            JobSort::Recent => JobOrder::Recent,
            JobSort::Salary => JobOrder::Salary,
        };

        let jobs = job_repo::list_jobs(
            &self.pool,
            &filter.search,
            &filter.location,
            &filter.work_models,
            &filter.job_types,
            &filter.experience_levels,
            order,
            limit,
            offset,
        )
        .await?;

        Ok(jobs)
    }

    /// Single job with its company fields
    pub async fn get_job(&self, job_id: Uuid) -> Result<Option<JobView>> {
        let job = job_repo::find_job_by_id(&self.pool, job_id).await?;
        Ok(job)
    }

    /// Record a swipe decision on an open job
    pub async fn decide(
        &self,
        job_id: Uuid,
        user_id: Uuid,
        decision: SwipeDecision,
    ) -> Result<JobDecision> {
        if !job_repo::job_is_open(&self.pool, job_id).await? {
            return Err(AppError::NotFound("Job not found".into()));
        }

        let decision =
            decision_repo::upsert_decision(&self.pool, job_id, user_id, decision.as_str()).await?;

        Ok(decision)
    }

    /// Undo the caller's decision on a job
    pub async fn undo_decision(&self, job_id: Uuid, user_id: Uuid) -> Result<()> {
        let deleted = decision_repo::delete_decision(&self.pool, job_id, user_id).await?;
        if !deleted {
            return Err(AppError::NotFound("No decision to undo".into()));
        }
        Ok(())
    }

    /// The caller's decisions, optionally filtered by outcome
    pub async fn list_decisions(
        &self,
        user_id: Uuid,
        decision: Option<SwipeDecision>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<JobDecision>> {
        let filter = decision.map(|d| d.as_str()).unwrap_or("");
        let decisions =
            decision_repo::list_decisions_by_user(&self.pool, user_id, filter, limit, offset)
                .await?;

        Ok(decisions)
    }

    /// Toggle a saved-job marker. Returns true when the job is now saved.
    pub async fn toggle_saved(&self, job_id: Uuid, user_id: Uuid) -> Result<bool> {
        if !job_repo::job_is_open(&self.pool, job_id).await? {
            return Err(AppError::NotFound("Job not found".into()));
        }

        let saved = job_repo::toggle_saved_job(&self.pool, job_id, user_id).await?;
        Ok(saved)
    }

    /// Jobs the caller has saved
    pub async fn list_saved(&self, user_id: Uuid) -> Result<Vec<JobView>> {
        let jobs = job_repo::list_saved_jobs(&self.pool, user_id).await?;
        Ok(jobs)
    }

    /// Company directory matching the search term
    pub async fn list_companies(
        &self,
        search: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<CompanyView>> {
        let companies = company_repo::list_companies(&self.pool, search, limit, offset).await?;
        Ok(companies)
    }

    /// Company with its open jobs
    pub async fn get_company(&self, company_id: Uuid) -> Result<Option<(CompanyView, Vec<JobView>)>> {
        let Some(company) = company_repo::find_company_by_id(&self.pool, company_id).await? else {
            return Ok(None);
        };

        let jobs = job_repo::list_jobs_by_company(&self.pool, company_id).await?;
        Ok(Some((company, jobs)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_parses_comma_separated_values() {
        let filter = JobFilter::parse(
            Some("react"),
            Some("Freetown"),
            Some("remote,hybrid"),
            Some("full_time"),
            None,
        )
        .unwrap();

        assert_eq!(filter.search, "react");
        assert_eq!(filter.location, "Freetown");
        assert_eq!(filter.work_models, vec!["remote", "hybrid"]);
        assert_eq!(filter.job_types, vec!["full_time"]);
        assert!(filter.experience_levels.is_empty());
    }

    #[test]
    fn test_filter_rejects_unknown_values() {
        let err = JobFilter::parse(None, None, Some("remote,office"), None, None).unwrap_err();
        assert!(err.to_string().contains("office"));

        let err = JobFilter::parse(None, None, None, None, Some("guru")).unwrap_err();
        assert!(err.to_string().contains("guru"));
    }

    #[test]
    fn test_filter_ignores_empty_entries() {
        let filter = JobFilter::parse(None, None, Some("remote,,"), None, None).unwrap();
        assert_eq!(filter.work_models, vec!["remote"]);
    }

    #[test]
    fn test_sort_parse() {
        assert_eq!(JobSort::parse("").unwrap(), JobSort::Recent);
        assert_eq!(JobSort::parse("recent").unwrap(), JobSort::Recent);
        assert_eq!(JobSort::parse("salary").unwrap(), JobSort::Salary);
        assert!(JobSort::parse("relevance").is_err());
    }
}
