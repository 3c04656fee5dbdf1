use crate::models::JobView;
use sqlx::{PgPool, Row};
use uuid::Uuid;

/// Shared SELECT for job reads with the embedded company fields
const JOB_VIEW_SELECT: &str = r#"
    SELECT j.id, j.company_id, j.title, j.location, j.work_model, j.job_type,
           j.experience_level, j.salary_min, j.salary_max, j.skills, j.tags,
           j.description, j.posted_at,
           c.name AS company_name,
           c.rating AS company_rating
    FROM jobs j
    JOIN companies c ON c.id = j.company_id
"#;

/// Conjunctive filter clauses; empty strings and empty arrays are no-ops
const JOB_FILTER_WHERE: &str = r#"
    WHERE j.is_open
      AND ($1 = '' OR lower(j.title) LIKE '%' || lower($1) || '%'
           OR lower(c.name) LIKE '%' || lower($1) || '%'
           OR EXISTS (SELECT 1 FROM unnest(j.skills) AS s
                      WHERE lower(s) LIKE '%' || lower($1) || '%'))
      AND ($2 = '' OR lower(j.location) LIKE '%' || lower($2) || '%')
      AND (cardinality($3::text[]) = 0 OR j.work_model = ANY($3))
      AND (cardinality($4::text[]) = 0 OR j.job_type = ANY($4))
      AND (cardinality($5::text[]) = 0 OR j.experience_level = ANY($5))
"#;

/// Sort order for a job listing query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobOrder {
    Recent,
    Salary,
}

impl JobOrder {
    fn order_by(&self) -> &'static str {
        match self {
            JobOrder::Recent => "ORDER BY j.posted_at DESC",
            JobOrder::Salary => "ORDER BY j.salary_max DESC NULLS LAST, j.posted_at DESC",
        }
    }
}

/// List open jobs matching the given filters
#[allow(clippy::too_many_arguments)]
pub async fn list_jobs(
    pool: &PgPool,
    search: &str,
    location: &str,
    work_models: &[String],
    job_types: &[String],
    experience_levels: &[String],
    order: JobOrder,
    limit: i64,
    offset: i64,
) -> Result<Vec<JobView>, sqlx::Error> {
    let sql = format!(
        "{JOB_VIEW_SELECT} {JOB_FILTER_WHERE} {} LIMIT $6 OFFSET $7",
        order.order_by()
    );

    let jobs = sqlx::query_as::<_, JobView>(&sql)
        .bind(search)
        .bind(location)
        .bind(work_models)
        .bind(job_types)
        .bind(experience_levels)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

    Ok(jobs)
}

/// Find a job by ID with its company fields
pub async fn find_job_by_id(pool: &PgPool, job_id: Uuid) -> Result<Option<JobView>, sqlx::Error> {
    let sql = format!("{JOB_VIEW_SELECT} WHERE j.id = $1");

    let job = sqlx::query_as::<_, JobView>(&sql)
        .bind(job_id)
        .fetch_optional(pool)
        .await?;

    Ok(job)
}

/// List open jobs for a company, newest first
pub async fn list_jobs_by_company(
    pool: &PgPool,
    company_id: Uuid,
) -> Result<Vec<JobView>, sqlx::Error> {
    let sql =
        format!("{JOB_VIEW_SELECT} WHERE j.company_id = $1 AND j.is_open ORDER BY j.posted_at DESC");

    let jobs = sqlx::query_as::<_, JobView>(&sql)
        .bind(company_id)
        .fetch_all(pool)
        .await?;

    Ok(jobs)
}

/// Jobs the user has saved, most recently saved first
pub async fn list_saved_jobs(pool: &PgPool, user_id: Uuid) -> Result<Vec<JobView>, sqlx::Error> {
    let sql = format!(
        "{JOB_VIEW_SELECT}
         JOIN saved_jobs sj ON sj.job_id = j.id
         WHERE sj.user_id = $1
         ORDER BY sj.saved_at DESC"
    );

    let jobs = sqlx::query_as::<_, JobView>(&sql)
        .bind(user_id)
        .fetch_all(pool)
        .await?;

    Ok(jobs)
}

/// Toggle a saved-job marker. Returns true when the job is now saved.
pub async fn toggle_saved_job(
    pool: &PgPool,
    job_id: Uuid,
    user_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let inserted = sqlx::query(
        r#"
        INSERT INTO saved_jobs (job_id, user_id)
        VALUES ($1, $2)
        ON CONFLICT (job_id, user_id) DO NOTHING
        "#,
    )
    .bind(job_id)
    .bind(user_id)
    .execute(pool)
    .await?
    .rows_affected();

    if inserted > 0 {
        return Ok(true);
    }

    sqlx::query("DELETE FROM saved_jobs WHERE job_id = $1 AND user_id = $2")
        .bind(job_id)
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(false)
}

/// Check whether a job exists and is open
pub async fn job_is_open(pool: &PgPool, job_id: Uuid) -> Result<bool, sqlx::Error> {
    let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM jobs WHERE id = $1 AND is_open) AS open")
        .bind(job_id)
        .fetch_one(pool)
        .await?;

    Ok(row.get::<bool, _>("open"))
}
