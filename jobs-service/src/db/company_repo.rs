use crate::models::CompanyView;
use sqlx::PgPool;
use uuid::Uuid;

const COMPANY_VIEW_SELECT: &str = r#"
    SELECT c.id, c.name, c.location, c.industry, c.description, c.hiring_focus,
           c.rating, c.review_count,
           COALESCE(oc.open_roles, 0) AS open_roles
    FROM companies c
    LEFT JOIN (
        SELECT company_id, COUNT(*) AS open_roles
        FROM jobs
        WHERE is_open
        GROUP BY company_id
    ) oc ON oc.company_id = c.id
"#;

/// List companies matching the search term over name, industry, and
/// description; an empty term lists everything
pub async fn list_companies(
    pool: &PgPool,
    search: &str,
    limit: i64,
    offset: i64,
) -> Result<Vec<CompanyView>, sqlx::Error> {
    let sql = format!(
        r#"{COMPANY_VIEW_SELECT}
        WHERE ($1 = '' OR lower(c.name) LIKE '%' || lower($1) || '%'
               OR lower(c.description) LIKE '%' || lower($1) || '%'
               OR EXISTS (SELECT 1 FROM unnest(c.industry) AS ind
                          WHERE lower(ind) LIKE '%' || lower($1) || '%'))
        ORDER BY c.name ASC
        LIMIT $2 OFFSET $3"#
    );

    let companies = sqlx::query_as::<_, CompanyView>(&sql)
        .bind(search)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

    Ok(companies)
}

/// Find a company by ID with its open-role count
pub async fn find_company_by_id(
    pool: &PgPool,
    company_id: Uuid,
) -> Result<Option<CompanyView>, sqlx::Error> {
    let sql = format!("{COMPANY_VIEW_SELECT} WHERE c.id = $1");

    let company = sqlx::query_as::<_, CompanyView>(&sql)
        .bind(company_id)
        .fetch_optional(pool)
        .await?;

    Ok(company)
}
