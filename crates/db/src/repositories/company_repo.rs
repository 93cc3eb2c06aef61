//! Repository for the `companies` table.

use boothplan_core::import::ImportedCompany;
use boothplan_core::types::DbId;
use sqlx::PgPool;

use crate::models::company::{day_names, Company, CreateCompany, ImportCounts, UpdateCompany};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, draft_id, name, days, sponsorship, has_queue, created_at, updated_at";

/// Same columns qualified with the `c` alias used in owner-scoped joins.
const QUALIFIED_COLUMNS: &str = "c.id, c.draft_id, c.name, c.days, c.sponsorship, c.has_queue, \
                                 c.created_at, c.updated_at";

/// Provides CRUD operations for companies.
pub struct CompanyRepo;

impl CompanyRepo {
    /// List a draft's companies ordered by name.
    pub async fn list_for_draft(
        pool: &PgPool,
        draft_id: DbId,
    ) -> Result<Vec<Company>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM companies WHERE draft_id = $1 ORDER BY name, id");
        sqlx::query_as::<_, Company>(&query)
            .bind(draft_id)
            .fetch_all(pool)
            .await
    }

    /// Find a company by id within a draft.
    pub async fn find_in_draft(
        pool: &PgPool,
        id: DbId,
        draft_id: DbId,
    ) -> Result<Option<Company>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM companies WHERE id = $1 AND draft_id = $2");
        sqlx::query_as::<_, Company>(&query)
            .bind(id)
            .bind(draft_id)
            .fetch_optional(pool)
            .await
    }

    /// Find a company by id if its draft belongs to `owner_id`.
    pub async fn find_for_owner(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
    ) -> Result<Option<Company>, sqlx::Error> {
        let query = format!(
            "SELECT {QUALIFIED_COLUMNS} FROM companies c
             JOIN drafts d ON d.id = c.draft_id
             WHERE c.id = $1 AND d.owner_id = $2"
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new company, returning the created row.
    pub async fn create(
        pool: &PgPool,
        draft_id: DbId,
        input: &CreateCompany,
    ) -> Result<Company, sqlx::Error> {
        let query = format!(
            "INSERT INTO companies (draft_id, name, days, sponsorship, has_queue)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(draft_id)
            .bind(input.name.trim())
            .bind(day_names(&input.days))
            .bind(input.sponsorship.as_str())
            .bind(input.has_queue.unwrap_or(false))
            .fetch_one(pool)
            .await
    }

    /// Update a company. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCompany,
    ) -> Result<Option<Company>, sqlx::Error> {
        let query = format!(
            "UPDATE companies SET
                name = COALESCE($2, name),
                days = COALESCE($3, days),
                sponsorship = COALESCE($4, sponsorship),
                has_queue = COALESCE($5, has_queue)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(id)
            .bind(input.name.as_deref().map(str::trim))
            .bind(input.days.as_deref().map(day_names))
            .bind(input.sponsorship.map(|s| s.as_str()))
            .bind(input.has_queue)
            .fetch_optional(pool)
            .await
    }

    /// Delete a company and, by cascade, its assignment.
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM companies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Upsert imported companies by name within a draft.
    ///
    /// Existing companies keep their id, queue flag, and assignment; their
    /// days and tier are overwritten. All rows are written in one transaction.
    pub async fn import(
        pool: &PgPool,
        draft_id: DbId,
        companies: &[ImportedCompany],
    ) -> Result<ImportCounts, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut counts = ImportCounts::default();

        for company in companies {
            let existing = sqlx::query_scalar::<_, DbId>(
                "SELECT id FROM companies WHERE draft_id = $1 AND name = $2",
            )
            .bind(draft_id)
            .bind(&company.name)
            .fetch_optional(&mut *tx)
            .await?;

            match existing {
                Some(id) => {
                    sqlx::query("UPDATE companies SET days = $2, sponsorship = $3 WHERE id = $1")
                        .bind(id)
                        .bind(day_names(&company.days))
                        .bind(company.sponsorship.as_str())
                        .execute(&mut *tx)
                        .await?;
                    counts.updated += 1;
                }
                None => {
                    sqlx::query(
                        "INSERT INTO companies (draft_id, name, days, sponsorship)
                         VALUES ($1, $2, $3, $4)",
                    )
                    .bind(draft_id)
                    .bind(&company.name)
                    .bind(day_names(&company.days))
                    .bind(company.sponsorship.as_str())
                    .execute(&mut *tx)
                    .await?;
                    counts.created += 1;
                }
            }
        }

        tx.commit().await?;
        Ok(counts)
    }
}
