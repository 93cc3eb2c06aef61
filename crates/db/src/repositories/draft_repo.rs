//! Repository for the `drafts` table.

use boothplan_core::duplication::{duplicate_name, remap_assignments, remap_company_ids};
use boothplan_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::assignment::day_column;
use crate::models::company::Company;
use crate::models::draft::{Draft, DraftSummary};
use crate::repositories::{AssignmentRepo, CompanyRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, owner_id, name, created_at, updated_at";

/// Provides CRUD operations for drafts. Every lookup is scoped to an owner.
pub struct DraftRepo;

impl DraftRepo {
    /// Insert a new draft, returning the created row.
    pub async fn create(pool: &PgPool, owner_id: DbId, name: &str) -> Result<Draft, sqlx::Error> {
        let query = format!(
            "INSERT INTO drafts (owner_id, name) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Draft>(&query)
            .bind(owner_id)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// Find a draft by id if it belongs to `owner_id`.
    pub async fn find_for_owner(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
    ) -> Result<Option<Draft>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM drafts WHERE id = $1 AND owner_id = $2");
        sqlx::query_as::<_, Draft>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// List an owner's drafts with company/assignment counts, most recently
    /// updated first.
    pub async fn list_for_owner(
        pool: &PgPool,
        owner_id: DbId,
    ) -> Result<Vec<DraftSummary>, sqlx::Error> {
        sqlx::query_as::<_, DraftSummary>(
            "SELECT d.id, d.owner_id, d.name,
                    (SELECT COUNT(*) FROM companies c WHERE c.draft_id = d.id) AS company_count,
                    (SELECT COUNT(*) FROM booth_assignments a WHERE a.draft_id = d.id)
                        AS assignment_count,
                    d.created_at, d.updated_at
             FROM drafts d
             WHERE d.owner_id = $1
             ORDER BY d.updated_at DESC, d.id DESC",
        )
        .bind(owner_id)
        .fetch_all(pool)
        .await
    }

    /// Rename a draft. Returns `None` if it does not exist or belongs to
    /// someone else.
    pub async fn rename(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
        name: &str,
    ) -> Result<Option<Draft>, sqlx::Error> {
        let query = format!(
            "UPDATE drafts SET name = $3 WHERE id = $1 AND owner_id = $2 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Draft>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a draft and, by cascade, its companies and assignments.
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId, owner_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM drafts WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Lock a draft row for the rest of the transaction.
    ///
    /// Checked assignment writes take this lock first so that concurrent
    /// writes to the same draft run their read-check-write one at a time.
    pub async fn lock(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let locked = sqlx::query_scalar::<_, DbId>("SELECT id FROM drafts WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(locked.is_some())
    }

    /// Copy a draft with its companies and assignments.
    ///
    /// Companies are matched back to their originals by name; the copy is
    /// written in a single transaction.
    pub async fn duplicate(pool: &PgPool, original: &Draft) -> Result<Draft, sqlx::Error> {
        let companies = CompanyRepo::list_for_draft(pool, original.id).await?;
        let assignments = AssignmentRepo::list_for_draft(pool, original.id, None).await?;

        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO drafts (owner_id, name) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        let copy = sqlx::query_as::<_, Draft>(&query)
            .bind(original.owner_id)
            .bind(duplicate_name(&original.name))
            .fetch_one(&mut *tx)
            .await?;

        let mut copied_companies: Vec<Company> = Vec::with_capacity(companies.len());
        for company in &companies {
            let row = sqlx::query_as::<_, Company>(
                "INSERT INTO companies (draft_id, name, days, sponsorship, has_queue)
                 VALUES ($1, $2, $3, $4, $5)
                 RETURNING id, draft_id, name, days, sponsorship, has_queue,
                           created_at, updated_at",
            )
            .bind(copy.id)
            .bind(&company.name)
            .bind(&company.days)
            .bind(&company.sponsorship)
            .bind(company.has_queue)
            .fetch_one(&mut *tx)
            .await?;
            copied_companies.push(row);
        }

        let originals: Vec<(DbId, String)> =
            companies.iter().map(|c| (c.id, c.name.clone())).collect();
        let copies: Vec<(DbId, String)> = copied_companies
            .iter()
            .map(|c| (c.id, c.name.clone()))
            .collect();
        let company_map = remap_company_ids(&originals, &copies);

        for assignment in remap_assignments(&assignments, &company_map) {
            sqlx::query(
                "INSERT INTO booth_assignments (company_id, draft_id, booth_ids, day)
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(assignment.company_id)
            .bind(copy.id)
            .bind(&assignment.booth_ids)
            .bind(day_column(assignment.day))
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        tracing::debug!(
            original_id = original.id,
            copy_id = copy.id,
            companies = copied_companies.len(),
            "Draft duplicated",
        );

        Ok(copy)
    }
}
