//! Repository for the `booth_assignments` table.
//!
//! Writes that claim booths go through [`AssignmentRepo::place`] or
//! [`AssignmentRepo::update_checked`]. Both lock the draft row, re-read the draft's
//! assignments, and run the core conflict check inside the same transaction,
//! so two concurrent placements on the same booths cannot both commit.

use boothplan_core::error::CoreError;
use boothplan_core::occupancy::{find_conflict, DayScope, Occupant};
use boothplan_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::assignment::{
    day_column, AssignmentWithCompany, BoothAssignment, PlaceOutcome, UpdateAssignment,
};
use crate::repositories::DraftRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, company_id, draft_id, booth_ids, day, created_at, updated_at";

/// Provides CRUD operations and checked writes for booth assignments.
pub struct AssignmentRepo;

impl AssignmentRepo {
    /// List a draft's assignments in creation order, optionally leaving one out.
    pub async fn list_for_draft(
        pool: &PgPool,
        draft_id: DbId,
        excluding: Option<DbId>,
    ) -> Result<Vec<BoothAssignment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM booth_assignments
             WHERE draft_id = $1 AND ($2::BIGINT IS NULL OR id <> $2)
             ORDER BY id"
        );
        sqlx::query_as::<_, BoothAssignment>(&query)
            .bind(draft_id)
            .bind(excluding)
            .fetch_all(pool)
            .await
    }

    /// List a draft's assignments with their company names, in creation order.
    pub async fn list_with_companies<'e, E>(
        executor: E,
        draft_id: DbId,
    ) -> Result<Vec<AssignmentWithCompany>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, AssignmentWithCompany>(
            "SELECT a.id, a.company_id, a.draft_id, a.booth_ids, a.day, c.name AS company_name
             FROM booth_assignments a
             JOIN companies c ON c.id = a.company_id
             WHERE a.draft_id = $1
             ORDER BY a.id",
        )
        .bind(draft_id)
        .fetch_all(executor)
        .await
    }

    /// Find an assignment by id if its draft belongs to `owner_id`.
    pub async fn find_for_owner(
        pool: &PgPool,
        id: DbId,
        owner_id: DbId,
    ) -> Result<Option<BoothAssignment>, sqlx::Error> {
        sqlx::query_as::<_, BoothAssignment>(
            "SELECT a.id, a.company_id, a.draft_id, a.booth_ids, a.day, a.created_at, a.updated_at
             FROM booth_assignments a
             JOIN drafts d ON d.id = a.draft_id
             WHERE a.id = $1 AND d.owner_id = $2",
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(pool)
        .await
    }

    /// Place a company on `booth_ids`, replacing its existing assignment in
    /// the draft if it has one.
    ///
    /// The company's own current assignment is ignored by the conflict check
    /// since the write replaces it. Returns [`PlaceOutcome::Conflict`] without
    /// writing anything when another company holds one of the booths on an
    /// overlapping day.
    pub async fn place(
        pool: &PgPool,
        draft_id: DbId,
        company_id: DbId,
        booth_ids: &[String],
        scope: DayScope,
    ) -> Result<PlaceOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if !DraftRepo::lock(&mut *tx, draft_id).await? {
            return Err(sqlx::Error::RowNotFound);
        }

        let existing = Self::list_with_companies(&mut *tx, draft_id).await?;
        let own = existing
            .iter()
            .find(|a| a.company_id == company_id)
            .map(|a| a.id);

        if let Some(conflict) = find_conflict(booth_ids, scope, &existing, own) {
            tx.rollback().await?;
            tracing::debug!(
                draft_id,
                company_id,
                booth_id = %conflict.booth_id,
                "Placement rejected",
            );
            return Ok(PlaceOutcome::Conflict(conflict));
        }

        let query = format!(
            "INSERT INTO booth_assignments (company_id, draft_id, booth_ids, day)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (company_id, draft_id)
             DO UPDATE SET booth_ids = EXCLUDED.booth_ids, day = EXCLUDED.day
             RETURNING {COLUMNS}"
        );
        let assignment = sqlx::query_as::<_, BoothAssignment>(&query)
            .bind(company_id)
            .bind(draft_id)
            .bind(booth_ids)
            .bind(day_column(scope))
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(PlaceOutcome::Placed(assignment))
    }

    /// Move an assignment and/or change its day scope.
    ///
    /// Fields omitted from `changes` are filled in from the assignment as it
    /// stands once the draft is locked. `validate` sees the merged booths and
    /// scope; its error is returned as [`PlaceOutcome::Rejected`]. The
    /// assignment itself is excluded from the conflict check. Returns
    /// `Ok(None)` if the assignment no longer exists.
    pub async fn update_checked<F>(
        pool: &PgPool,
        id: DbId,
        draft_id: DbId,
        changes: &UpdateAssignment,
        validate: F,
    ) -> Result<Option<PlaceOutcome>, sqlx::Error>
    where
        F: FnOnce(&[String], DayScope) -> Result<(), CoreError>,
    {
        let mut tx = pool.begin().await?;

        if !DraftRepo::lock(&mut *tx, draft_id).await? {
            return Ok(None);
        }

        let existing = Self::list_with_companies(&mut *tx, draft_id).await?;
        let Some(current) = existing.iter().find(|a| a.id == id) else {
            return Ok(None);
        };

        let booth_ids = changes.booth_ids.as_deref().unwrap_or(current.booth_ids.as_slice());
        let scope = changes.day.unwrap_or_else(|| current.scope());

        if let Err(e) = validate(booth_ids, scope) {
            tx.rollback().await?;
            return Ok(Some(PlaceOutcome::Rejected(e)));
        }

        if let Some(conflict) = find_conflict(booth_ids, scope, &existing, Some(id)) {
            tx.rollback().await?;
            tracing::debug!(
                assignment_id = id,
                booth_id = %conflict.booth_id,
                "Move rejected",
            );
            return Ok(Some(PlaceOutcome::Conflict(conflict)));
        }

        let query = format!(
            "UPDATE booth_assignments SET booth_ids = $2, day = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let assignment = sqlx::query_as::<_, BoothAssignment>(&query)
            .bind(id)
            .bind(booth_ids)
            .bind(day_column(scope))
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(PlaceOutcome::Placed(assignment)))
    }

    /// Delete an assignment. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM booth_assignments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
