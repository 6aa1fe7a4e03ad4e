//! Employee business logic - The active-only view over the store.
//!
//! Everything a caller can reach through this module operates on `ACTIVE`
//! employees only. Absence is reported as `Ok(None)`; callers cannot tell a
//! never-assigned id from a soft-deleted one.
//!
//! Update and delete are plain read-modify-write sequences with no locking,
//! so a concurrent update and delete on the same id resolve as last write wins.

use crate::{
    core::store,
    entities::{EmployeeRecord, EmployeeStatus, employee},
    errors::Result,
};
use sea_orm::{ConnectionTrait, TransactionTrait};
use tracing::{debug, info};

/// Lists every active employee in store order.
pub async fn list_active<C>(db: &C) -> Result<Vec<employee::Model>>
where
    C: ConnectionTrait,
{
    store::find_by_status(db, EmployeeStatus::Active).await
}

/// Returns the employee with `id` if and only if it is active.
pub async fn get_active<C>(db: &C, id: i64) -> Result<Option<employee::Model>>
where
    C: ConnectionTrait,
{
    store::find_by_id_and_status(db, id, EmployeeStatus::Active).await
}

/// Persists a single record: insert when it has no id, update otherwise.
pub async fn save<C>(db: &C, record: EmployeeRecord) -> Result<employee::Model>
where
    C: ConnectionTrait,
{
    store::save(db, record).await
}

/// Persists a batch of records in order. Used for seeding.
pub async fn save_many<C>(db: &C, records: Vec<EmployeeRecord>) -> Result<Vec<employee::Model>>
where
    C: ConnectionTrait + TransactionTrait,
{
    let saved = store::save_all(db, records).await?;
    info!("Saved {} employee records", saved.len());
    Ok(saved)
}

/// Replaces the names and both dates of an active employee.
///
/// `changes.id` and `changes.status` are ignored. Returns `Ok(None)` without
/// touching the store when `id` is not active.
pub async fn update_active<C>(
    db: &C,
    id: i64,
    changes: EmployeeRecord,
) -> Result<Option<employee::Model>>
where
    C: ConnectionTrait,
{
    let Some(current) = get_active(db, id).await? else {
        debug!("Update skipped, no active employee {}", id);
        return Ok(None);
    };

    let record = EmployeeRecord {
        id: Some(current.id),
        first_name: changes.first_name,
        middle_initial: changes.middle_initial,
        last_name: changes.last_name,
        date_of_birth: changes.date_of_birth,
        date_of_employment: changes.date_of_employment,
        status: current.status,
    };

    save(db, record).await.map(Some)
}

/// Soft-deletes an active employee by flipping its status to `INACTIVE`.
///
/// Returns the stored row after the change, or `Ok(None)` when `id` is not
/// active (including when it was already deactivated).
pub async fn deactivate<C>(db: &C, id: i64) -> Result<Option<employee::Model>>
where
    C: ConnectionTrait,
{
    let Some(current) = get_active(db, id).await? else {
        debug!("Delete skipped, no active employee {}", id);
        return Ok(None);
    };

    let record = EmployeeRecord::from(current).with_status(EmployeeStatus::Inactive);
    let saved = save(db, record).await?;
    info!("Marked employee {} inactive", saved.id);
    Ok(Some(saved))
}
