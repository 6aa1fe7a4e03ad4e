//! Employee store - The persistence-facing query shapes.
//!
//! These are the only queries the rest of the crate issues against the
//! `employees` table. The status-filtered lookups encode the soft-delete
//! contract: an id whose record is `INACTIVE` is indistinguishable from an id
//! that was never assigned.

use crate::{
    entities::{Employee, EmployeeRecord, EmployeeStatus, employee},
    errors::Result,
};
use sea_orm::{PaginatorTrait, QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::debug;

/// Returns every employee with the given status, in insertion order.
pub async fn find_by_status<C>(db: &C, status: EmployeeStatus) -> Result<Vec<employee::Model>>
where
    C: ConnectionTrait,
{
    Employee::find()
        .filter(employee::Column::Status.eq(status))
        .order_by_asc(employee::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Returns the employee with `id` only if its status matches `status`.
pub async fn find_by_id_and_status<C>(
    db: &C,
    id: i64,
    status: EmployeeStatus,
) -> Result<Option<employee::Model>>
where
    C: ConnectionTrait,
{
    Employee::find_by_id(id)
        .filter(employee::Column::Status.eq(status))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Unfiltered primary-key lookup. Not used by any request path; it exists so
/// callers can observe soft-deleted rows.
pub async fn find_by_id<C>(db: &C, id: i64) -> Result<Option<employee::Model>>
where
    C: ConnectionTrait,
{
    Employee::find_by_id(id).one(db).await.map_err(Into::into)
}

/// Returns true when no employee row exists in any status.
pub async fn is_empty<C>(db: &C) -> Result<bool>
where
    C: ConnectionTrait,
{
    Ok(Employee::find().count(db).await? == 0)
}

/// Insert-or-update by identity.
///
/// A record without an id is inserted and receives a store-assigned id. A
/// record with an id replaces every column of the stored row, or is inserted
/// under that id when no such row exists.
pub async fn save<C>(db: &C, record: EmployeeRecord) -> Result<employee::Model>
where
    C: ConnectionTrait,
{
    let mut active = employee::ActiveModel {
        first_name: Set(record.first_name),
        middle_initial: Set(record.middle_initial),
        last_name: Set(record.last_name),
        date_of_birth: Set(record.date_of_birth),
        date_of_employment: Set(record.date_of_employment),
        status: Set(record.status),
        ..Default::default()
    };

    let Some(id) = record.id else {
        return active.insert(db).await.map_err(Into::into);
    };

    active.id = Set(id);
    if find_by_id(db, id).await?.is_some() {
        debug!("Updating employee {}", id);
        active.update(db).await.map_err(Into::into)
    } else {
        debug!("No employee {} stored yet, inserting with that id", id);
        active.insert(db).await.map_err(Into::into)
    }
}

/// Saves every record inside one transaction, returning them in input order.
pub async fn save_all<C>(db: &C, records: Vec<EmployeeRecord>) -> Result<Vec<employee::Model>>
where
    C: ConnectionTrait + TransactionTrait,
{
    let txn = db.begin().await?;

    let mut saved = Vec::with_capacity(records.len());
    for record in records {
        saved.push(save(&txn, record).await?);
    }

    txn.commit().await?;
    Ok(saved)
}
