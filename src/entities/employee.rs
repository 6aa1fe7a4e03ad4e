//! Employee entity - One person's employment record.
//!
//! Records are never removed from the table. "Deleting" an employee flips its
//! status to [`EmployeeStatus::Inactive`] and every normal read path filters
//! on [`EmployeeStatus::Active`].

use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Soft-delete lifecycle flag. No other states exist.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmployeeStatus {
    /// Visible to list, get, update and delete
    #[default]
    #[sea_orm(string_value = "ACTIVE")]
    Active,
    /// Soft-deleted; kept in storage but hidden from every normal path
    #[sea_orm(string_value = "INACTIVE")]
    Inactive,
}

/// Employee database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employees")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Store-assigned identifier, immutable once assigned
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Given name
    pub first_name: String,
    /// Single letter by convention, not enforced
    pub middle_initial: String,
    /// Family name
    pub last_name: String,
    /// Calendar date, no time component
    pub date_of_birth: NaiveDate,
    /// First day of employment
    pub date_of_employment: NaiveDate,
    /// Soft-delete flag; only `ACTIVE` rows are visible to the API
    pub status: EmployeeStatus,
}

/// `Employee` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// An employee record that may not have been persisted yet.
///
/// This is the shape accepted by the store's `save` operations, produced by
/// loader strategies and deserialized from request bodies. `id` and `status`
/// may be omitted in JSON; they default to unassigned and `ACTIVE`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    /// `None` until the record is first saved
    #[serde(default)]
    pub id: Option<i64>,
    /// Given name
    pub first_name: String,
    /// Middle initial, free text
    pub middle_initial: String,
    /// Family name
    pub last_name: String,
    /// Calendar date, no time component
    pub date_of_birth: NaiveDate,
    /// First day of employment
    pub date_of_employment: NaiveDate,
    /// Defaults to `ACTIVE` when omitted
    #[serde(default)]
    pub status: EmployeeStatus,
}

impl EmployeeRecord {
    /// Builds an unsaved, active record.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        middle_initial: impl Into<String>,
        last_name: impl Into<String>,
        date_of_birth: NaiveDate,
        date_of_employment: NaiveDate,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            middle_initial: middle_initial.into(),
            last_name: last_name.into(),
            date_of_birth,
            date_of_employment,
            status: EmployeeStatus::Active,
        }
    }

    /// Returns the same record with the given status.
    #[must_use]
    pub const fn with_status(mut self, status: EmployeeStatus) -> Self {
        self.status = status;
        self
    }
}

impl From<Model> for EmployeeRecord {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            first_name: model.first_name,
            middle_initial: model.middle_initial,
            last_name: model.last_name,
            date_of_birth: model.date_of_birth,
            date_of_employment: model.date_of_employment,
            status: model.status,
        }
    }
}
