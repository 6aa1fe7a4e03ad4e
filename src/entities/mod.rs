//! Entity module - Contains the SeaORM entity definitions for the database.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod employee;

pub use employee::{
    Column as EmployeeColumn, EmployeeRecord, EmployeeStatus, Entity as Employee,
    Model as EmployeeModel,
};
