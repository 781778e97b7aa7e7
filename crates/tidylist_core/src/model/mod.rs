//! Domain model for the to-do list and expense tracker.
//!
//! # Responsibility
//! - Define the persisted entity records and their factories.
//! - Provide the fixed category configuration shared by every projection.
//!
//! # Invariants
//! - Every entity is identified by an `EntityId` unique within the process.
//! - Entities are plain data; collection ownership lives in controllers.

pub mod category;
pub mod expense;
pub mod id;
pub mod task;
