//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for student records.
//! - Isolate snapshot-file details from service/business orchestration.
//!
//! # Invariants
//! - Repository mutations flush the full roster before returning.
//! - Repository APIs return semantic errors (`DuplicateId`, `NotFound`,
//!   `NotEnrolled`) in addition to storage transport errors.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod student_repo;
