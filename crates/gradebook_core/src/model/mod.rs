//! Domain model for student records.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep one record shape shared by repository and persistence layers.
//!
//! # Invariants
//! - Every student is identified by a caller-provided `StudentId`.
//! - Removal is a hard delete; the roster never stores tombstones.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod student;
