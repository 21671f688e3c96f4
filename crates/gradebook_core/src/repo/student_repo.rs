//! Student repository contract and JSON-snapshot implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the canonical roster.
//! - Enforce identifier existence/uniqueness rules before any state change.
//! - Flush the full roster through the snapshot gateway after every
//!   successful mutation.
//!
//! # Invariants
//! - Semantic failures (`DuplicateId`, `NotFound`, `NotEnrolled`) leave both
//!   the in-memory roster and the snapshot file untouched.
//! - Successful mutations return only after the snapshot is rewritten.
//! - Read paths never touch the snapshot file.
//!
//! # See also
//! - docs/architecture/persistence.md

use crate::model::student::{Roster, Student, StudentId};
use crate::store::{self, StoreError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type RepoResult<T> = Result<T, RepoError>;

/// Semantic and transport errors for student record operations.
///
/// The `Display` rendering is the human-readable reason surfaced by the
/// presentation loop.
#[derive(Debug)]
pub enum RepoError {
    /// Add refused because the identifier is already taken.
    DuplicateId(StudentId),
    /// Target student does not exist.
    NotFound(StudentId),
    /// Grade refused because the student never enrolled in the course.
    NotEnrolled {
        student_id: StudentId,
        course: String,
    },
    /// Snapshot load/save failure.
    Store(StoreError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "student id `{id}` already exists"),
            Self::NotFound(id) => write!(f, "student id `{id}` not found"),
            Self::NotEnrolled { student_id, course } => {
                write!(f, "student `{student_id}` is not enrolled in `{course}`")
            }
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Repository interface for student record operations.
///
/// Mutating operations take `&mut self`: the store is single-owner and
/// single-threaded, so interior mutability buys nothing here.
pub trait StudentRepository {
    /// Creates a student with an empty course mapping.
    fn add_student(&mut self, student_id: &str, name: &str) -> RepoResult<()>;
    /// Enrolls a student in a course. Idempotent; an existing grade stays.
    fn enroll(&mut self, student_id: &str, course: &str) -> RepoResult<()>;
    /// Overwrites the grade for an enrolled course.
    fn record_grade(&mut self, student_id: &str, course: &str, grade: &str) -> RepoResult<()>;
    /// Hard-deletes a student record.
    fn remove_student(&mut self, student_id: &str) -> RepoResult<()>;
    /// Overwrites a student's display name.
    fn rename_student(&mut self, student_id: &str, new_name: &str) -> RepoResult<()>;
    /// Gets one student by id; an absent id is `None`, not an error.
    fn get_student(&self, student_id: &str) -> Option<Student>;
    /// Lists all students in insertion order.
    fn list_students(&self) -> Vec<Student>;
    /// Lists display names of students enrolled in `course`, in roster order.
    fn students_enrolled_in(&self, course: &str) -> Vec<String>;
}

/// JSON-snapshot-backed student repository.
///
/// Holds the live roster in memory and rewrites the snapshot file after
/// every successful mutation.
pub struct JsonFileStudentRepository {
    snapshot_path: PathBuf,
    roster: Roster,
}

impl JsonFileStudentRepository {
    /// Opens a repository over `snapshot_path`, loading persisted state.
    ///
    /// A missing file yields an empty roster.
    pub fn open(snapshot_path: impl Into<PathBuf>) -> RepoResult<Self> {
        let snapshot_path = snapshot_path.into();
        let roster = store::load_roster(&snapshot_path)?;
        Ok(Self {
            snapshot_path,
            roster,
        })
    }

    /// Returns the snapshot file location backing this repository.
    pub fn snapshot_path(&self) -> &Path {
        &self.snapshot_path
    }

    fn flush(&self) -> RepoResult<()> {
        store::save_roster(&self.snapshot_path, &self.roster)?;
        Ok(())
    }

    fn student_mut(&mut self, student_id: &str) -> RepoResult<&mut Student> {
        self.roster
            .get_mut(student_id)
            .ok_or_else(|| RepoError::NotFound(student_id.to_string()))
    }
}

impl StudentRepository for JsonFileStudentRepository {
    fn add_student(&mut self, student_id: &str, name: &str) -> RepoResult<()> {
        if self.roster.contains_key(student_id) {
            return Err(RepoError::DuplicateId(student_id.to_string()));
        }

        self.roster
            .insert(student_id.to_string(), Student::new(student_id, name));
        self.flush()
    }

    fn enroll(&mut self, student_id: &str, course: &str) -> RepoResult<()> {
        let student = self.student_mut(student_id)?;
        if !student.enroll(course) {
            // Already enrolled: nothing changed, nothing to rewrite.
            return Ok(());
        }
        self.flush()
    }

    fn record_grade(&mut self, student_id: &str, course: &str, grade: &str) -> RepoResult<()> {
        let student = self.student_mut(student_id)?;
        if !student.record_grade(course, grade) {
            return Err(RepoError::NotEnrolled {
                student_id: student_id.to_string(),
                course: course.to_string(),
            });
        }
        self.flush()
    }

    fn remove_student(&mut self, student_id: &str) -> RepoResult<()> {
        // shift_remove keeps the remaining students in insertion order.
        if self.roster.shift_remove(student_id).is_none() {
            return Err(RepoError::NotFound(student_id.to_string()));
        }
        self.flush()
    }

    fn rename_student(&mut self, student_id: &str, new_name: &str) -> RepoResult<()> {
        let student = self.student_mut(student_id)?;
        student.name = new_name.to_string();
        self.flush()
    }

    fn get_student(&self, student_id: &str) -> Option<Student> {
        self.roster.get(student_id).cloned()
    }

    fn list_students(&self) -> Vec<Student> {
        self.roster.values().cloned().collect()
    }

    fn students_enrolled_in(&self, course: &str) -> Vec<String> {
        self.roster
            .values()
            .filter(|student| student.is_enrolled(course))
            .map(|student| student.name.clone())
            .collect()
    }
}
