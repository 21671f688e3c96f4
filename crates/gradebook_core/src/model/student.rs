//! Student domain model.
//!
//! # Responsibility
//! - Define the canonical student record shared by repository and snapshot
//!   layers.
//! - Provide enrollment/grade helpers with idempotent semantics.
//!
//! # Invariants
//! - `student_id` is stable for the record lifetime; uniqueness across the
//!   roster is enforced by the repository, not here.
//! - `courses` preserves enrollment (insertion) order.
//! - An enrolled course without a grade is `None`, never a sentinel string.
//!
//! # See also
//! - docs/architecture/data-model.md

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Caller-provided stable identifier for a student.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type StudentId = String;

/// Opaque grade value attached to an enrollment once recorded.
///
/// Core applies no numeric interpretation or validation to grades.
pub type Grade = String;

/// Insertion-ordered collection of all students, keyed by id.
///
/// This is the in-memory shape of the persisted snapshot document.
pub type Roster = IndexMap<StudentId, Student>;

/// Canonical student record.
///
/// The serialized form matches the snapshot file schema: `student_id`,
/// `name`, and `courses` mapping course name to grade-or-null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Stable id, duplicated from the roster key for a self-contained record.
    pub student_id: StudentId,
    /// Display name; mutable via rename.
    pub name: String,
    /// Course name -> optional grade, in enrollment order.
    pub courses: IndexMap<String, Option<Grade>>,
}

impl Student {
    /// Creates a student with an empty course mapping.
    pub fn new(student_id: impl Into<StudentId>, name: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            name: name.into(),
            courses: IndexMap::new(),
        }
    }

    /// Enrolls this student in `course`.
    ///
    /// Idempotent: re-enrolling an already-enrolled course is a no-op that
    /// keeps any recorded grade. Returns `true` when the enrollment is new.
    pub fn enroll(&mut self, course: impl Into<String>) -> bool {
        let course = course.into();
        if self.courses.contains_key(&course) {
            return false;
        }
        self.courses.insert(course, None);
        true
    }

    /// Overwrites the grade for an enrolled course.
    ///
    /// Returns `false` without touching state when this student is not
    /// enrolled in `course`.
    pub fn record_grade(&mut self, course: &str, grade: impl Into<Grade>) -> bool {
        match self.courses.get_mut(course) {
            Some(slot) => {
                *slot = Some(grade.into());
                true
            }
            None => false,
        }
    }

    /// Returns whether this student is enrolled in `course`.
    pub fn is_enrolled(&self, course: &str) -> bool {
        self.courses.contains_key(course)
    }

    /// Returns the recorded grade for `course`, if enrolled and graded.
    pub fn grade(&self, course: &str) -> Option<&Grade> {
        self.courses.get(course).and_then(|grade| grade.as_ref())
    }
}
