//! Student registry use-case service.
//!
//! # Responsibility
//! - Provide stable record-keeping entry points for presentation callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository existence checks or flush rules.
//! - Service layer remains storage-agnostic.

use crate::model::student::Student;
use crate::repo::student_repo::{RepoResult, StudentRepository};

/// Use-case service wrapper for student record operations.
pub struct RegistryService<R: StudentRepository> {
    repo: R,
}

impl<R: StudentRepository> RegistryService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a new student with an empty course mapping.
    ///
    /// # Contract
    /// - Fails with `DuplicateId` when the identifier is taken.
    pub fn add_student(&mut self, student_id: &str, name: &str) -> RepoResult<()> {
        self.repo.add_student(student_id, name)
    }

    /// Enrolls a student in a course.
    ///
    /// # Contract
    /// - Fails with `NotFound` when the student does not exist.
    /// - Re-enrolling is a no-op that keeps any recorded grade.
    pub fn enroll(&mut self, student_id: &str, course: &str) -> RepoResult<()> {
        self.repo.enroll(student_id, course)
    }

    /// Records (or overwrites) a grade for an enrolled course.
    ///
    /// # Contract
    /// - Fails with `NotFound` when the student does not exist.
    /// - Fails with `NotEnrolled` when the course was never enrolled.
    pub fn record_grade(&mut self, student_id: &str, course: &str, grade: &str) -> RepoResult<()> {
        self.repo.record_grade(student_id, course, grade)
    }

    /// Removes a student record entirely.
    pub fn remove_student(&mut self, student_id: &str) -> RepoResult<()> {
        self.repo.remove_student(student_id)
    }

    /// Overwrites a student's display name.
    pub fn rename_student(&mut self, student_id: &str, new_name: &str) -> RepoResult<()> {
        self.repo.rename_student(student_id, new_name)
    }

    /// Gets one student by id.
    pub fn get_student(&self, student_id: &str) -> Option<Student> {
        self.repo.get_student(student_id)
    }

    /// Lists all students in insertion order.
    pub fn list_students(&self) -> Vec<Student> {
        self.repo.list_students()
    }

    /// Lists display names of students enrolled in `course`.
    pub fn students_enrolled_in(&self, course: &str) -> Vec<String> {
        self.repo.students_enrolled_in(course)
    }
}
