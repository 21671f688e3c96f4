use gradebook_core::{
    JsonFileStudentRepository, RegistryService, RepoError, StudentRepository,
};
use std::path::PathBuf;
use tempfile::TempDir;

fn scratch_repo() -> (TempDir, PathBuf, JsonFileStudentRepository) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("students.json");
    let repo = JsonFileStudentRepository::open(&path).unwrap();
    (dir, path, repo)
}

#[test]
fn add_and_reload_roundtrip() {
    let (_dir, path, mut repo) = scratch_repo();

    repo.add_student("s-001", "Alice").unwrap();
    repo.enroll("s-001", "Math").unwrap();
    repo.record_grade("s-001", "Math", "A").unwrap();
    repo.enroll("s-001", "History").unwrap();

    let reloaded = JsonFileStudentRepository::open(&path).unwrap();
    let student = reloaded.get_student("s-001").unwrap();
    assert_eq!(student.student_id, "s-001");
    assert_eq!(student.name, "Alice");
    assert_eq!(student.grade("Math").map(String::as_str), Some("A"));
    assert!(student.is_enrolled("History"));
    assert_eq!(student.grade("History"), None);
}

#[test]
fn add_duplicate_id_is_rejected_and_keeps_original() {
    let (_dir, _path, mut repo) = scratch_repo();

    repo.add_student("s-001", "Alice").unwrap();
    let err = repo.add_student("s-001", "Bob").unwrap_err();
    assert!(matches!(err, RepoError::DuplicateId(id) if id == "s-001"));

    let student = repo.get_student("s-001").unwrap();
    assert_eq!(student.name, "Alice");
}

#[test]
fn enroll_twice_keeps_single_entry_and_grade() {
    let (_dir, path, mut repo) = scratch_repo();

    repo.add_student("s-001", "Alice").unwrap();
    repo.enroll("s-001", "Math").unwrap();
    repo.record_grade("s-001", "Math", "B+").unwrap();
    repo.enroll("s-001", "Math").unwrap();

    let student = repo.get_student("s-001").unwrap();
    assert_eq!(student.courses.len(), 1);
    assert_eq!(student.grade("Math").map(String::as_str), Some("B+"));

    let reloaded = JsonFileStudentRepository::open(&path).unwrap();
    let student = reloaded.get_student("s-001").unwrap();
    assert_eq!(student.courses.len(), 1);
    assert_eq!(student.grade("Math").map(String::as_str), Some("B+"));
}

#[test]
fn enroll_missing_student_returns_not_found() {
    let (_dir, _path, mut repo) = scratch_repo();

    let err = repo.enroll("ghost", "Math").unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == "ghost"));
}

#[test]
fn record_grade_unenrolled_fails_without_state_change() {
    let (_dir, path, mut repo) = scratch_repo();

    repo.add_student("s-001", "Alice").unwrap();
    repo.enroll("s-001", "Math").unwrap();

    let err = repo.record_grade("s-001", "History", "B").unwrap_err();
    assert!(matches!(
        err,
        RepoError::NotEnrolled { student_id, course }
            if student_id == "s-001" && course == "History"
    ));

    let student = repo.get_student("s-001").unwrap();
    assert_eq!(student.courses.len(), 1);
    assert_eq!(student.grade("Math"), None);

    let reloaded = JsonFileStudentRepository::open(&path).unwrap();
    assert_eq!(reloaded.get_student("s-001").unwrap(), student);
}

#[test]
fn remove_missing_id_leaves_file_untouched() {
    let (_dir, path, mut repo) = scratch_repo();

    repo.add_student("s-001", "Alice").unwrap();
    let before = std::fs::read(&path).unwrap();

    let err = repo.remove_student("ghost").unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == "ghost"));

    let after = std::fs::read(&path).unwrap();
    assert_eq!(before, after);
}

#[test]
fn remove_student_deletes_entry() {
    let (_dir, path, mut repo) = scratch_repo();

    repo.add_student("s-001", "Alice").unwrap();
    repo.add_student("s-002", "Bob").unwrap();
    repo.remove_student("s-001").unwrap();

    assert!(repo.get_student("s-001").is_none());
    assert_eq!(repo.list_students().len(), 1);

    let reloaded = JsonFileStudentRepository::open(&path).unwrap();
    assert!(reloaded.get_student("s-001").is_none());
    assert!(reloaded.get_student("s-002").is_some());
}

#[test]
fn rename_student_overwrites_name() {
    let (_dir, path, mut repo) = scratch_repo();

    repo.add_student("s-001", "Alice").unwrap();
    repo.rename_student("s-001", "Alicia").unwrap();

    assert_eq!(repo.get_student("s-001").unwrap().name, "Alicia");

    let reloaded = JsonFileStudentRepository::open(&path).unwrap();
    assert_eq!(reloaded.get_student("s-001").unwrap().name, "Alicia");

    let err = repo.rename_student("ghost", "Nobody").unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == "ghost"));
}

#[test]
fn list_students_preserves_insertion_order() {
    let (_dir, path, mut repo) = scratch_repo();

    repo.add_student("s-003", "Carol").unwrap();
    repo.add_student("s-001", "Alice").unwrap();
    repo.add_student("s-002", "Bob").unwrap();

    let ids: Vec<_> = repo
        .list_students()
        .into_iter()
        .map(|student| student.student_id)
        .collect();
    assert_eq!(ids, ["s-003", "s-001", "s-002"]);

    let reloaded = JsonFileStudentRepository::open(&path).unwrap();
    let ids: Vec<_> = reloaded
        .list_students()
        .into_iter()
        .map(|student| student.student_id)
        .collect();
    assert_eq!(ids, ["s-003", "s-001", "s-002"]);
}

#[test]
fn enrollment_listing_returns_names_in_roster_order() {
    let (_dir, _path, mut repo) = scratch_repo();

    repo.add_student("s-001", "Alice").unwrap();
    repo.add_student("s-002", "Bob").unwrap();
    repo.add_student("s-003", "Carol").unwrap();
    repo.enroll("s-001", "Math").unwrap();
    repo.enroll("s-003", "Math").unwrap();
    repo.enroll("s-002", "History").unwrap();

    assert_eq!(repo.students_enrolled_in("Math"), ["Alice", "Carol"]);
    assert!(repo.students_enrolled_in("Chemistry").is_empty());
}

#[test]
fn listing_empty_roster_is_valid() {
    let (_dir, _path, repo) = scratch_repo();

    assert!(repo.list_students().is_empty());
    assert!(repo.students_enrolled_in("Math").is_empty());
}

#[test]
fn service_wraps_repository_calls() {
    let (_dir, _path, repo) = scratch_repo();
    let mut registry = RegistryService::new(repo);

    registry.add_student("S1", "Alice").unwrap();
    registry.enroll("S1", "Math").unwrap();
    registry.record_grade("S1", "Math", "A").unwrap();

    let students = registry.list_students();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].student_id, "S1");
    assert_eq!(students[0].name, "Alice");
    assert_eq!(students[0].courses.len(), 1);
    assert_eq!(students[0].grade("Math").map(String::as_str), Some("A"));
}
