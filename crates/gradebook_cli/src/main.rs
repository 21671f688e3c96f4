//! Interactive menu front-end for the gradebook core.
//!
//! # Responsibility
//! - Collect user input and render operation outcomes as terminal messages.
//! - Wire configuration, logging, and the snapshot-backed repository
//!   together at process start.
//!
//! # Invariants
//! - All record access goes through `RegistryService`; the loop never
//!   touches the snapshot file directly.
//! - Operation failures are reported and the menu continues; only startup
//!   failures exit the process.

mod config;

use gradebook_core::{
    init_logging, JsonFileStudentRepository, RegistryService, Student, StudentRepository,
};
use std::io::{self, Write};

fn main() {
    let config = config::resolve();

    if let Err(err) = init_logging(&config.log_level, &config.log_dir) {
        eprintln!("warning: file logging disabled: {err}");
    }

    let repo = match JsonFileStudentRepository::open(&config.data_file) {
        Ok(repo) => repo,
        Err(err) => {
            eprintln!(
                "error: cannot open student records `{}`: {err}",
                config.data_file.display()
            );
            std::process::exit(1);
        }
    };
    let mut registry = RegistryService::new(repo);

    println!("Student Management System");
    run_menu(&mut registry);
}

fn run_menu<R: StudentRepository>(registry: &mut RegistryService<R>) {
    loop {
        print_menu();
        let Some(choice) = read_line("Select an option (1-8): ") else {
            break;
        };

        match choice.as_str() {
            "1" => add_student(registry),
            "2" => enroll_student(registry),
            "3" => record_grade(registry),
            "4" => view_records(registry),
            "5" => remove_student(registry),
            "6" => rename_student(registry),
            "7" => view_enrollment(registry),
            "8" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("[error] invalid choice; select an option from 1 to 8."),
        }
    }
}

fn print_menu() {
    println!();
    println!("Main Menu");
    println!("1. Add Student");
    println!("2. Enroll Student in Course");
    println!("3. Record Student Grade");
    println!("4. View Student Records");
    println!("5. Remove Student");
    println!("6. Update Student Name");
    println!("7. View Course Enrollment");
    println!("8. Exit");
}

/// Prompts for one trimmed input line. `None` means stdin is exhausted.
fn read_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut buffer = String::new();
    match io::stdin().read_line(&mut buffer) {
        Ok(0) => None,
        Ok(_) => Some(buffer.trim().to_string()),
        Err(err) => {
            eprintln!("error: failed to read input: {err}");
            None
        }
    }
}

fn add_student<R: StudentRepository>(registry: &mut RegistryService<R>) {
    let Some(student_id) = read_line("Enter student ID: ") else {
        return;
    };
    let Some(name) = read_line("Enter student name: ") else {
        return;
    };

    match registry.add_student(&student_id, &name) {
        Ok(()) => println!("\n[info] student `{name}` has been added."),
        Err(err) => println!("[error] {err}"),
    }
}

fn enroll_student<R: StudentRepository>(registry: &mut RegistryService<R>) {
    let Some(student_id) = read_line("Enter student ID: ") else {
        return;
    };
    let Some(course) = read_line("Enter course name: ") else {
        return;
    };

    match registry.enroll(&student_id, &course) {
        Ok(()) => println!("\n[info] student `{student_id}` is now enrolled in `{course}`."),
        Err(err) => println!("[error] {err}"),
    }
}

fn record_grade<R: StudentRepository>(registry: &mut RegistryService<R>) {
    let Some(student_id) = read_line("Enter student ID: ") else {
        return;
    };
    let Some(course) = read_line("Enter course name: ") else {
        return;
    };
    let Some(grade) = read_line("Enter grade: ") else {
        return;
    };

    match registry.record_grade(&student_id, &course, &grade) {
        Ok(()) => println!("\n[info] grade `{grade}` has been recorded for `{course}`."),
        Err(err) => println!("[error] {err}"),
    }
}

fn view_records<R: StudentRepository>(registry: &RegistryService<R>) {
    let students = registry.list_students();
    if students.is_empty() {
        println!("\n[info] no student records available.");
        return;
    }

    println!("\n--- Student Records ---");
    for student in &students {
        render_student(student);
    }
}

fn render_student(student: &Student) {
    println!();
    println!("Student ID: {}", student.student_id);
    println!("Name: {}", student.name);
    println!("Courses:");
    for (course, grade) in &student.courses {
        match grade {
            Some(grade) => println!("  - {course}: {grade}"),
            None => println!("  - {course}: not graded yet"),
        }
    }
}

fn remove_student<R: StudentRepository>(registry: &mut RegistryService<R>) {
    let Some(student_id) = read_line("Enter student ID to remove: ") else {
        return;
    };

    match registry.remove_student(&student_id) {
        Ok(()) => println!("\n[info] student `{student_id}` has been removed."),
        Err(err) => println!("[error] {err}"),
    }
}

fn rename_student<R: StudentRepository>(registry: &mut RegistryService<R>) {
    let Some(student_id) = read_line("Enter student ID: ") else {
        return;
    };
    let Some(new_name) = read_line("Enter new student name: ") else {
        return;
    };

    match registry.rename_student(&student_id, &new_name) {
        Ok(()) => println!("\n[info] student `{student_id}` has been renamed to `{new_name}`."),
        Err(err) => println!("[error] {err}"),
    }
}

fn view_enrollment<R: StudentRepository>(registry: &RegistryService<R>) {
    let Some(course) = read_line("Enter course name to view enrollment: ") else {
        return;
    };

    let names = registry.students_enrolled_in(&course);
    if names.is_empty() {
        println!("\n[info] no students are enrolled in `{course}`.");
        return;
    }

    println!("\n[info] students enrolled in `{course}`:");
    for name in names {
        println!("  - {name}");
    }
}
