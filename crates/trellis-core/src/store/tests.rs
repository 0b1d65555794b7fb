//! Tests for the store module.

use std::io::Write;

use tempfile::NamedTempFile;

use super::*;
use crate::{
    error::BoardError,
    models::{Priority, TaskFilter, TaskStatus},
    params::{NewProject, NewTask},
};

/// Helper function to create a board with one project
fn create_test_board() -> (Board, Project) {
    let mut board = Board::new();
    let project = board
        .add_project(&NewProject {
            name: "Test Project".to_string(),
            description: "Test Description".to_string(),
        })
        .expect("Failed to create project");
    (board, project)
}

fn write_seed(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write seed file");
    file
}

#[test]
fn test_add_project_assigns_id_date_and_counter() {
    let (board, project) = create_test_board();

    assert!(project.id > 0);
    assert_eq!(project.created_at, Board::today());
    assert_eq!(project.tasks_count, 0);
    assert_eq!(board.get_projects(), &[project]);
}

#[test]
fn test_add_project_rejects_blank_name() {
    let mut board = Board::new();

    let err = board
        .add_project(&NewProject::named("   "))
        .expect_err("Blank name should be rejected");

    assert!(matches!(err, BoardError::InvalidInput { ref field, .. } if field == "name"));
    assert!(board.get_projects().is_empty());
}

#[test]
fn test_add_task_defaults() {
    let (mut board, project) = create_test_board();

    let task = board
        .add_task(&NewTask::titled(project.id, "Default task"))
        .expect("Failed to add task");

    assert_eq!(task.status, TaskStatus::Todo);
    assert_eq!(task.priority, Priority::Medium);
    assert_eq!(task.due_date, None);
    assert_eq!(task.created_at, Board::today());
    assert_ne!(task.id, project.id);
}

#[test]
fn test_add_task_rejects_unknown_project() {
    let (mut board, project) = create_test_board();

    let err = board
        .add_task(&NewTask::titled(project.id + 1_000, "Orphan"))
        .expect_err("Unknown project should be rejected");

    assert!(matches!(err, BoardError::ProjectNotFound { id } if id == project.id + 1_000));
    assert!(board.get_tasks().is_empty());
}

#[test]
fn test_add_task_rejects_blank_title() {
    let (mut board, project) = create_test_board();

    assert!(board.add_task(&NewTask::titled(project.id, "")).is_err());
    assert!(board.get_tasks().is_empty());
}

#[test]
fn test_update_project_keeps_creation_date() {
    let (mut board, project) = create_test_board();
    let mut edited = project.clone();
    edited.name = "Renamed".to_string();
    edited.created_at = jiff::civil::date(1999, 1, 1);

    let updated = board
        .update_project(edited)
        .expect("Failed to update project")
        .expect("Project should exist");

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.created_at, project.created_at);
    assert_eq!(board.get_project(project.id), Some(&updated));
}

#[test]
fn test_update_task_rejects_move_to_missing_project() {
    let (mut board, project) = create_test_board();
    let task = board
        .add_task(&NewTask::titled(project.id, "Stay put"))
        .expect("Failed to add task");

    let mut edited = task.clone();
    edited.project_id = 42;

    assert!(matches!(
        board.update_task(edited),
        Err(BoardError::ProjectNotFound { id: 42 })
    ));
    assert_eq!(board.get_task(task.id), Some(&task));
}

#[test]
fn test_update_task_can_reassign_project() {
    let (mut board, first) = create_test_board();
    let second = board
        .add_project(&NewProject::named("Second"))
        .expect("Failed to create project");
    let task = board
        .add_task(&NewTask::titled(first.id, "Travelling task"))
        .expect("Failed to add task");

    let mut edited = task.clone();
    edited.project_id = second.id;
    board
        .update_task(edited)
        .expect("Failed to update task")
        .expect("Task should exist");

    assert!(board.get_tasks_by_project(first.id).is_empty());
    assert_eq!(board.get_tasks_by_project(second.id).len(), 1);
}

#[test]
fn test_update_with_unknown_id_ignores_blank_text() {
    let (mut board, project) = create_test_board();
    let task = board
        .add_task(&NewTask::titled(project.id, "Real task"))
        .expect("Failed to add task");
    let before = board.snapshot().clone();

    let mut ghost_project = project.clone();
    ghost_project.id = 9_999;
    ghost_project.name = "  ".to_string();
    let mut ghost_task = task.clone();
    ghost_task.id = 9_999;
    ghost_task.title = String::new();

    assert!(matches!(board.update_project(ghost_project), Ok(None)));
    assert!(matches!(board.update_task(ghost_task), Ok(None)));
    assert_eq!(board.snapshot(), &before);
}

#[test]
fn test_update_existing_rejects_blank_text() {
    let (mut board, project) = create_test_board();
    let task = board
        .add_task(&NewTask::titled(project.id, "Real task"))
        .expect("Failed to add task");

    let mut blank_project = project.clone();
    blank_project.name = " ".to_string();
    let mut blank_task = task.clone();
    blank_task.title = " ".to_string();

    assert!(matches!(
        board.update_project(blank_project),
        Err(BoardError::InvalidInput { ref field, .. }) if field == "name"
    ));
    assert!(matches!(
        board.update_task(blank_task),
        Err(BoardError::InvalidInput { ref field, .. }) if field == "title"
    ));
    assert_eq!(board.get_project(project.id), Some(&project));
    assert_eq!(board.get_task(task.id), Some(&task));
}

#[test]
fn test_move_task_returns_moved_task() {
    let (mut board, project) = create_test_board();
    let task = board
        .add_task(&NewTask::titled(project.id, "Mover"))
        .expect("Failed to add task");

    let moved = board
        .move_task(task.id, TaskStatus::Review)
        .expect("Task should exist");

    assert_eq!(moved.status, TaskStatus::Review);
    assert!(board.move_task(task.id + 1_000, TaskStatus::Done).is_none());
}

#[test]
fn test_delete_project_reports_removed_tasks() {
    let (mut board, project) = create_test_board();
    for title in ["One", "Two"] {
        board
            .add_task(&NewTask::titled(project.id, title))
            .expect("Failed to add task");
    }

    let removal = board
        .delete_project(project.id)
        .expect("Project should exist");

    assert_eq!(removal.project, project);
    assert_eq!(
        removal.tasks.iter().map(|t| t.title.as_str()).collect::<Vec<_>>(),
        vec!["One", "Two"]
    );
    assert!(board.get_tasks().is_empty());
}

#[test]
fn test_columns_follow_workflow_order() {
    let board = Board::with_sample_data();

    let columns = board.get_columns(1, &TaskFilter::default());

    assert_eq!(
        columns.iter().map(|c| c.status).collect::<Vec<_>>(),
        TaskStatus::ALL.to_vec()
    );
    assert_eq!(columns[0].tasks[0].title, "Implement Navigation Menu");
    assert_eq!(columns[1].tasks[0].title, "Design Homepage Layout");
    assert!(columns[2].tasks.is_empty());
    assert!(columns[3].tasks.is_empty());
}

#[test]
fn test_columns_search_and_status_filter() {
    let board = Board::with_sample_data();

    let by_assignee = board.get_columns(1, &TaskFilter::search("jane"));
    let titles: Vec<_> = by_assignee
        .iter()
        .flat_map(|c| c.tasks.iter().map(|t| t.title.as_str()))
        .collect();
    assert_eq!(titles, vec!["Implement Navigation Menu"]);

    let only_done = board.get_columns(2, &TaskFilter::status(TaskStatus::Done));
    assert_eq!(only_done[3].tasks.len(), 1);
    assert!(only_done[2].tasks.is_empty(), "REVIEW column should be hidden");
}

#[test]
fn test_stats_are_derived_from_tasks() {
    let mut board = Board::with_sample_data();

    let stats = board.get_stats();
    assert_eq!(stats.total_projects, 3);
    assert_eq!(stats.total_tasks(), 4);
    assert_eq!(stats.completed_tasks(), 1);
    assert_eq!(stats.in_progress_tasks(), 1);

    board.delete_project(2);
    let stats = board.get_stats();
    assert_eq!(stats.total_projects, 2);
    assert_eq!(stats.total_tasks(), 2);
    assert_eq!(stats.completed_tasks(), 0);
}

#[test]
fn test_project_summary_counts() {
    let board = Board::with_sample_data();

    let summaries = board.get_project_summaries();
    assert_eq!(summaries.len(), 3);
    assert_eq!(summaries[1].name, "Mobile App Development");
    assert_eq!(summaries[1].total_tasks(), 2);
    assert_eq!(summaries[1].counts.review, 1);
    assert_eq!(summaries[2].total_tasks(), 0);
    assert!(board.get_project_summary(99).is_none());
}

#[test]
fn test_sample_data_does_not_collide_with_new_ids() {
    let mut board = Board::with_sample_data();

    let project = board
        .add_project(&NewProject::named("Fresh"))
        .expect("Failed to create project");

    assert!(project.id > 4);
}

#[test]
fn test_from_state_rejects_orphan_tasks() {
    let mut state = BoardState::sample();
    state.projects.remove(0);

    let err = Board::from_state(state).expect_err("Orphan tasks should be rejected");
    assert!(err.to_string().contains("missing project 1"));
}

#[test]
fn test_from_state_rejects_duplicate_ids() {
    let mut state = BoardState::sample();
    state.tasks[1].id = state.tasks[0].id;

    assert!(Board::from_state(state).is_err());
}

#[test]
fn test_builder_loads_seed_file() {
    let seed = write_seed(
        r#"{
            "projects": [
                {"id": 10, "name": "Seeded", "createdAt": "2024-03-01"}
            ],
            "tasks": [
                {"id": 11, "projectId": 10, "title": "From seed", "status": "REVIEW",
                 "priority": "HIGH", "createdAt": "2024-03-02", "dueDate": "2024-04-01"}
            ]
        }"#,
    );

    let board = BoardBuilder::new()
        .with_seed_file(Some(seed.path()))
        .build()
        .expect("Failed to load seed");

    assert_eq!(board.get_projects()[0].name, "Seeded");
    assert_eq!(board.get_projects()[0].tasks_count, 0);
    let task = board.get_task(11).expect("Seeded task should exist");
    assert_eq!(task.status, TaskStatus::Review);
    assert_eq!(task.priority, Priority::High);
    assert_eq!(task.assignee, "");
}

#[test]
fn test_builder_reports_missing_seed_file() {
    let result = BoardBuilder::new()
        .with_seed_file(Some("/definitely/not/here/seed.json"))
        .build();

    assert!(matches!(result, Err(BoardError::FileSystem { .. })));
}

#[test]
fn test_builder_reports_malformed_seed() {
    let seed = write_seed("{ not json");

    let result = BoardBuilder::new().with_seed_file(Some(seed.path())).build();

    assert!(matches!(result, Err(BoardError::Serialization { .. })));
}

#[test]
fn test_builder_rejects_seed_file_with_sample_data() {
    let result = BoardBuilder::new()
        .with_seed_file(Some("seed.json"))
        .with_sample_data(true)
        .build();

    assert!(matches!(result, Err(BoardError::Configuration { .. })));
}

#[test]
fn test_builder_sample_and_empty() {
    let sample = BoardBuilder::new()
        .without_default_seed()
        .with_sample_data(true)
        .build()
        .expect("Failed to build sample board");
    assert_eq!(sample.get_projects().len(), 3);

    let empty = BoardBuilder::new()
        .without_default_seed()
        .build()
        .expect("Failed to build empty board");
    assert!(empty.get_projects().is_empty());
    assert!(empty.get_tasks().is_empty());
}
