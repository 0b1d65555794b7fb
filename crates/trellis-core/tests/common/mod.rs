use trellis_core::{params::NewProject, Board, Project};

/// Helper function to create a board holding a single project
pub fn create_test_board() -> (Board, Project) {
    let mut board = Board::new();
    let project = board
        .add_project(&NewProject {
            name: "P1".to_string(),
            description: String::new(),
        })
        .expect("Failed to create project");
    (board, project)
}
