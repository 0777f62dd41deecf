pub mod board;
pub mod column;
pub mod task_card;
pub mod task_editor;

pub use board::KanbanBoard;
pub use column::KanbanColumn;
pub use task_card::TaskCard;
pub use task_editor::TaskEditor;
