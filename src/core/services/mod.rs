pub mod board_state;
pub mod drag;
pub mod seed;

pub use board_state::{BoardChange, BoardState, EditorSession};
pub use drag::{DragPayload, DRAG_MIME};
pub use seed::{default_nav, sample_tasks, APP_TITLE};
