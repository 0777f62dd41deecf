pub mod column;
pub mod nav;
pub mod task;

pub use column::{BoardConfig, ColumnDef};
pub use nav::{AppView, NavItem, NavState};
pub use task::{format_short_date, Priority, Status, Task, TaskDraft};
