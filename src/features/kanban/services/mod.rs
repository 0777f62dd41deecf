pub mod notify;

pub use notify::{confirm_delete, log_value, BoardCallbacks};
