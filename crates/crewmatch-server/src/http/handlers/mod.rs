//! HTTP request handlers.

mod assignments;
mod health;
mod selection;
mod tasks;

pub use assignments::commit_assignment;
pub use health::{health_check, metrics_handler};
pub use selection::{
    clear_selection, get_selection, get_summary, remove_selection, toggle_selection,
};
pub use tasks::{list_tasks, recommend_workers, search_tasks};
