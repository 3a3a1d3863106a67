//! CLI command handlers, one per file.

mod add;
mod delete;
mod link;
mod list;
mod sort_key;
mod update;

pub use add::run_add;
pub use delete::run_delete;
pub use link::run_link;
pub use list::run_list;
pub use sort_key::run_sort_key;
pub use update::run_update;

#[cfg(test)]
mod tests;
