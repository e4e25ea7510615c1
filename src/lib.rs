pub mod shell;
pub mod store;
pub mod task;

pub use store::TaskStore;
pub use task::Task;
