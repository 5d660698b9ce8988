pub mod display;
pub mod task_ops;
