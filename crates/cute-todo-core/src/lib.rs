pub mod clock;
pub mod config;
pub mod confirm;
pub mod controller;
pub mod status;
pub mod storage;
pub mod store;
pub mod task;
pub mod view;

pub use controller::{
  Effect,
  Event,
  TodoApp
};
pub use task::{
  Task,
  TaskId
};
pub use view::Tab;
