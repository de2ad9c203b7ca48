mod bulk_actions;
mod tab_bar;
mod task_form;
mod task_list;
mod task_list_row;
mod toast_stack;

pub use bulk_actions::BulkActions;
pub use tab_bar::TabBar;
pub use task_form::TaskForm;
pub use task_list::TaskList;
pub use task_list_row::TaskListRow;
pub use toast_stack::ToastStack;
