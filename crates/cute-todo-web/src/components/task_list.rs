use cute_todo_core::TaskId;
use cute_todo_core::view::{
  ListEntry,
  ListView
};
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

use super::TaskListRow;

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub list:      ListView,
  pub on_toggle: Callback<TaskId>,
  pub on_delete: Callback<TaskId>
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  let list = &props.list;

  html! {
      <div
          id={list.container_id()}
          class={classes!("task-list-container", list.active.then_some("active"))}
      >
          <ul class="task-list" id={format!("{}-list", list.tab)}>
              {
                  for list.entries.iter().map(|entry| match entry {
                      | ListEntry::Row(row) => html! {
                          <TaskListRow
                              key={row.id.to_string()}
                              row={row.clone()}
                              on_toggle={props.on_toggle.clone()}
                              on_delete={props.on_delete.clone()}
                          />
                      },
                      | ListEntry::Placeholder(text) => html! {
                          <li class="empty-state">{ text }</li>
                      }
                  })
              }
          </ul>
      </div>
  }
}
