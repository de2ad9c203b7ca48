use cute_todo_core::TaskId;
use cute_todo_core::view::TaskRow;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
  pub row:       TaskRow,
  pub on_toggle: Callback<TaskId>,
  pub on_delete: Callback<TaskId>
}

#[function_component(TaskListRow)]
pub fn task_list_row(
  props: &TaskListRowProps
) -> Html {
  let id = props.row.id;
  let on_toggle =
    props.on_toggle.clone();
  let on_delete =
    props.on_delete.clone();

  html! {
      <li class={props.row.class} data-id={id.to_string()}>
          <span class="task-text">{ &props.row.text }</span>
          <div class="task-buttons">
              <button
                  class={props.row.toggle_class}
                  onclick={move |_| on_toggle.emit(id)}
              >
                  { &props.row.toggle_label }
              </button>
              <button
                  class="task-btn delete-btn"
                  onclick={move |_| on_delete.emit(id)}
              >
                  { &props.row.delete_label }
              </button>
          </div>
      </li>
  }
}
