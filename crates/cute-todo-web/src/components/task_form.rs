use yew::{
  Callback,
  Html,
  InputEvent,
  Properties,
  SubmitEvent,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskFormProps {
  pub value:        String,
  pub placeholder:  String,
  pub submit_label: String,
  pub on_input:     Callback<String>,
  pub on_submit:    Callback<String>
}

#[function_component(TaskForm)]
pub fn task_form(
  props: &TaskFormProps
) -> Html {
  let oninput = {
    let on_input = props.on_input.clone();
    move |e: InputEvent| {
      let input: web_sys::HtmlInputElement =
        e.target_unchecked_into();
      on_input.emit(input.value());
    }
  };
  let onsubmit = {
    let on_submit =
      props.on_submit.clone();
    let value = props.value.clone();
    move |e: SubmitEvent| {
      e.prevent_default();
      on_submit.emit(value.clone());
    }
  };

  html! {
      <form id="todo-form" {onsubmit}>
          <input
              id="new-task"
              type="text"
              autocomplete="off"
              placeholder={props.placeholder.clone()}
              value={props.value.clone()}
              {oninput}
          />
          <button type="submit" class="btn add-btn">{ &props.submit_label }</button>
      </form>
  }
}
