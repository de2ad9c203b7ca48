use cute_todo_core::status::Toast;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ToastStackProps {
  pub toasts: Vec<Toast>
}

#[function_component(ToastStack)]
pub fn toast_stack(
  props: &ToastStackProps
) -> Html {
  if props.toasts.is_empty() {
    return html! {};
  }

  html! {
      <div class="toast-stack">
          {
              for props.toasts.iter().map(|toast| html! {
                  <div key={toast.id.0} class={toast.css_class()}>
                      { &toast.message.text }
                  </div>
              })
          }
      </div>
  }
}
