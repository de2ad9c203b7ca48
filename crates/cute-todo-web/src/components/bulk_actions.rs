use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct BulkActionsProps {
  pub clear_completed_label: String,
  pub clear_all_label:       String,
  pub on_clear_completed:
    Callback<MouseEvent>,
  pub on_clear_all:
    Callback<MouseEvent>
}

#[function_component(BulkActions)]
pub fn bulk_actions(
  props: &BulkActionsProps
) -> Html {
  html! {
      <div class="bulk-actions">
          <button class="btn ok" onclick={props.on_clear_completed.clone()}>{ &props.clear_completed_label }</button>
          <button class="btn danger" onclick={props.on_clear_all.clone()}>{ &props.clear_all_label }</button>
      </div>
  }
}
