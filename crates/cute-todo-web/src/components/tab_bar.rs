use cute_todo_core::Tab;
use cute_todo_core::view::TabButton;
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TabBarProps {
  pub tabs:      Vec<TabButton>,
  pub on_select: Callback<Tab>
}

#[function_component(TabBar)]
pub fn tab_bar(
  props: &TabBarProps
) -> Html {
  html! {
      <div class="tabs">
          {
              for props.tabs.iter().map(|button| {
                  let tab = button.tab;
                  let on_select = props.on_select.clone();
                  html! {
                      <button
                          class={classes!("tab-btn", button.active.then_some("active"))}
                          data-tab={tab.as_str()}
                          onclick={move |_| on_select.emit(tab)}
                      >
                          { &button.label }
                          <span class="tab-count">{ button.count }</span>
                      </button>
                  }
              })
          }
      </div>
  }
}
