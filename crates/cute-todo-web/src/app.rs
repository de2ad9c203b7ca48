use std::cell::RefCell;
use std::rc::Rc;

use cute_todo_core::config::Config;
use cute_todo_core::{
  Effect,
  Event,
  Tab,
  TaskId,
  TodoApp
};
use gloo::timers::callback::Timeout;
use yew::{
  Callback,
  Html,
  MouseEvent,
  function_component,
  html,
  use_force_update,
  use_mut_ref,
  use_state
};

use crate::components::{
  BulkActions,
  TabBar,
  TaskForm,
  TaskList,
  ToastStack
};
use crate::platform::{
  BrowserConfirm,
  BrowserStorage
};

const CONFIG_TOML: &str =
  include_str!("../cute-todo.toml");

type WebApp =
  TodoApp<BrowserStorage, BrowserConfirm>;

/// Routes UI events into the app and
/// carries out the effects it returns.
#[derive(Clone)]
struct Dispatcher {
  app:            Rc<RefCell<WebApp>>,
  on_change:      Callback<()>,
  on_clear_input: Callback<()>
}

impl Dispatcher {
  fn send(&self, event: Event) {
    let effects =
      self.app.borrow_mut().dispatch(event);

    for effect in effects {
      match effect {
        | Effect::ClearInput => {
          self.on_clear_input.emit(())
        }
        | Effect::DismissToastAfter {
          id,
          delay_ms
        } => {
          self.schedule(
            delay_ms,
            Event::ToastElapsed(id)
          )
        }
        | Effect::RemoveToastAfter {
          id,
          delay_ms
        } => {
          self.schedule(
            delay_ms,
            Event::ToastRemove(id)
          )
        }
      }
    }

    self.on_change.emit(());
  }

  fn schedule(
    &self,
    delay_ms: u32,
    event: Event
  ) {
    let dispatcher = self.clone();
    Timeout::new(delay_ms, move || {
      dispatcher.send(event)
    })
    .forget();
  }
}

#[function_component(App)]
pub fn app() -> Html {
  let app = use_mut_ref(|| {
    let config =
      Config::load_or_default(
        CONFIG_TOML
      );
    TodoApp::new(
      BrowserStorage::open(),
      BrowserConfirm,
      config
    )
  });
  let force_update = use_force_update();
  let draft = use_state(String::new);

  let dispatcher = Dispatcher {
    app:            app.clone(),
    on_change:      Callback::from(
      move |_: ()| {
        force_update.force_update()
      }
    ),
    on_clear_input: {
      let draft = draft.clone();
      Callback::from(move |_: ()| {
        draft.set(String::new())
      })
    }
  };

  let on_input = {
    let draft = draft.clone();
    Callback::from(move |value: String| {
      draft.set(value)
    })
  };
  let on_submit = {
    let dispatcher = dispatcher.clone();
    Callback::from(move |text: String| {
      dispatcher.send(Event::Submit(text))
    })
  };
  let on_select_tab = {
    let dispatcher = dispatcher.clone();
    Callback::from(move |tab: Tab| {
      dispatcher
        .send(Event::SwitchTab(tab))
    })
  };
  let on_toggle = {
    let dispatcher = dispatcher.clone();
    Callback::from(move |id: TaskId| {
      dispatcher.send(Event::Toggle(id))
    })
  };
  let on_delete = {
    let dispatcher = dispatcher.clone();
    Callback::from(move |id: TaskId| {
      dispatcher.send(Event::Delete(id))
    })
  };
  let on_clear_completed = {
    let dispatcher = dispatcher.clone();
    Callback::from(
      move |_: MouseEvent| {
        dispatcher
          .send(Event::ClearCompleted)
      }
    )
  };
  let on_clear_all = {
    let dispatcher = dispatcher.clone();
    Callback::from(
      move |_: MouseEvent| {
        dispatcher.send(Event::ClearAll)
      }
    )
  };

  let (board, toasts, labels) = {
    let app = app.borrow();
    (
      app.view(),
      app.toasts().items().to_vec(),
      app.config().labels.clone()
    )
  };

  html! {
      <div class="todo-app">
          <h1 class="title">{ labels.title.clone() }</h1>
          <TaskForm
              value={(*draft).clone()}
              placeholder={labels.input_placeholder.clone()}
              submit_label={labels.add.clone()}
              on_input={on_input}
              on_submit={on_submit}
          />
          <TabBar tabs={board.tabs.clone()} on_select={on_select_tab} />
          {
              for board.lists.iter().cloned().map(|list| html! {
                  <TaskList
                      list={list}
                      on_toggle={on_toggle.clone()}
                      on_delete={on_delete.clone()}
                  />
              })
          }
          <BulkActions
              clear_completed_label={labels.clear_completed.clone()}
              clear_all_label={labels.clear_all.clone()}
              on_clear_completed={on_clear_completed}
              on_clear_all={on_clear_all}
          />
          <ToastStack toasts={toasts} />
      </div>
  }
}
