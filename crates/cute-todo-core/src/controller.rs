use tracing::{
  debug,
  error,
  info
};

use crate::clock::Clock;
use crate::config::Config;
use crate::confirm::Confirm;
use crate::status::{
  StatusKind,
  StatusMessage,
  ToastId,
  Toasts
};
use crate::storage::KeyValueStore;
use crate::store::{
  ClearOutcome,
  TaskStore
};
use crate::task::TaskId;
use crate::view::{
  self,
  BoardView,
  Tab
};

/// Everything the UI can ask the app to
/// do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
  Submit(String),
  Toggle(TaskId),
  Delete(TaskId),
  SwitchTab(Tab),
  ClearCompleted,
  ClearAll,
  /// The toast's display period is over.
  ToastElapsed(ToastId),
  /// The toast's exit transition is over.
  ToastRemove(ToastId)
}

/// Work the frontend must carry out after
/// a dispatch, besides re-rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
  ClearInput,
  /// Send `Event::ToastElapsed(id)` after
  /// `delay_ms`.
  DismissToastAfter {
    id:       ToastId,
    delay_ms: u32
  },
  /// Send `Event::ToastRemove(id)` after
  /// `delay_ms`.
  RemoveToastAfter {
    id:       ToastId,
    delay_ms: u32
  }
}

pub struct TodoApp<S, C> {
  store:      TaskStore<S>,
  confirm:    C,
  config:     Config,
  active_tab: Tab,
  toasts:     Toasts
}

impl<S, C> TodoApp<S, C>
where
  S: KeyValueStore,
  C: Confirm
{
  #[tracing::instrument(skip_all)]
  pub fn new(
    storage: S,
    confirm: C,
    config: Config
  ) -> Self {
    let store = TaskStore::open(
      storage,
      &config.storage_key
    );
    Self::from_store(
      store, confirm, config
    )
  }

  pub fn with_clock(
    storage: S,
    confirm: C,
    config: Config,
    clock: Box<dyn Clock>
  ) -> Self {
    let store =
      TaskStore::open_with_clock(
        storage,
        &config.storage_key,
        clock
      );
    Self::from_store(
      store, confirm, config
    )
  }

  fn from_store(
    store: TaskStore<S>,
    confirm: C,
    config: Config
  ) -> Self {
    info!(
      tasks = store.len(),
      "todo app ready"
    );
    Self {
      store,
      confirm,
      config,
      active_tab: Tab::default(),
      toasts: Toasts::default()
    }
  }

  pub fn store(&self) -> &TaskStore<S> {
    &self.store
  }

  pub fn confirm(&self) -> &C {
    &self.confirm
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  pub fn active_tab(&self) -> Tab {
    self.active_tab
  }

  pub fn toasts(&self) -> &Toasts {
    &self.toasts
  }

  pub fn view(&self) -> BoardView {
    view::render(
      self.store.list(),
      self.active_tab,
      &self.config.labels
    )
  }

  #[tracing::instrument(skip(self))]
  pub fn dispatch(
    &mut self,
    event: Event
  ) -> Vec<Effect> {
    let mut effects = vec![];

    match event {
      | Event::Submit(text) => {
        let result =
          self.store.add(&text);
        effects.push(Effect::ClearInput);
        if let Err(err) = result {
          effects
            .push(self.save_failed(err));
        }
      }
      | Event::Toggle(id) => {
        if let Err(err) =
          self.store.toggle(id)
        {
          effects
            .push(self.save_failed(err));
        }
      }
      | Event::Delete(id) => {
        if let Err(err) =
          self.store.delete(id)
        {
          effects
            .push(self.save_failed(err));
        }
      }
      | Event::SwitchTab(tab) => {
        debug!(
          from = %self.active_tab,
          to = %tab,
          "switching tab"
        );
        self.active_tab = tab;
      }
      | Event::ClearCompleted => {
        let result =
          self.store.clear_completed(
            &mut self.confirm,
            &self.config.messages
              .confirm_clear_completed
          );
        let messages =
          &self.config.messages;
        let status = match result {
          | Ok(outcome) => {
            clear_status(
              outcome,
              &messages.cleared_completed,
              &messages.nothing_completed
            )
          }
          | Err(err) => {
            Some(save_failed_status(
              err,
              &messages.save_failed
            ))
          }
        };
        effects.extend(
          status.map(|s| self.notify(s))
        );
      }
      | Event::ClearAll => {
        let result =
          self.store.clear_all(
            &mut self.confirm,
            &self.config.messages
              .confirm_clear_all
          );
        let messages =
          &self.config.messages;
        let status = match result {
          | Ok(outcome) => {
            clear_status(
              outcome,
              &messages.cleared_all,
              &messages.nothing_at_all
            )
          }
          | Err(err) => {
            Some(save_failed_status(
              err,
              &messages.save_failed
            ))
          }
        };
        effects.extend(
          status.map(|s| self.notify(s))
        );
      }
      | Event::ToastElapsed(id) => {
        if self.toasts.begin_exit(id) {
          effects.push(
            Effect::RemoveToastAfter {
              id,
              delay_ms: self
                .config
                .toast
                .exit_ms
            }
          );
        }
      }
      | Event::ToastRemove(id) => {
        self.toasts.remove(id);
      }
    }

    effects
  }

  /// Shows a toast and returns the timer
  /// the frontend has to start for it.
  pub fn notify(
    &mut self,
    message: StatusMessage
  ) -> Effect {
    let id = self.toasts.push(message);
    Effect::DismissToastAfter {
      id,
      delay_ms: self
        .config
        .toast
        .display_ms
    }
  }

  fn save_failed(
    &mut self,
    err: anyhow::Error
  ) -> Effect {
    let status = save_failed_status(
      err,
      &self.config.messages.save_failed
    );
    self.notify(status)
  }
}

fn clear_status(
  outcome: ClearOutcome,
  cleared: &str,
  nothing: &str
) -> Option<StatusMessage> {
  match outcome {
    | ClearOutcome::NothingToClear => {
      Some(StatusMessage::new(
        StatusKind::Info,
        nothing
      ))
    }
    | ClearOutcome::Declined => None,
    | ClearOutcome::Cleared(_) => {
      Some(StatusMessage::new(
        StatusKind::Success,
        cleared
      ))
    }
  }
}

fn save_failed_status(
  err: anyhow::Error,
  text: &str
) -> StatusMessage {
  error!(
    error = %format!("{err:#}"),
    "failed to persist tasks"
  );
  StatusMessage::new(
    StatusKind::Error,
    text
  )
}
