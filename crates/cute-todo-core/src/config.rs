use serde::Deserialize;
use tracing::{
  info,
  warn
};

pub const DEFAULT_STORAGE_KEY: &str =
  "cute-todo-tasks";

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct Config {
  pub storage_key: String,
  pub toast:       ToastTimings,
  pub labels:      Labels,
  pub messages:    Messages
}

impl Default for Config {
  fn default() -> Self {
    Self {
      storage_key: DEFAULT_STORAGE_KEY
        .to_string(),
      toast:       ToastTimings::default(),
      labels:      Labels::default(),
      messages:    Messages::default()
    }
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Deserialize,
)]
#[serde(default)]
pub struct ToastTimings {
  /// How long a toast stays fully visible.
  pub display_ms: u32,
  /// Length of the exit transition before removal.
  pub exit_ms:    u32
}

impl Default for ToastTimings {
  fn default() -> Self {
    Self {
      display_ms: 3_000,
      exit_ms:    300
    }
  }
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct Labels {
  pub title:             String,
  pub input_placeholder: String,
  pub add:               String,
  pub tab_all:           String,
  pub tab_pending:       String,
  pub tab_completed:     String,
  pub empty_state:       String,
  pub mark_complete:     String,
  pub mark_incomplete:   String,
  pub delete:            String,
  pub clear_completed:   String,
  pub clear_all:         String
}

impl Default for Labels {
  fn default() -> Self {
    Self {
      title:             "Cute Todo"
        .to_string(),
      input_placeholder: "What needs doing?"
        .to_string(),
      add:               "Add"
        .to_string(),
      tab_all:           "All"
        .to_string(),
      tab_pending:       "Pending"
        .to_string(),
      tab_completed:     "Completed"
        .to_string(),
      empty_state:       "no tasks"
        .to_string(),
      mark_complete:     "✅ Done"
        .to_string(),
      mark_incomplete:   "🔄 Undo"
        .to_string(),
      delete:            "🗑️ Delete"
        .to_string(),
      clear_completed:   "Clear completed"
        .to_string(),
      clear_all:         "Clear all"
        .to_string()
    }
  }
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct Messages {
  pub confirm_clear_completed: String,
  pub confirm_clear_all:       String,
  pub cleared_completed:       String,
  pub cleared_all:             String,
  pub nothing_completed:       String,
  pub nothing_at_all:          String,
  pub save_failed:             String
}

impl Default for Messages {
  fn default() -> Self {
    Self {
      confirm_clear_completed:
        "Clear all completed tasks?"
          .to_string(),
      confirm_clear_all:
        "⚠️ Clear every task? This \
         cannot be undone!"
          .to_string(),
      cleared_completed:
        "Cleared all completed tasks!"
          .to_string(),
      cleared_all:
        "Cleared all tasks!".to_string(),
      nothing_completed:
        "No completed tasks to clear!"
          .to_string(),
      nothing_at_all:
        "No tasks to clear!".to_string(),
      save_failed:
        "Could not save tasks to this \
         browser."
          .to_string()
    }
  }
}

impl Config {
  pub fn from_toml_str(
    raw: &str
  ) -> anyhow::Result<Self> {
    let mut cfg: Config =
      toml::from_str(raw)?;
    if cfg.storage_key.trim().is_empty()
    {
      warn!(
        "empty storage_key in config; \
         using default"
      );
      cfg.storage_key =
        DEFAULT_STORAGE_KEY.to_string();
    }
    Ok(cfg)
  }

  /// Parses `raw`, falling back to the
  /// defaults when it does not parse.
  #[tracing::instrument(skip(raw))]
  pub fn load_or_default(
    raw: &str
  ) -> Self {
    match Self::from_toml_str(raw) {
      | Ok(cfg) => {
        info!(
          storage_key = %cfg.storage_key,
          display_ms = cfg.toast.display_ms,
          exit_ms = cfg.toast.exit_ms,
          "loaded config"
        );
        cfg
      }
      | Err(err) => {
        warn!(
          error = %err,
          "failed parsing config; using \
           defaults"
        );
        Self::default()
      }
    }
  }
}
