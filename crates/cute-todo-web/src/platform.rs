use anyhow::anyhow;
use cute_todo_core::confirm::Confirm;
use cute_todo_core::storage::{
  KeyValueStore,
  MemoryStorage
};

/// `window.localStorage`, or an
/// in-memory stand-in when the browser
/// refuses access (private mode, file://).
pub struct BrowserStorage {
  local:    Option<web_sys::Storage>,
  fallback: MemoryStorage
}

impl BrowserStorage {
  pub fn open() -> Self {
    let local = web_sys::window()
      .and_then(|window| {
        window
          .local_storage()
          .ok()
          .flatten()
      });

    if local.is_none() {
      tracing::warn!(
        "localStorage unavailable; \
         tasks will not survive a \
         reload"
      );
    }

    Self {
      local,
      fallback: MemoryStorage::new()
    }
  }
}

impl KeyValueStore for BrowserStorage {
  fn get(
    &self,
    key: &str
  ) -> Option<String> {
    match &self.local {
      | Some(storage) => {
        storage
          .get_item(key)
          .ok()
          .flatten()
      }
      | None => self.fallback.get(key)
    }
  }

  fn set(
    &mut self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    match &self.local {
      | Some(storage) => {
        storage
          .set_item(key, value)
          .map_err(|err| {
            anyhow!(
              "localStorage rejected \
               write: {err:?}"
            )
          })
      }
      | None => {
        self.fallback.set(key, value)
      }
    }
  }
}

/// `window.confirm`; a missing window
/// counts as "no".
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
  fn confirm(
    &mut self,
    message: &str
  ) -> bool {
    web_sys::window()
      .and_then(|window| {
        window
          .confirm_with_message(message)
          .ok()
      })
      .unwrap_or(false)
  }
}
