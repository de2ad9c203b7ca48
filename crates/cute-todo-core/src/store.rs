use std::collections::HashSet;

use anyhow::Context;
use tracing::{debug, info, warn};

use crate::clock::{Clock, IdAllocator, SystemClock};
use crate::confirm::Confirm;
use crate::storage::KeyValueStore;
use crate::task::{Task, TaskId, normalize_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// Nothing matched; no prompt was shown.
    NothingToClear,
    Declined,
    Cleared(usize),
}

pub fn encode_tasks(tasks: &[Task]) -> anyhow::Result<String> {
    serde_json::to_string(tasks).context("failed to serialize tasks")
}

/// Decodes a persisted slot. Anything unparsable counts as an empty list, and
/// later entries repeating an earlier id are dropped.
pub fn decode_tasks(raw: &str) -> Vec<Task> {
    let parsed: Vec<Task> = match serde_json::from_str(raw) {
        Ok(tasks) => tasks,
        Err(err) => {
            warn!(error = %err, "stored tasks are malformed; starting empty");
            return vec![];
        }
    };

    let mut seen = HashSet::with_capacity(parsed.len());
    let before = parsed.len();
    let tasks: Vec<Task> = parsed.into_iter().filter(|task| seen.insert(task.id)).collect();
    if tasks.len() != before {
        warn!(
            dropped = before - tasks.len(),
            "dropped stored tasks with duplicate ids"
        );
    }
    tasks
}

pub struct TaskStore<S> {
    storage: S,
    key: String,
    clock: Box<dyn Clock>,
    ids: IdAllocator,
    tasks: Vec<Task>,
}

impl<S: KeyValueStore> TaskStore<S> {
    pub fn open(storage: S, key: &str) -> Self {
        Self::open_with_clock(storage, key, Box::new(SystemClock))
    }

    #[tracing::instrument(skip(storage, clock))]
    pub fn open_with_clock(storage: S, key: &str, clock: Box<dyn Clock>) -> Self {
        let mut store = Self {
            storage,
            key: key.to_string(),
            clock,
            ids: IdAllocator::default(),
            tasks: vec![],
        };
        store.restore();
        store
    }

    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn pending_count(&self) -> usize {
        self.tasks.iter().filter(|task| !task.completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Appends a new pending task. Blank text is ignored and yields `None`.
    #[tracing::instrument(skip(self, raw))]
    pub fn add(&mut self, raw: &str) -> anyhow::Result<Option<TaskId>> {
        let Some(text) = normalize_text(raw) else {
            debug!("ignoring blank task text");
            return Ok(None);
        };

        let now = self.clock.now();
        let id = self.ids.next(now).context("failed to allocate task id")?;
        self.tasks.push(Task::new_pending(id, text, now));
        info!(%id, total = self.tasks.len(), "added task");

        self.persist()?;
        Ok(Some(id))
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    pub fn toggle(&mut self, id: TaskId) -> anyhow::Result<bool> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            debug!("toggle for unknown task ignored");
            return Ok(false);
        };
        task.toggle();
        info!(completed = task.completed, "toggled task");

        self.persist()?;
        Ok(true)
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    pub fn delete(&mut self, id: TaskId) -> anyhow::Result<bool> {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            debug!("delete for unknown task ignored");
            return Ok(false);
        }
        info!(total = self.tasks.len(), "deleted task");

        self.persist()?;
        Ok(true)
    }

    #[tracing::instrument(skip(self, confirm, prompt))]
    pub fn clear_completed(
        &mut self,
        confirm: &mut dyn Confirm,
        prompt: &str,
    ) -> anyhow::Result<ClearOutcome> {
        let completed = self.completed_count();
        if completed == 0 {
            return Ok(ClearOutcome::NothingToClear);
        }
        if !confirm.confirm(prompt) {
            info!(completed, "clear completed declined");
            return Ok(ClearOutcome::Declined);
        }

        self.tasks.retain(|task| !task.completed);
        info!(removed = completed, remaining = self.tasks.len(), "cleared completed tasks");

        self.persist()?;
        Ok(ClearOutcome::Cleared(completed))
    }

    #[tracing::instrument(skip(self, confirm, prompt))]
    pub fn clear_all(
        &mut self,
        confirm: &mut dyn Confirm,
        prompt: &str,
    ) -> anyhow::Result<ClearOutcome> {
        let total = self.tasks.len();
        if total == 0 {
            return Ok(ClearOutcome::NothingToClear);
        }
        if !confirm.confirm(prompt) {
            info!(total, "clear all declined");
            return Ok(ClearOutcome::Declined);
        }

        self.tasks.clear();
        info!(removed = total, "cleared all tasks");

        self.persist()?;
        Ok(ClearOutcome::Cleared(total))
    }

    /// Overwrites the persisted slot with the full in-memory sequence.
    #[tracing::instrument(skip(self))]
    pub fn persist(&mut self) -> anyhow::Result<()> {
        let payload = encode_tasks(&self.tasks)?;
        debug!(key = %self.key, count = self.tasks.len(), "persisting tasks");
        self.storage
            .set(&self.key, &payload)
            .with_context(|| format!("failed to write storage slot {}", self.key))
    }

    /// Replaces the in-memory sequence with the persisted one. A missing or
    /// malformed slot gives an empty sequence.
    #[tracing::instrument(skip(self))]
    pub fn restore(&mut self) {
        self.tasks = match self.storage.get(&self.key) {
            Some(raw) => decode_tasks(&raw),
            None => {
                debug!(key = %self.key, "no stored tasks");
                vec![]
            }
        };
        let newest = self.tasks.iter().map(|task| task.id).max();
        self.ids = IdAllocator::starting_after(newest);
        info!(key = %self.key, count = self.tasks.len(), "restored tasks");
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::clock::FixedClock;
    use crate::confirm::FixedConfirm;
    use crate::storage::MemoryStorage;

    const KEY: &str = "cute-todo-tasks";

    fn store() -> TaskStore<MemoryStorage> {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap());
        TaskStore::open_with_clock(MemoryStorage::new(), KEY, Box::new(clock))
    }

    struct FailingStorage;

    impl KeyValueStore for FailingStorage {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> anyhow::Result<()> {
            anyhow::bail!("quota exceeded")
        }
    }

    #[test]
    fn blank_add_is_ignored_and_not_persisted() {
        let mut store = store();
        assert_eq!(store.add("   ").unwrap(), None);
        assert!(store.is_empty());
        assert_eq!(store.storage().get(KEY), None);
    }

    #[test]
    fn add_trims_and_persists() {
        let mut store = store();
        let id = store.add("  Buy milk ").unwrap().expect("task added");

        let task = store.get(id).expect("task present");
        assert_eq!(task.text, "Buy milk");
        assert!(!task.completed);

        let slot = store.storage().get(KEY).expect("slot written");
        assert_eq!(decode_tasks(&slot), store.list().to_vec());
    }

    #[derive(Default)]
    struct CountingStorage {
        inner: MemoryStorage,
        writes: usize,
    }

    impl KeyValueStore for CountingStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
            self.writes += 1;
            self.inner.set(key, value)
        }
    }

    #[test]
    fn unknown_ids_are_silent_noops() {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap());
        let mut store =
            TaskStore::open_with_clock(CountingStorage::default(), KEY, Box::new(clock));
        store.add("A").unwrap();
        let before = store.list().to_vec();
        let slot_before = store.storage().get(KEY);
        assert_eq!(store.storage().writes, 1);

        assert!(!store.toggle(TaskId(42)).unwrap());
        assert!(!store.delete(TaskId(42)).unwrap());
        assert_eq!(store.list(), before.as_slice());
        assert_eq!(store.storage().get(KEY), slot_before);
        assert_eq!(store.storage().writes, 1, "slot must not be rewritten");
    }

    #[test]
    fn clear_completed_without_completed_does_not_prompt() {
        let mut store = store();
        store.add("A").unwrap();
        let mut confirm = FixedConfirm::always(true);

        let outcome = store.clear_completed(&mut confirm, "sure?").unwrap();
        assert_eq!(outcome, ClearOutcome::NothingToClear);
        assert!(confirm.prompts.is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn clear_all_on_empty_store_does_not_prompt() {
        let mut store = store();
        let mut confirm = FixedConfirm::always(true);

        let outcome = store.clear_all(&mut confirm, "sure?").unwrap();
        assert_eq!(outcome, ClearOutcome::NothingToClear);
        assert!(confirm.prompts.is_empty());
    }

    #[test]
    fn declined_clear_keeps_everything() {
        let mut store = store();
        let a = store.add("A").unwrap().unwrap();
        store.add("B").unwrap();
        store.toggle(a).unwrap();
        let before = store.list().to_vec();
        let mut confirm = FixedConfirm::always(false);

        assert_eq!(
            store.clear_completed(&mut confirm, "clear done?").unwrap(),
            ClearOutcome::Declined
        );
        assert_eq!(store.clear_all(&mut confirm, "clear all?").unwrap(), ClearOutcome::Declined);
        assert_eq!(store.list(), before.as_slice());
        assert_eq!(confirm.prompts, vec!["clear done?", "clear all?"]);
    }

    #[test]
    fn restore_ignores_malformed_slot() {
        let storage = MemoryStorage::with_slot(KEY, "{not json");
        let store = TaskStore::open(storage, KEY);
        assert!(store.is_empty());
    }

    #[test]
    fn restore_drops_duplicate_ids() {
        let raw = r#"[
            {"id":1,"text":"first","completed":false,"createdAt":null},
            {"id":1,"text":"again","completed":true,"createdAt":null},
            {"id":2,"text":"second","completed":false}
        ]"#;
        let store = TaskStore::open(MemoryStorage::with_slot(KEY, raw), KEY);

        let texts: Vec<_> = store.list().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[test]
    fn new_ids_follow_restored_ones() {
        let future = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap().timestamp_millis();
        let raw = format!(r#"[{{"id":{future},"text":"from later","completed":false}}]"#);
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap());
        let mut store =
            TaskStore::open_with_clock(MemoryStorage::with_slot(KEY, &raw), KEY, Box::new(clock));

        let id = store.add("now").unwrap().unwrap();
        assert_eq!(id, TaskId(future + 1));
    }

    #[test]
    fn failed_write_keeps_in_memory_change() {
        let mut store = TaskStore::open(FailingStorage, KEY);
        let err = store.add("A").expect_err("write should fail");

        assert!(format!("{err:#}").contains("quota exceeded"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn add_after_maximal_stored_id_fails_without_panicking() {
        let raw = format!(r#"[{{"id":{},"text":"x","completed":false}}]"#, i64::MAX);
        let mut store = TaskStore::open(MemoryStorage::with_slot(KEY, &raw), KEY);

        let err = store.add("next").expect_err("no id left to issue");
        assert!(format!("{err:#}").contains("exhausted"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].id, TaskId(i64::MAX));
        assert_eq!(store.storage().get(KEY).as_deref(), Some(raw.as_str()));
    }

    #[test]
    fn unparsable_created_at_keeps_the_rest_of_the_slot() {
        let raw = r#"[
            {"id":1,"text":"good","completed":false,"createdAt":"2025-10-16T08:00:00.000Z"},
            {"id":2,"text":"odd date","completed":true,"createdAt":"yesterday-ish"},
            {"id":3,"text":"numeric date","completed":false,"createdAt":1760601600000}
        ]"#;
        let store = TaskStore::open(MemoryStorage::with_slot(KEY, raw), KEY);

        let texts: Vec<_> = store.list().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["good", "odd date", "numeric date"]);
        assert!(store.list()[0].created_at.is_some());
        assert_eq!(store.list()[1].created_at, None);
        assert_eq!(store.list()[2].created_at, None);
        assert!(store.list()[1].completed);
    }
}
