use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;

use crate::config::Labels;
use crate::task::{Task, TaskId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    All,
    Pending,
    Completed,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::All, Tab::Pending, Tab::Completed];

    pub fn as_str(self) -> &'static str {
        match self {
            Tab::All => "all",
            Tab::Pending => "pending",
            Tab::Completed => "completed",
        }
    }

    pub fn includes(self, task: &Task) -> bool {
        match self {
            Tab::All => true,
            Tab::Pending => !task.completed,
            Tab::Completed => task.completed,
        }
    }

    pub fn label(self, labels: &Labels) -> &str {
        match self {
            Tab::All => &labels.tab_all,
            Tab::Pending => &labels.tab_pending,
            Tab::Completed => &labels.tab_completed,
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Tab::All),
            "pending" => Ok(Tab::Pending),
            "completed" => Ok(Tab::Completed),
            other => Err(anyhow!("unknown tab: {other}")),
        }
    }
}

/// Tasks visible under `tab`, in insertion order.
pub fn filtered_view(tasks: &[Task], tab: Tab) -> Vec<&Task> {
    tasks.iter().filter(|task| tab.includes(task)).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    pub class: &'static str,
    pub toggle_label: String,
    pub toggle_class: &'static str,
    pub delete_label: String,
}

impl TaskRow {
    pub fn new(task: &Task, labels: &Labels) -> Self {
        let (class, toggle_class, toggle_label) = if task.completed {
            ("task-item completed", "task-btn incomplete-btn", &labels.mark_incomplete)
        } else {
            ("task-item", "task-btn complete-btn", &labels.mark_complete)
        };

        Self {
            id: task.id,
            text: task.text.clone(),
            completed: task.completed,
            class,
            toggle_label: toggle_label.clone(),
            toggle_class,
            delete_label: labels.delete.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEntry {
    Row(TaskRow),
    Placeholder(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub tab: Tab,
    pub active: bool,
    pub entries: Vec<ListEntry>,
}

impl ListView {
    pub fn container_id(&self) -> String {
        format!("{}-tasks", self.tab)
    }

    pub fn rows(&self) -> impl Iterator<Item = &TaskRow> {
        self.entries.iter().filter_map(|entry| match entry {
            ListEntry::Row(row) => Some(row),
            ListEntry::Placeholder(_) => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabButton {
    pub tab: Tab,
    pub label: String,
    pub count: usize,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub tabs: Vec<TabButton>,
    pub lists: Vec<ListView>,
}

impl BoardView {
    pub fn list(&self, tab: Tab) -> Option<&ListView> {
        self.lists.iter().find(|list| list.tab == tab)
    }

    pub fn active_list(&self) -> Option<&ListView> {
        self.lists.iter().find(|list| list.active)
    }
}

/// Builds all three lists regardless of which tab is showing; only the
/// `active` flags depend on `active`.
pub fn render(tasks: &[Task], active: Tab, labels: &Labels) -> BoardView {
    let mut tabs = Vec::with_capacity(Tab::ALL.len());
    let mut lists = Vec::with_capacity(Tab::ALL.len());

    for tab in Tab::ALL {
        let visible = filtered_view(tasks, tab);
        tabs.push(TabButton {
            tab,
            label: tab.label(labels).to_string(),
            count: visible.len(),
            active: tab == active,
        });

        let entries = if visible.is_empty() {
            vec![ListEntry::Placeholder(labels.empty_state.clone())]
        } else {
            visible
                .into_iter()
                .map(|task| ListEntry::Row(TaskRow::new(task, labels)))
                .collect()
        };

        lists.push(ListView {
            tab,
            active: tab == active,
            entries,
        });
    }

    BoardView { tabs, lists }
}
