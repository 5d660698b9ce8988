use std::collections::{BTreeMap, BTreeSet};

use crate::model::config::ToggleMode;
use crate::model::task::{GroupId, Task};

/// Conditions reported instead of mutating the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Please enter a task.")]
    EmptyInput,
    #[error("Please select at least one task.")]
    NoSelection,
    #[error("There are no tasks to clear.")]
    NothingToClear,
}

/// How loudly a condition should be surfaced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Info,
}

impl StoreError {
    pub fn severity(self) -> Severity {
        match self {
            StoreError::EmptyInput | StoreError::NoSelection => Severity::Warning,
            StoreError::NothingToClear => Severity::Info,
        }
    }
}

/// Ordered task list with group bookkeeping.
///
/// Row `i` of the displayed list is always `tasks()[i]`.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    toggle_mode: ToggleMode,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_toggle_mode(toggle_mode: ToggleMode) -> Self {
        TaskStore {
            tasks: Vec::new(),
            toggle_mode,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn toggle_mode(&self) -> ToggleMode {
        self.toggle_mode
    }

    /// Number of distinct groups currently present
    pub fn group_count(&self) -> usize {
        self.live_groups().len()
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Append one task per non-blank line of `raw`, all in a fresh group.
    pub fn add_batch(&mut self, raw: &str) -> Result<GroupId, StoreError> {
        let lines: Vec<&str> = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.is_empty() {
            return Err(StoreError::EmptyInput);
        }

        let group_id = self.next_group_id();
        self.tasks
            .extend(lines.into_iter().map(|line| Task::new(line, group_id)));
        Ok(group_id)
    }

    /// Remove every task whose group has at least one selected row.
    /// Returns the number of tasks removed.
    pub fn delete_selected(
        &mut self,
        selected: impl IntoIterator<Item = usize>,
    ) -> Result<usize, StoreError> {
        let groups = self.resolve_groups(selected)?;
        let before = self.tasks.len();
        self.tasks.retain(|t| !groups.contains(&t.group_id()));
        Ok(before - self.tasks.len())
    }

    /// Toggle done for every task whose group has at least one selected row.
    /// Returns the rows that changed, ascending.
    pub fn toggle_selected(
        &mut self,
        selected: impl IntoIterator<Item = usize>,
    ) -> Result<Vec<usize>, StoreError> {
        let groups = self.resolve_groups(selected)?;
        let mut changed = Vec::new();

        for group_id in groups {
            let rows = self.group_rows(group_id);
            // resolve_groups only yields live groups
            let first_done = self.tasks[rows[0]].done;
            for &row in &rows {
                let task = &mut self.tasks[row];
                task.done = match self.toggle_mode {
                    ToggleMode::Complement => !first_done,
                    ToggleMode::FlipEach => !task.done,
                };
            }
            changed.extend(rows);
        }

        changed.sort_unstable();
        Ok(changed)
    }

    /// Remove every task. Returns how many were removed.
    pub fn clear_all(&mut self) -> Result<usize, StoreError> {
        if self.tasks.is_empty() {
            return Err(StoreError::NothingToClear);
        }
        let count = self.tasks.len();
        self.tasks.clear();
        Ok(count)
    }

    // -----------------------------------------------------------------------
    // Group queries
    // -----------------------------------------------------------------------

    /// 1-based rank of `group_id` among the live groups, in id order
    pub fn display_number(&self, group_id: GroupId) -> Option<usize> {
        self.live_groups()
            .iter()
            .position(|g| *g == group_id)
            .map(|i| i + 1)
    }

    /// Display number of every live group
    pub fn display_numbers(&self) -> BTreeMap<GroupId, usize> {
        self.live_groups()
            .into_iter()
            .enumerate()
            .map(|(i, g)| (g, i + 1))
            .collect()
    }

    /// Rows belonging to `group_id`, ascending
    pub fn group_rows(&self, group_id: GroupId) -> Vec<usize> {
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.group_id() == group_id)
            .map(|(i, _)| i)
            .collect()
    }

    fn live_groups(&self) -> BTreeSet<GroupId> {
        self.tasks.iter().map(Task::group_id).collect()
    }

    fn next_group_id(&self) -> GroupId {
        self.tasks
            .iter()
            .map(Task::group_id)
            .max()
            .map_or(GroupId::FIRST, GroupId::next)
    }

    /// Map selected rows to their groups. A row past the end means the
    /// caller's selection is out of step with the store.
    fn resolve_groups(
        &self,
        selected: impl IntoIterator<Item = usize>,
    ) -> Result<BTreeSet<GroupId>, StoreError> {
        let groups: BTreeSet<GroupId> = selected
            .into_iter()
            .map(|row| {
                assert!(
                    row < self.tasks.len(),
                    "selected row {} out of range for {} tasks",
                    row,
                    self.tasks.len()
                );
                self.tasks[row].group_id()
            })
            .collect();
        if groups.is_empty() {
            return Err(StoreError::NoSelection);
        }
        Ok(groups)
    }
}
