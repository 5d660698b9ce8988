use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies the submission a task was created from
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GroupId(pub u64);

impl GroupId {
    /// The id handed to the first group of an empty store
    pub const FIRST: GroupId = GroupId(0);

    /// The id following this one
    pub fn next(self) -> GroupId {
        GroupId(self.0 + 1)
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g{}", self.0)
    }
}

/// A single checklist entry: one non-blank line of a submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Trimmed line text
    text: String,
    /// Done flag
    pub done: bool,
    /// Submission this task belongs to
    group_id: GroupId,
}

impl Task {
    /// Create a not-done task in the given group
    pub fn new(text: impl Into<String>, group_id: GroupId) -> Self {
        Task {
            text: text.into(),
            done: false,
            group_id,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn group_id(&self) -> GroupId {
        self.group_id
    }

    /// The check mark shown after the text
    pub fn mark(&self) -> char {
        if self.done { '\u{2713}' } else { ' ' }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_is_not_done() {
        let task = Task::new("Buy milk", GroupId(3));
        assert!(!task.done);
        assert_eq!(task.text(), "Buy milk");
        assert_eq!(task.group_id(), GroupId(3));
        assert_eq!(task.mark(), ' ');
    }

    #[test]
    fn done_task_shows_check_mark() {
        let mut task = Task::new("Buy milk", GroupId::FIRST);
        task.done = true;
        assert_eq!(task.mark(), '\u{2713}');
    }

    #[test]
    fn group_ids_order_and_advance() {
        assert!(GroupId(1) < GroupId(2));
        assert_eq!(GroupId(4).next(), GroupId(5));
        assert_eq!(GroupId(7).to_string(), "g7");
    }
}
