use crate::ops::task_ops::TaskStore;
use crate::util::unicode::display_width;

/// One rendered list row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    /// Full label: `"{text} {mark}{prefix}"`
    pub label: String,
    /// Done rows are drawn muted
    pub done: bool,
    /// Display number when this row heads its group
    pub number: Option<usize>,
}

/// Build every row from the current store state.
pub fn display_rows(store: &TaskStore) -> Vec<DisplayRow> {
    let numbers = store.display_numbers();
    let mut seen = std::collections::HashSet::new();

    store
        .tasks()
        .iter()
        .map(|task| {
            let group_id = task.group_id();
            let number = numbers[&group_id];
            let is_head = seen.insert(group_id);
            DisplayRow {
                label: format_label(task.text(), task.mark(), number, is_head),
                done: task.done,
                number: is_head.then_some(number),
            }
        })
        .collect()
}

/// `"N. "` on a group's first row, blanks of the same width elsewhere.
pub fn number_prefix(number: usize, is_head: bool) -> String {
    let prefix = format!("{}. ", number);
    if is_head {
        prefix
    } else {
        " ".repeat(display_width(&prefix))
    }
}

fn format_label(text: &str, mark: char, number: usize, is_head: bool) -> String {
    format!("{} {}{}", text, mark, number_prefix(number, is_head))
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_debug_snapshot;
    use pretty_assertions::assert_eq;

    fn labels(store: &TaskStore) -> Vec<String> {
        display_rows(store).into_iter().map(|r| r.label).collect()
    }

    #[test]
    fn grouped_batches_are_numbered_once() {
        let mut store = TaskStore::new();
        store.add_batch("Buy milk\nBuy eggs").unwrap();
        store.add_batch("Call mom").unwrap();
        assert_debug_snapshot!(labels(&store), @r#"
        [
            "Buy milk  1. ",
            "Buy eggs     ",
            "Call mom  2. ",
        ]
        "#);
    }

    #[test]
    fn deleting_a_group_renumbers() {
        let mut store = TaskStore::new();
        store.add_batch("Buy milk\nBuy eggs").unwrap();
        store.add_batch("Call mom").unwrap();
        store.delete_selected([1]).unwrap();
        assert_eq!(labels(&store), vec!["Call mom  1. ".to_string()]);
        assert_eq!(display_rows(&store)[0].number, Some(1));
    }

    #[test]
    fn done_rows_carry_check_mark() {
        let mut store = TaskStore::new();
        store.add_batch("Buy milk\nBuy eggs").unwrap();
        store.toggle_selected([0]).unwrap();
        let rows = display_rows(&store);
        assert_eq!(rows[0].label, "Buy milk \u{2713}1. ");
        assert_eq!(rows[1].label, "Buy eggs \u{2713}   ");
        assert!(rows.iter().all(|r| r.done));
    }

    #[test]
    fn padding_matches_wide_numbers() {
        let mut store = TaskStore::new();
        for i in 0..9 {
            store.add_batch(&format!("task {}", i)).unwrap();
        }
        store.add_batch("ten\nmore").unwrap();
        let rows = display_rows(&store);
        assert_eq!(rows[9].label, "ten  10. ");
        assert_eq!(rows[10].label, "more     ");
        assert_eq!(rows[10].number, None);
    }

    #[test]
    fn prefix_widths() {
        assert_eq!(number_prefix(3, true), "3. ");
        assert_eq!(number_prefix(3, false), "   ");
        assert_eq!(number_prefix(120, false), "     ");
    }
}
