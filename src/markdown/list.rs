//! Two-level ordered/unordered list element

/// Kind of a single list item. Two indentation levels are supported: main
/// items and sub-items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListItemKind {
    /// Numbered top-level item.
    OrderedMain,
    /// Bulleted top-level item.
    UnorderedMain,
    /// Numbered indented item.
    OrderedSub,
    /// Bulleted indented item.
    UnorderedSub,
}

const SUB_ITEM_INDENT: &str = "    ";

/// Markdown list.
///
/// Ordered main items and ordered sub-items carry independent 1-based
/// counters. Each counter advances once per item of its own kind and is never
/// reset by items of other kinds.
#[derive(Debug, Clone, Default)]
pub struct List {
    items: Vec<(ListItemKind, String)>,
}

impl List {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a numbered top-level item.
    pub fn add_ordered_item(&mut self, item: impl Into<String>) {
        self.items.push((ListItemKind::OrderedMain, item.into()));
    }

    /// Append a bulleted top-level item.
    pub fn add_item(&mut self, item: impl Into<String>) {
        self.items.push((ListItemKind::UnorderedMain, item.into()));
    }

    /// Append a numbered sub-item.
    pub fn add_ordered_sub_item(&mut self, item: impl Into<String>) {
        self.items.push((ListItemKind::OrderedSub, item.into()));
    }

    /// Append a bulleted sub-item.
    pub fn add_unordered_sub_item(&mut self, item: impl Into<String>) {
        self.items.push((ListItemKind::UnorderedSub, item.into()));
    }

    /// Number of items of any kind.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Render all items in insertion order, one per line.
    #[must_use]
    pub fn render(&self) -> String {
        let mut main_idx = 1usize;
        let mut sub_idx = 1usize;

        let lines: Vec<String> = self
            .items
            .iter()
            .map(|(kind, text)| match kind {
                ListItemKind::OrderedMain => {
                    let line = format!("{main_idx}. {text}");
                    main_idx += 1;
                    line
                }
                ListItemKind::UnorderedMain => format!("* {text}"),
                ListItemKind::OrderedSub => {
                    let line = format!("{SUB_ITEM_INDENT}{sub_idx}. {text}");
                    sub_idx += 1;
                    line
                }
                ListItemKind::UnorderedSub => format!("{SUB_ITEM_INDENT}* {text}"),
            })
            .collect();

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unordered_items() {
        let mut list = List::new();
        list.add_item("first");
        list.add_item("second");
        assert_eq!(list.render(), "* first\n* second");
    }

    #[test]
    fn test_ordered_counter_advances() {
        let mut list = List::new();
        list.add_ordered_item("a");
        list.add_ordered_item("b");
        assert_eq!(list.render(), "1. a\n2. b");
    }

    #[test]
    fn test_sub_counter_independent_of_main() {
        let mut list = List::new();
        list.add_ordered_item("one");
        list.add_ordered_item("two");
        list.add_ordered_sub_item("detail");
        let rendered = list.render();
        let lines: Vec<&str> = rendered.lines().map(str::trim_start).collect();
        assert_eq!(lines, vec!["1. one", "2. two", "1. detail"]);
    }

    #[test]
    fn test_unordered_items_do_not_touch_counters() {
        let mut list = List::new();
        list.add_ordered_item("a");
        list.add_item("bullet");
        list.add_ordered_item("b");
        assert_eq!(list.render(), "1. a\n* bullet\n2. b");
    }

    #[test]
    fn test_sub_items_indented_four_spaces() {
        let mut list = List::new();
        list.add_unordered_sub_item("nested");
        assert_eq!(list.render(), "    * nested");
    }

    #[test]
    fn test_empty_list_renders_empty() {
        assert_eq!(List::new().render(), "");
        assert!(List::new().is_empty());
    }
}
