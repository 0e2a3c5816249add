use mindbridge_types::ColumnDef;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityEntry {
    pub name: String,
    pub omit: bool,
}

/// Show/hide flags for named columns, in declaration order.
///
/// Nameless columns (row action menus and the like) have no entry and are
/// always rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColumnVisibility {
    entries: Vec<VisibilityEntry>,
}

impl ColumnVisibility {
    pub fn from_columns(columns: &[ColumnDef]) -> Self {
        let mut entries: Vec<VisibilityEntry> = Vec::new();
        for column in columns {
            let Some(name) = column.display_name() else {
                continue;
            };
            if entries.iter().any(|entry| entry.name == name) {
                continue;
            }
            entries.push(VisibilityEntry {
                name: name.to_string(),
                omit: column.omit,
            });
        }
        Self { entries }
    }

    /// Rebuilds entries for a new column list, keeping flags of surviving names.
    pub fn rebuild(&self, columns: &[ColumnDef]) -> Self {
        let mut next = Self::from_columns(columns);
        for entry in &mut next.entries {
            if let Some(previous) = self.entry(&entry.name) {
                entry.omit = previous.omit;
            }
        }
        next
    }

    pub fn entries(&self) -> &[VisibilityEntry] {
        &self.entries
    }

    pub fn entry(&self, name: &str) -> Option<&VisibilityEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entry(name).is_some()
    }

    /// Flips the flag for `name`. Returns false if no such column exists.
    pub fn toggle(&mut self, name: &str) -> bool {
        match self.entries.iter_mut().find(|entry| entry.name == name) {
            Some(entry) => {
                entry.omit = !entry.omit;
                true
            }
            None => false,
        }
    }

    pub fn set_hidden(&mut self, name: &str, hidden: bool) -> bool {
        match self.entries.iter_mut().find(|entry| entry.name == name) {
            Some(entry) => {
                entry.omit = hidden;
                true
            }
            None => false,
        }
    }

    /// "Show all columns".
    pub fn reset_all(&mut self) {
        for entry in &mut self.entries {
            entry.omit = false;
        }
    }

    pub fn is_hidden(&self, name: &str) -> bool {
        self.entry(name).is_some_and(|entry| entry.omit)
    }

    pub fn hidden_names(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|entry| entry.omit)
            .map(|entry| entry.name.as_str())
            .collect()
    }

    /// Columns to draw, in the order they were declared.
    pub fn visible_columns<'a>(&self, columns: &'a [ColumnDef]) -> Vec<&'a ColumnDef> {
        columns
            .iter()
            .filter(|column| match column.display_name() {
                Some(name) => !self.is_hidden(name),
                None => true,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::new("Name").with_selector_id("client_first_name"),
            ColumnDef::new("Email").with_selector_id("email"),
            ColumnDef::new("Phone").with_selector_id("phone").omitted(true),
            ColumnDef::nameless(),
        ]
    }

    fn visible_names(visibility: &ColumnVisibility, columns: &[ColumnDef]) -> Vec<String> {
        visibility
            .visible_columns(columns)
            .iter()
            .map(|c| c.display_name().unwrap_or("<actions>").to_string())
            .collect()
    }

    #[test]
    fn test_initial_state_from_columns() {
        let visibility = ColumnVisibility::from_columns(&columns());
        let names: Vec<_> = visibility.entries().iter().map(|e| e.name.as_str()).collect();

        assert_eq!(names, vec!["Name", "Email", "Phone"]);
        assert_eq!(visibility.hidden_names(), vec!["Phone"]);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut visibility = ColumnVisibility::from_columns(&columns());
        let before = visibility.clone();

        assert!(visibility.toggle("Email"));
        assert!(visibility.is_hidden("Email"));
        assert!(!visibility.is_hidden("Name"));
        assert!(visibility.toggle("Email"));

        assert_eq!(visibility, before);
    }

    #[test]
    fn test_toggle_unknown_name() {
        let mut visibility = ColumnVisibility::from_columns(&columns());
        let before = visibility.clone();
        assert!(!visibility.toggle("Address"));
        assert!(!visibility.toggle(""));
        assert_eq!(visibility, before);
    }

    #[test]
    fn test_reset_all() {
        let mut visibility = ColumnVisibility::from_columns(&columns());
        visibility.toggle("Name");
        visibility.reset_all();
        assert!(visibility.entries().iter().all(|e| !e.omit));
    }

    #[test]
    fn test_visible_columns_keep_declaration_order() {
        let columns = columns();
        let mut visibility = ColumnVisibility::from_columns(&columns);

        visibility.toggle("Phone");
        visibility.toggle("Name");
        visibility.toggle("Name");
        assert_eq!(
            visible_names(&visibility, &columns),
            vec!["Name", "Email", "Phone", "<actions>"]
        );

        visibility.set_hidden("Email", true);
        assert_eq!(
            visible_names(&visibility, &columns),
            vec!["Name", "Phone", "<actions>"]
        );
    }

    #[test]
    fn test_rebuild_keeps_surviving_flags() {
        let mut visibility = ColumnVisibility::from_columns(&columns());
        visibility.toggle("Email");

        let next = visibility.rebuild(&[
            ColumnDef::new("Email").with_selector_id("email"),
            ColumnDef::new("Status").with_selector_id("status"),
        ]);

        assert!(next.is_hidden("Email"));
        assert!(!next.is_hidden("Status"));
        assert!(!next.contains("Phone"));
    }
}
