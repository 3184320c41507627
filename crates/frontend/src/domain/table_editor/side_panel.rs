//! Which side panel is open and what it edits.

use contracts::meta::{Column, RowData, Table};
use leptos::prelude::*;

/// Открытая боковая панель; `None` внутри варианта означает создание новой сущности
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SidePanel {
    #[default]
    Closed,
    Row { row: Option<RowData> },
    Column { column: Option<Column> },
    Table { table: Option<Table>, duplicate: bool },
}

impl SidePanel {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// `true` when the panel creates a new entity instead of editing one
    pub fn is_new(&self) -> bool {
        match self {
            Self::Closed => false,
            Self::Row { row } => row.is_none(),
            Self::Column { column } => column.is_none(),
            Self::Table { table, duplicate } => table.is_none() || *duplicate,
        }
    }

    pub fn is_duplicating(&self) -> bool {
        matches!(self, Self::Table { duplicate: true, .. })
    }

    pub fn title(&self) -> String {
        match self {
            Self::Closed => String::new(),
            Self::Row { row: None } => "Add new row".to_string(),
            Self::Row { row: Some(row) } => format!("Update row #{}", row.idx + 1),
            Self::Column { column: None } => "Add new column".to_string(),
            Self::Column { column: Some(c) } => format!("Update column \"{}\"", c.name),
            Self::Table { table: None, .. } => "Create a new table".to_string(),
            Self::Table { table: Some(t), duplicate: true } => {
                format!("Duplicate table \"{}\"", t.name)
            }
            Self::Table { table: Some(t), duplicate: false } => {
                format!("Update table \"{}\"", t.name)
            }
        }
    }
}

/// Opens and closes side panels for the grid and the side menu
#[derive(Clone, Copy)]
pub struct EntityEditor {
    panel: RwSignal<SidePanel>,
}

impl EntityEditor {
    pub fn new() -> Self {
        Self {
            panel: RwSignal::new(SidePanel::Closed),
        }
    }

    pub fn panel(&self) -> SidePanel {
        self.panel.get()
    }

    pub fn panel_untracked(&self) -> SidePanel {
        self.panel.get_untracked()
    }

    pub fn add_row(&self) {
        self.panel.set(SidePanel::Row { row: None });
    }

    pub fn edit_row(&self, row: RowData) {
        self.panel.set(SidePanel::Row { row: Some(row) });
    }

    pub fn add_column(&self) {
        self.panel.set(SidePanel::Column { column: None });
    }

    pub fn edit_column(&self, column: Column) {
        self.panel.set(SidePanel::Column {
            column: Some(column),
        });
    }

    pub fn add_table(&self) {
        self.panel.set(SidePanel::Table {
            table: None,
            duplicate: false,
        });
    }

    pub fn edit_table(&self, table: Table) {
        self.panel.set(SidePanel::Table {
            table: Some(table),
            duplicate: false,
        });
    }

    pub fn duplicate_table(&self, table: Table) {
        self.panel.set(SidePanel::Table {
            table: Some(table),
            duplicate: true,
        });
    }

    pub fn close(&self) {
        self.panel.set(SidePanel::Closed);
    }
}

impl Default for EntityEditor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::meta::testing::FakeMetaApi;

    #[test]
    fn test_add_operations_have_no_target() {
        let editor = EntityEditor::new();
        editor.add_row();
        assert_eq!(editor.panel_untracked(), SidePanel::Row { row: None });
        assert!(editor.panel_untracked().is_new());

        editor.add_column();
        assert_eq!(editor.panel_untracked(), SidePanel::Column { column: None });

        editor.add_table();
        assert_eq!(
            editor.panel_untracked(),
            SidePanel::Table {
                table: None,
                duplicate: false
            }
        );
    }

    #[test]
    fn test_duplicate_sets_flag_and_close_clears() {
        let editor = EntityEditor::new();
        let table = FakeMetaApi::table(1, "public", "countries");

        editor.duplicate_table(table.clone());
        let panel = editor.panel_untracked();
        assert!(panel.is_duplicating());
        assert!(panel.is_new());
        assert_eq!(panel.title(), "Duplicate table \"countries\"");

        editor.edit_table(table);
        assert!(!editor.panel_untracked().is_duplicating());

        editor.close();
        assert!(!editor.panel_untracked().is_open());
    }

    #[test]
    fn test_edit_column_title() {
        let editor = EntityEditor::new();
        let table = FakeMetaApi::table(1, "public", "people");
        editor.edit_column(FakeMetaApi::column(&table, 2, "age"));
        assert_eq!(editor.panel_untracked().title(), "Update column \"age\"");
        assert!(!editor.panel_untracked().is_new());
    }
}
