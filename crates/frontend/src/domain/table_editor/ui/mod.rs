mod confirm_dialogs;
mod grid;
mod layout;
mod no_permission;
mod page;
mod side_menu;
mod side_panel_editor;

pub use confirm_dialogs::{ConfirmDeleteColumnDialog, ConfirmDeleteTableDialog};
pub use grid::GridEditor;
pub use layout::TableEditorLayout;
pub use no_permission::NoPermission;
pub use page::TableEditorPage;
pub use side_menu::SideMenu;
pub use side_panel_editor::SidePanelEditor;
