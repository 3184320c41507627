//! Table editor page: side menu, grid, side panels and delete confirmations

pub mod deletion;
pub mod filters;
pub mod navigation;
pub mod services;
pub mod side_panel;
pub mod ui;

pub use deletion::{Deletion, DeletionController, DeletionKind, DeletionTarget};
pub use services::{use_editor_services, EditorServices, MetaApiHandle};
pub use side_panel::{EntityEditor, SidePanel};
