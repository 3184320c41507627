pub mod meta;
pub mod table_editor;
