pub mod header;
pub mod upload_area;
pub mod column_selector;
pub mod settings_panel;
pub mod progress_bar;
pub mod result_view;
