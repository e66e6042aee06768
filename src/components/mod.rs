//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod image_picker;
mod item_form_fields;
mod line_chart;
mod order_details;
mod order_table;
mod sidebar;
mod stat_card;
mod tag_selector;
mod toaster;

pub use delete_confirm_button::DeleteConfirmButton;
pub use image_picker::ImagePicker;
pub use item_form_fields::ItemFormFields;
pub use line_chart::LineChart;
pub use order_details::OrderDetails;
pub use order_table::OrderTable;
pub use sidebar::Sidebar;
pub use stat_card::StatCard;
pub use tag_selector::TagSelector;
pub use toaster::Toaster;
