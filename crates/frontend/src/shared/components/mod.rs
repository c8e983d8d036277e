pub mod confirm_dialog;
pub mod crud_list;
pub mod form_field;
pub mod image_picker;
pub mod modal;
pub mod pagination_controls;
pub mod stat_card;
pub mod ui;
