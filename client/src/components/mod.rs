//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentational: they receive signals and callbacks from
//! the collection page and never touch the API themselves.

pub mod add_image_dialog;
pub mod admin_layout;
pub mod confirm_delete_dialog;
pub mod image_card;
pub mod masonry_grid;
pub mod url_hint;
