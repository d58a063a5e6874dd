//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (cookies, window
//! size, alerts) from page and component logic to improve reuse and
//! testability.

pub mod masonry;
pub mod notify;
pub mod token;
