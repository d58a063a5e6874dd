//! Client state models.
//!
//! SYSTEM CONTEXT
//! ==============
//! State types are plain data driven by reducers; pages wrap them in
//! `RwSignal`s and run the commands the reducers hand back.

pub mod collection;
