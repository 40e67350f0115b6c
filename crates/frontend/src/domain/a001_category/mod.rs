//! Category management
//!
//! - api.rs: REST calls against `/api/Category`
//! - error.rs: per-operation failure type
//! - ui/list: page state and the list component
//! - ui/details: create/edit form

pub mod api;
pub mod error;
pub mod ui;
