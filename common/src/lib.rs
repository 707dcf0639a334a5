//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod metadata_set;
pub mod filter_catalog;
pub mod filter_expression;
pub mod value_input;
pub mod search_result;
pub mod selection;
pub mod search_panel;
