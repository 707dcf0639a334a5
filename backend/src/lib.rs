//! Server-side access to the remote indicator API.

pub mod config;
pub mod api;
pub mod rest_utils;
