pub mod error_boundary;
pub mod suspend_boundary;
pub mod navbar;
pub mod notification_host;
pub mod filter_components;
