pub mod url_param;
pub mod notifications;
pub mod catalog_mode;
