pub mod home_page;
pub mod table_page;
pub mod add_indicators_page;
