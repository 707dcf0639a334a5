pub mod indicator_api;
