pub mod date_service;
pub mod menu_service;
pub mod rate_service;
pub mod rate_table_service;
