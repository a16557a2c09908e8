pub mod page;
pub mod ratelimit;
pub mod table;

pub use page::Page;
pub use ratelimit::check_cooldown;
pub use table::Table;
