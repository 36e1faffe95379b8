pub mod chat;
pub mod health;
pub mod verse_of_day;

pub use chat::chat_config;
pub use health::health_check;
pub use verse_of_day::get_verse_of_day;
