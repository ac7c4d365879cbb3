//! Storage backends.

mod memory;
mod pg_click_repository;
mod pg_url_repository;

pub use memory::MemoryStore;
pub use pg_click_repository::PgClickRepository;
pub use pg_url_repository::PgUrlRepository;
