//! Repository traits abstracting the storage backend.

mod click_repository;
mod url_repository;

pub use click_repository::ClickRepository;
pub use url_repository::UrlRepository;

#[cfg(test)]
pub use click_repository::MockClickRepository;
#[cfg(test)]
pub use url_repository::MockUrlRepository;
