//! Core business entities.

mod click;
mod url;

pub use click::{Click, NewClick};
pub use url::{NewUrl, UrlRecord};
