//! HTTP request handlers.

mod alias;
mod analytics;
mod delete;
mod health;
mod redirect;
mod shorten;

pub use alias::check_alias_handler;
pub use analytics::analytics_handler;
pub use delete::delete_url_handler;
pub use health::health_handler;
pub use redirect::{redirect_handler, resolve_handler};
pub use shorten::shorten_handler;
