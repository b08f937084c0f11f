pub mod fallback;
pub mod ping;

pub use fallback::api_not_found;
pub use ping::ping;
