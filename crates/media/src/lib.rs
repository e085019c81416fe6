pub mod error;
pub mod http;
pub mod resolver;
pub mod types;

pub use error::MediaError;
pub use http::HttpMediaResolver;
pub use resolver::MediaResolver;
pub use types::{MediaObject, MediaSource};
