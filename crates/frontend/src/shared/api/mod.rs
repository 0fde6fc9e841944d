//! REST client: request helpers, error taxonomy and the generic resource API.

pub mod error;
pub mod http;
pub mod resource;

pub use error::ApiError;
pub use resource::ResourceApi;
