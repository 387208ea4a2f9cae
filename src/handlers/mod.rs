pub mod api;
pub mod cities;
pub mod errors;
pub mod health;
pub mod metrics;
pub mod middleware;
pub mod restaurants;

pub use api::*;
pub use errors::{error_response, service_error_to_response, ApiError};
pub use health::*;
pub use metrics::*;
pub use middleware::*;
