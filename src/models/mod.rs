// Re-export all model types
pub use self::city::*;
pub use self::errors::*;
pub use self::health::*;
pub use self::record::*;
pub use self::restaurant::*;

mod city;
mod errors;
pub mod filters;
mod health;
mod record;
mod restaurant;
