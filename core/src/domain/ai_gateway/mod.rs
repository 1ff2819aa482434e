pub mod fallbacks;
pub mod payloads;
pub mod ports;
pub mod prompts;
pub mod reconcile;
pub mod schema;
pub mod services;
pub mod value_objects;

pub use ports::*;
pub use services::*;
pub use value_objects::*;
