//! Adapter implementations for the port traits
//!
//! Concrete implementations that actually touch the outside world:
//!
//! - `process/` - child-process execution via `std::process`
//! - `initializer/` - client workspace bootstrap via `client -i`

pub mod initializer;
pub mod process;

pub use initializer::{ClientInitializer, InitializerError};
pub use process::SystemProcessExecutor;
