//! Port traits (interfaces) for the injected collaborators
//!
//! These traits define the boundary between the adapter's core logic and
//! the outside world (child processes, workspace bootstrap).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core services depend only on these traits, never on concrete
//! implementations, and receive them as constructor parameters rather than
//! reaching for ambient singletons. This enables:
//!
//! - **Testability**: mock executors for unit tests, zero child processes
//! - **Flexibility**: swap the execution facility without touching services

mod initializer;
mod process;

pub use initializer::WorkspaceInitializer;
pub use process::{ProcessExecutor, ProcessInfo, ProcessOutput, ToolError};
