//! Command implementations

mod changes;
mod init;
mod label;
mod sync;

pub use changes::changes;
pub use init::init;
pub use label::label;
pub use sync::sync;
