//! Adapter implementations of the description-source port.

pub mod env;
pub mod event;
pub mod file;
pub mod memory;
pub mod stdin;

pub use env::EnvDescriptionSource;
pub use event::EventPayloadDescriptionSource;
pub use file::FileDescriptionSource;
pub use memory::StaticDescriptionSource;
pub use stdin::StdinDescriptionSource;
