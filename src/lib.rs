pub mod cli;
pub mod config;
pub mod core;
pub mod utils;

pub use crate::config::Config;
pub use crate::core::daemon::{DaemonDescriptor, DaemonState, PidFile};
pub use crate::core::supervisor::Supervisor;
pub use crate::utils::{Result, VigilError};
