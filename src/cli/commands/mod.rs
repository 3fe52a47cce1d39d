pub mod completion;
pub mod config;
pub mod restart;
pub mod start;
pub mod status;
pub mod stop;
pub mod usage;
