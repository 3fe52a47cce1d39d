pub mod daemon;
pub mod process;
pub mod supervisor;
