//! 命令定义和实现

pub mod pose;
pub mod preset;
pub mod status;

pub use pose::{FingerCommand, PalmCommand};
pub use preset::PresetCommand;
