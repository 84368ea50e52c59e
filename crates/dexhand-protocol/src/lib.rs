//! # Dexhand Protocol
//!
//! L10 灵巧手 CAN 总线协议定义（无硬件依赖）
//!
//! ## 模块
//!
//! - `ids`: 手型与仲裁 ID
//! - `constants`: 协议常量定义
//! - `command`: 通用指令类型
//! - `encode`: 指令到 CAN 消息的编码
//!
//! ## 帧格式
//!
//! ```text
//! +--------+-------------------------+
//! | prefix | payload (≤ 7 bytes)     |
//! +--------+-------------------------+
//!   0x01     手指姿态（6 字节）
//!   0x04     掌部姿态（4 字节）
//! ```

pub mod command;
pub mod constants;
pub mod encode;
pub mod ids;

pub use command::{Command, CommandKind};
pub use constants::*;
pub use encode::encode;
pub use ids::HandType;

use thiserror::Error;

/// 发往 CAN bridge 的原始消息
///
/// 每次下发时重新构建，不在设备内保留。
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawMessage {
    /// CAN 接口名称（如 "can0"）
    pub interface: String,

    /// 仲裁 ID（由手型决定）
    pub id: u32,

    /// 帧数据（首字节为指令前缀，长度 ≤ 8）
    pub data: Vec<u8>,
}


/// 协议错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("Frame too long for {kind}: {len} bytes (max {max})")]
    FrameTooLong {
        kind: CommandKind,
        len: usize,
        max: usize,
    },

    #[error("Unsupported command type: {kind}")]
    UnsupportedCommand { kind: String },

    #[error("Invalid hand type: {value}")]
    InvalidHandType { value: String },
}
