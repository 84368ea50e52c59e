//! 通用指令类型
//!
//! 指令种类是封闭枚举：新增指令需要同时扩展 `Command`、`CommandKind`
//! 以及编码器中的匹配分支，由编译器检查遗漏。

use crate::ProtocolError;
use crate::constants::{FINGER_POSE_PREFIX, PALM_POSE_PREFIX};
use std::fmt;

/// 指令种类标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    SetFingerPose,
    SetPalmPose,
}

impl CommandKind {
    /// 外部接口使用的字符串标签
    pub fn as_str(self) -> &'static str {
        match self {
            CommandKind::SetFingerPose => "SetFingerPose",
            CommandKind::SetPalmPose => "SetPalmPose",
        }
    }

    /// 线上帧的前缀字节
    pub fn prefix(self) -> u8 {
        match self {
            CommandKind::SetFingerPose => FINGER_POSE_PREFIX,
            CommandKind::SetPalmPose => PALM_POSE_PREFIX,
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 设备指令
///
/// 负载长度在类型上不受约束，由上层姿态接口校验，编码器再做一次帧长检查。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 设置手指姿态（6 字节）
    SetFingerPose(Vec<u8>),
    /// 设置掌部姿态（4 字节）
    SetPalmPose(Vec<u8>),
}

impl Command {
    /// 从外部字符串标签构建指令
    ///
    /// # 错误
    /// - `ProtocolError::UnsupportedCommand`: 未知的指令标签
    pub fn from_kind(kind: &str, payload: Vec<u8>) -> Result<Self, ProtocolError> {
        match kind {
            "SetFingerPose" => Ok(Command::SetFingerPose(payload)),
            "SetPalmPose" => Ok(Command::SetPalmPose(payload)),
            _ => Err(ProtocolError::UnsupportedCommand {
                kind: kind.to_string(),
            }),
        }
    }

    pub fn kind(&self) -> CommandKind {
        match self {
            Command::SetFingerPose(_) => CommandKind::SetFingerPose,
            Command::SetPalmPose(_) => CommandKind::SetPalmPose,
        }
    }

    pub fn payload(&self) -> &[u8] {
        match self {
            Command::SetFingerPose(payload) | Command::SetPalmPose(payload) => payload,
        }
    }
}
