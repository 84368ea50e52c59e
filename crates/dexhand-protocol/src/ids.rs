//! 手型与仲裁 ID 定义
//!
//! 左右手使用不同的 CAN 仲裁 ID，枚举值本身即为 ID。

use crate::ProtocolError;
use num_enum::IntoPrimitive;
use std::fmt;
use std::str::FromStr;

/// 左手仲裁 ID
pub const ID_LEFT_HAND: u32 = 0x28;

/// 右手仲裁 ID
pub const ID_RIGHT_HAND: u32 = 0x27;

/// 手型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u32)]
pub enum HandType {
    /// 左手
    Left = ID_LEFT_HAND,
    /// 右手（默认）
    #[default]
    Right = ID_RIGHT_HAND,
}

impl HandType {
    /// 该手型对应的 CAN 仲裁 ID
    pub fn arbitration_id(self) -> u32 {
        self.into()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HandType::Left => "left",
            HandType::Right => "right",
        }
    }
}

impl fmt::Display for HandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u32> for HandType {
    type Error = ProtocolError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            ID_LEFT_HAND => Ok(HandType::Left),
            ID_RIGHT_HAND => Ok(HandType::Right),
            _ => Err(ProtocolError::InvalidHandType {
                value: format!("0x{:X}", value),
            }),
        }
    }
}

impl TryFrom<&str> for HandType {
    type Error = ProtocolError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for HandType {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(HandType::Left),
            "right" => Ok(HandType::Right),
            _ => Err(ProtocolError::InvalidHandType {
                value: s.to_string(),
            }),
        }
    }
}
