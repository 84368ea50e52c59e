//! 协议常量定义
//!
//! 集中定义帧格式相关的常量，避免在代码中散落"魔法数"。

/// CAN 2.0 帧数据最大长度
pub const MAX_FRAME_LEN: usize = 8;

/// 手指姿态指令前缀
pub const FINGER_POSE_PREFIX: u8 = 0x01;

/// 掌部姿态指令前缀
pub const PALM_POSE_PREFIX: u8 = 0x04;

/// 手指姿态负载长度（6 个自由度）
pub const FINGER_POSE_LEN: usize = 6;

/// 掌部姿态负载长度
pub const PALM_POSE_LEN: usize = 4;

/// 默认 CAN 接口名称
pub const DEFAULT_CAN_INTERFACE: &str = "can0";

/// 设备型号
pub const L10_MODEL: &str = "L10";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payloads_fit_in_frame() {
        // 前缀 + 负载 不超过 CAN 帧上限
        assert!(1 + FINGER_POSE_LEN <= MAX_FRAME_LEN);
        assert!(1 + PALM_POSE_LEN <= MAX_FRAME_LEN);
    }

    #[test]
    fn test_prefixes_are_distinct() {
        assert_ne!(FINGER_POSE_PREFIX, PALM_POSE_PREFIX);
    }
}
