//! 姿态扰动
//!
//! 对每个字节叠加 `[-max_delta, +max_delta]` 内的均匀随机偏移并截断到 `[0, 255]`，
//! 避免重复下发完全相同的指令。各字节独立采样。

use rand::Rng;
use serde::Deserialize;

/// 手指姿态默认扰动幅度
pub const FINGER_JITTER: u8 = 5;

/// 掌部姿态默认扰动幅度
pub const PALM_JITTER: u8 = 8;

/// 扰动幅度配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct JitterConfig {
    /// 手指姿态每字节最大偏移
    pub finger: u8,
    /// 掌部姿态每字节最大偏移
    pub palm: u8,
}

impl Default for JitterConfig {
    fn default() -> Self {
        Self {
            finger: FINGER_JITTER,
            palm: PALM_JITTER,
        }
    }
}

/// 使用线程本地 RNG 扰动单个字节
pub fn perturb(value: u8, max_delta: u8) -> u8 {
    perturb_with(&mut rand::thread_rng(), value, max_delta)
}

/// 使用指定 RNG 扰动单个字节
pub fn perturb_with<R: Rng + ?Sized>(rng: &mut R, value: u8, max_delta: u8) -> u8 {
    let delta = i16::from(max_delta);
    let offset = rng.gen_range(-delta..=delta);
    (i16::from(value) + offset).clamp(0, 255) as u8
}

/// 逐字节扰动整个姿态
pub fn perturb_pose(pose: &[u8], max_delta: u8) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    pose.iter()
        .map(|&v| perturb_with(&mut rng, v, max_delta))
        .collect()
}
