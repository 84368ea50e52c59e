//! 输入验证模块

use anyhow::{Context, Result};

/// 解析逗号分隔的姿态字节，例如 `64,64,64,64,64,64`
///
/// # 错误
/// - 任一项不是 0~255 的整数
/// - 数量不等于 `expected_len`
pub fn parse_pose(input: &str, expected_len: usize) -> Result<Vec<u8>> {
    let pose: Vec<u8> = input
        .split(',')
        .map(|s| s.trim().parse::<u8>())
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("解析姿态失败（每项应为 0~255）: {}", input))?;

    if pose.len() != expected_len {
        anyhow::bail!("需要 {} 个姿态值，得到 {} 个", expected_len, pose.len());
    }

    Ok(pose)
}
