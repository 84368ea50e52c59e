//! 姿态命令

use crate::validation::parse_pose;
use anyhow::{Context, Result};
use clap::Args;
use dexhand_driver::Hand;
use dexhand_protocol::{FINGER_POSE_LEN, PALM_POSE_LEN};

/// 手指姿态参数
#[derive(Args, Debug)]
pub struct FingerCommand {
    /// 6 个姿态值（0~255），逗号分隔
    /// 例如：64,64,64,64,64,64
    pub pose: String,
}

impl FingerCommand {
    pub fn execute(&self, hand: &Hand) -> Result<()> {
        let pose = parse_pose(&self.pose, FINGER_POSE_LEN)?;
        hand.set_finger_pose(&pose).context("下发手指姿态失败")?;
        println!("✅ 手指姿态已下发: {:?}", pose);
        Ok(())
    }
}

/// 掌部姿态参数
#[derive(Args, Debug)]
pub struct PalmCommand {
    /// 4 个姿态值（0~255），逗号分隔
    /// 例如：128,128,128,128
    pub pose: String,
}

impl PalmCommand {
    pub fn execute(&self, hand: &Hand) -> Result<()> {
        let pose = parse_pose(&self.pose, PALM_POSE_LEN)?;
        hand.set_palm_pose(&pose).context("下发掌部姿态失败")?;
        println!("✅ 掌部姿态已下发: {:?}", pose);
        Ok(())
    }
}

/// 复位到默认姿态
pub fn reset(hand: &Hand) -> Result<()> {
    hand.reset_pose().context("复位失败")?;
    println!("✅ 已复位");
    Ok(())
}
