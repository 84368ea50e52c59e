//! 预设姿势命令

use anyhow::{Context, Result};
use clap::Args;
use dexhand_driver::Hand;

/// 执行预设姿势
#[derive(Args, Debug)]
pub struct PresetCommand {
    /// 预设名称（使用 `presets` 查看）
    pub name: String,
}

impl PresetCommand {
    pub fn execute(&self, hand: &Hand) -> Result<()> {
        hand.execute_preset(&self.name)
            .with_context(|| format!("执行预设姿势 '{}' 失败", self.name))?;
        println!("✅ 预设姿势 '{}' 执行完成", self.name);
        Ok(())
    }
}

/// 列出所有预设
pub fn list(hand: &Hand) -> Result<()> {
    println!("{} 支持的预设姿势:", hand.model());
    for name in hand.supported_presets() {
        let description = hand.preset_description(&name);
        if description.is_empty() {
            println!("  {}", name);
        } else {
            println!("  {:<12} {}", name, description);
        }
    }
    Ok(())
}
