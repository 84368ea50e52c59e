//! 状态查询命令

use anyhow::{Context, Result};
use dexhand_driver::Hand;
use std::time::UNIX_EPOCH;

/// 打印设备状态与 CAN 接口状态
pub fn status(hand: &Hand) -> Result<()> {
    let status = hand.status();

    println!("设备: {} ({})", hand.id(), hand.model());
    println!("  手型: {}", hand.hand_type());
    println!("  接口: {}", hand.interface());
    println!("  已连接: {}", status.is_connected);
    println!("  已激活: {}", status.is_active);
    println!("  错误次数: {}", status.error_count);
    if !status.last_error.is_empty() {
        println!("  最近错误: {}", status.last_error);
    }
    if let Ok(since) = status.last_update.duration_since(UNIX_EPOCH) {
        println!("  最近更新: {:.3}s", since.as_secs_f64());
    }

    let mut interfaces: Vec<_> = hand
        .can_status()
        .context("查询 CAN 接口状态失败")?
        .into_iter()
        .collect();
    interfaces.sort();

    println!("CAN 接口:");
    for (name, up) in interfaces {
        println!("  {:<8} {}", name, if up { "✅ 可用" } else { "❌ 不可用" });
    }
    Ok(())
}

/// 打印传感器读数
pub fn sensor(hand: &Hand) -> Result<()> {
    let data = hand.read_sensor_data()?;
    println!("传感器 ({}):", data.interface);
    println!("  指尖压力: {:?}", data.fingertip_pressure);
    Ok(())
}
