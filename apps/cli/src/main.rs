//! # Dexhand CLI
//!
//! Command-line interface for L10 dexterous hand control.
//!
//! ```bash
//! # 列出预设姿势
//! dexhand-cli --url http://127.0.0.1:5260 presets
//!
//! # 执行预设、复位
//! dexhand-cli --url http://127.0.0.1:5260 --hand left preset fist
//! dexhand-cli reset
//!
//! # 直接下发姿态
//! dexhand-cli finger 64,64,64,64,64,64
//! dexhand-cli palm 128,128,128,128
//! ```
//!
//! 未指定 `--url` 时从 `<config_dir>/dexhand/config.toml` 读取。

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dexhand_driver::HandBuilder;

mod commands;
mod config;
mod validation;

use commands::{FingerCommand, PalmCommand, PresetCommand};
use config::ConnectionArgs;

/// Dexhand CLI - 灵巧手命令行工具
#[derive(Parser, Debug)]
#[command(name = "dexhand-cli")]
#[command(about = "Command-line interface for L10 dexterous hand control", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 列出预设姿势
    Presets,

    /// 执行预设姿势
    Preset {
        #[command(flatten)]
        args: PresetCommand,
    },

    /// 回到默认姿态
    Reset,

    /// 设置手指姿态
    Finger {
        #[command(flatten)]
        args: FingerCommand,
    },

    /// 设置掌部姿态
    Palm {
        #[command(flatten)]
        args: PalmCommand,
    },

    /// 查询设备与 CAN 接口状态
    Status,

    /// 读取传感器数据
    Sensor,
}

fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dexhand=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    let config = cli.connection.resolve()?;
    let hand = HandBuilder::from_config(config)
        .build()
        .context("创建设备失败")?;

    match cli.command {
        Commands::Presets => commands::preset::list(&hand),
        Commands::Preset { args } => args.execute(&hand),
        Commands::Reset => commands::pose::reset(&hand),
        Commands::Finger { args } => args.execute(&hand),
        Commands::Palm { args } => args.execute(&hand),
        Commands::Status => commands::status::status(&hand),
        Commands::Sensor => commands::status::sensor(&hand),
    }
}
