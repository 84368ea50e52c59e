//! 配置加载
//!
//! 优先级：命令行参数 > 配置文件 > 默认值。
//! 默认配置文件位于 `<config_dir>/dexhand/config.toml`。

use anyhow::{Context, Result};
use clap::Args;
use dexhand_driver::HandConfig;
use dexhand_protocol::HandType;
use std::path::PathBuf;

/// 未配置 id 时使用的设备 ID
const DEFAULT_DEVICE_ID: &str = "dexhand";

/// 默认配置文件路径
pub fn default_config_file() -> Result<PathBuf> {
    let mut path = dirs::config_dir().ok_or_else(|| anyhow::anyhow!("无法确定配置目录"))?;
    path.push("dexhand");
    path.push("config.toml");
    Ok(path)
}

/// 设备连接参数（覆盖配置文件）
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// 配置文件路径
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// 设备 ID
    #[arg(long, global = true)]
    pub id: Option<String>,

    /// CAN bridge 服务地址，例如 http://127.0.0.1:5260
    #[arg(short, long, global = true)]
    pub url: Option<String>,

    /// CAN 接口（如 can0）
    #[arg(short, long, global = true)]
    pub interface: Option<String>,

    /// 手型：left / right
    #[arg(long, global = true)]
    pub hand: Option<HandType>,
}

impl ConnectionArgs {
    /// 合并配置文件与命令行参数
    pub fn resolve(&self) -> Result<HandConfig> {
        let mut config = match &self.config {
            Some(path) => HandConfig::load(path)
                .with_context(|| format!("读取配置文件失败: {}", path.display()))?,
            None => {
                let path = default_config_file()?;
                if path.exists() {
                    HandConfig::load(&path)
                        .with_context(|| format!("读取配置文件失败: {}", path.display()))?
                } else {
                    tracing::debug!("No config file at {}, using defaults", path.display());
                    HandConfig::new(DEFAULT_DEVICE_ID, "")
                }
            },
        };

        self.apply(&mut config);
        config
            .validate()
            .context("配置不完整，请通过 --url 或配置文件指定 CAN bridge 地址")?;
        Ok(config)
    }

    fn apply(&self, config: &mut HandConfig) {
        if let Some(id) = &self.id {
            config.id = id.clone();
        }
        if let Some(url) = &self.url {
            config.can_service_url = url.clone();
        }
        if let Some(interface) = &self.interface {
            config.can_interface = interface.clone();
        }
        if let Some(hand) = self.hand {
            config.hand_type = hand;
        }
    }
}
