//! 设备配置
//!
//! 从 TOML 加载：
//!
//! ```toml
//! id = "hand-right"
//! can_service_url = "http://127.0.0.1:5260"
//! can_interface = "can0"
//! hand_type = "right"
//!
//! [jitter]
//! finger = 5
//! palm = 8
//! ```

use crate::error::DriverError;
use crate::perturb::JitterConfig;
use dexhand_protocol::{DEFAULT_CAN_INTERFACE, HandType};
use serde::Deserialize;
use std::path::Path;

/// 单只手的构造参数
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HandConfig {
    /// 设备 ID（必填）
    pub id: String,
    /// CAN bridge 服务地址（必填）
    pub can_service_url: String,
    #[serde(default = "default_interface")]
    pub can_interface: String,
    #[serde(default)]
    pub hand_type: HandType,
    /// 构造后是否直接视为已连接
    ///
    /// 目前没有真实的握手流程，默认为 true。
    #[serde(default = "default_true")]
    pub assume_connected_on_start: bool,
    #[serde(default)]
    pub jitter: JitterConfig,
}

fn default_interface() -> String {
    DEFAULT_CAN_INTERFACE.to_string()
}

fn default_true() -> bool {
    true
}

impl HandConfig {
    /// 使用默认接口和手型创建配置
    pub fn new(id: impl Into<String>, can_service_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            can_service_url: can_service_url.into(),
            can_interface: default_interface(),
            hand_type: HandType::default(),
            assume_connected_on_start: true,
            jitter: JitterConfig::default(),
        }
    }

    /// 从 TOML 字符串解析并校验
    pub fn from_toml_str(content: &str) -> Result<Self, DriverError> {
        let config: HandConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// 从文件加载
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DriverError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), DriverError> {
        if self.id.trim().is_empty() {
            return Err(DriverError::InvalidConfig("id must not be empty".to_string()));
        }
        if self.can_service_url.trim().is_empty() {
            return Err(DriverError::InvalidConfig(
                "can_service_url must not be empty".to_string(),
            ));
        }
        if self.can_interface.trim().is_empty() {
            return Err(DriverError::InvalidConfig(
                "can_interface must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
