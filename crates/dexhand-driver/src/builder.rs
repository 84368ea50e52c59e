//! Builder 模式实现
//!
//! 提供链式构造 `Hand` 实例的便捷方式。

use crate::config::HandConfig;
use crate::error::DriverError;
use crate::hand::Hand;
use crate::perturb::JitterConfig;
use crate::preset::{PresetCatalog, PresetManager};
use dexhand_can::{CanBridgeClient, Communicator};
use dexhand_protocol::{DEFAULT_CAN_INTERFACE, HandType};
use std::sync::Arc;
use tracing::info;

/// Hand Builder（链式构造）
///
/// # Example
///
/// ```no_run
/// use dexhand_driver::HandBuilder;
/// use dexhand_protocol::HandType;
///
/// let hand = HandBuilder::new()
///     .id("hand-left")
///     .can_service_url("http://127.0.0.1:5260")
///     .hand_type(HandType::Left)
///     .build()
///     .unwrap();
/// ```
#[derive(Default)]
pub struct HandBuilder {
    id: Option<String>,
    /// CAN bridge 地址（注入通信器时可省略）
    can_service_url: Option<String>,
    /// CAN 接口名称（默认 "can0"）
    interface: Option<String>,
    hand_type: Option<HandType>,
    assume_connected: Option<bool>,
    jitter: Option<JitterConfig>,
    communicator: Option<Arc<dyn Communicator>>,
    presets: Option<Arc<dyn PresetCatalog>>,
}

impl HandBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从配置初始化全部字段
    pub fn from_config(config: HandConfig) -> Self {
        Self {
            id: Some(config.id),
            can_service_url: Some(config.can_service_url),
            interface: Some(config.can_interface),
            hand_type: Some(config.hand_type),
            assume_connected: Some(config.assume_connected_on_start),
            jitter: Some(config.jitter),
            communicator: None,
            presets: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn can_service_url(mut self, url: impl Into<String>) -> Self {
        self.can_service_url = Some(url.into());
        self
    }

    /// 设置 CAN 接口（可选，默认 "can0"）
    pub fn interface(mut self, interface: impl Into<String>) -> Self {
        self.interface = Some(interface.into());
        self
    }

    pub fn hand_type(mut self, hand_type: HandType) -> Self {
        self.hand_type = Some(hand_type);
        self
    }

    /// 构造后是否直接视为已连接（可选，默认 true）
    pub fn assume_connected(mut self, connected: bool) -> Self {
        self.assume_connected = Some(connected);
        self
    }

    pub fn jitter(mut self, jitter: JitterConfig) -> Self {
        self.jitter = Some(jitter);
        self
    }

    /// 注入通信器（测试或自定义传输）
    ///
    /// 设置后不再创建 HTTP bridge 客户端。
    pub fn communicator(mut self, communicator: Arc<dyn Communicator>) -> Self {
        self.communicator = Some(communicator);
        self
    }

    /// 注入预设目录（可选，默认 L10 内置手势）
    pub fn presets(mut self, presets: Arc<dyn PresetCatalog>) -> Self {
        self.presets = Some(presets);
        self
    }

    /// 构建 `Hand` 实例
    ///
    /// # 错误
    /// - `DriverError::InvalidConfig`: id 或接口为空，或既没有注入通信器也没有 bridge 地址
    /// - `DriverError::Can(InvalidUrl)`: bridge 地址无法解析
    pub fn build(self) -> Result<Hand, DriverError> {
        let id = non_blank(self.id, "id")?;
        let interface = self
            .interface
            .or_else(|| Some(DEFAULT_CAN_INTERFACE.to_string()));
        let interface = non_blank(interface, "can_interface")?;

        let communicator: Arc<dyn Communicator> = match self.communicator {
            Some(communicator) => communicator,
            None => {
                let url = non_blank(self.can_service_url, "can_service_url")?;
                let client = CanBridgeClient::new(&url)?;
                info!("Using CAN bridge at {}", client.base_url());
                Arc::new(client)
            },
        };

        let presets = self
            .presets
            .unwrap_or_else(|| Arc::new(PresetManager::with_l10_presets()));

        Ok(Hand::new(
            id,
            interface,
            self.hand_type.unwrap_or_default(),
            self.assume_connected.unwrap_or(true),
            communicator,
            presets,
            self.jitter.unwrap_or_default(),
        ))
    }
}

/// 缺失或仅含空白的字段视为无效配置
fn non_blank(value: Option<String>, field: &str) -> Result<String, DriverError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| DriverError::InvalidConfig(format!("{} must not be empty", field)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dexhand_can::CanError;
    use dexhand_can::mock::MockCommunicator;

    #[test]
    fn test_defaults() {
        let hand = HandBuilder::new()
            .id("h")
            .communicator(Arc::new(MockCommunicator::new()))
            .build()
            .unwrap();

        assert_eq!(hand.id(), "h");
        assert_eq!(hand.model(), "L10");
        assert_eq!(hand.interface(), "can0");
        assert_eq!(hand.hand_type(), HandType::Right);
        assert!(hand.status().is_ready());
        assert_eq!(hand.jitter(), JitterConfig::default());
        assert!(hand.supported_presets().contains(&"fist".to_string()));
    }

    #[test]
    fn test_missing_id() {
        let err = HandBuilder::new()
            .communicator(Arc::new(MockCommunicator::new()))
            .build()
            .unwrap_err();
        assert!(matches!(err, DriverError::InvalidConfig(_)));
    }

    #[test]
    fn test_missing_url_without_communicator() {
        let err = HandBuilder::new().id("h").build().unwrap_err();
        assert!(matches!(err, DriverError::InvalidConfig(_)));
    }

    #[test]
    fn test_blank_interface_rejected() {
        let mock = Arc::new(MockCommunicator::new());
        let mut config = HandConfig::new("h", "http://127.0.0.1:5260");
        config.can_interface = "  ".to_string();

        let err = HandBuilder::from_config(config)
            .communicator(mock.clone())
            .build()
            .unwrap_err();
        assert!(
            matches!(err, DriverError::InvalidConfig(ref msg) if msg.contains("can_interface"))
        );

        let err = HandBuilder::new()
            .id("h")
            .interface("")
            .communicator(mock.clone())
            .build()
            .unwrap_err();
        assert!(matches!(err, DriverError::InvalidConfig(_)));
        assert_eq!(mock.attempt_count(), 0);
    }

    #[test]
    fn test_blank_id_and_url_rejected() {
        let err = HandBuilder::new()
            .id(" ")
            .communicator(Arc::new(MockCommunicator::new()))
            .build()
            .unwrap_err();
        assert!(matches!(err, DriverError::InvalidConfig(ref msg) if msg.contains("id")));

        let err = HandBuilder::new()
            .id("h")
            .can_service_url("   ")
            .build()
            .unwrap_err();
        assert!(
            matches!(err, DriverError::InvalidConfig(ref msg) if msg.contains("can_service_url"))
        );
    }

    #[test]
    fn test_bad_url() {
        let err = HandBuilder::new()
            .id("h")
            .can_service_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, DriverError::Can(CanError::InvalidUrl(_))));
    }

    #[test]
    fn test_bridge_client_is_created() {
        let hand = HandBuilder::new()
            .id("h")
            .can_service_url("http://127.0.0.1:5260/")
            .build()
            .unwrap();
        assert_eq!(hand.id(), "h");
    }

    #[test]
    fn test_from_config() {
        let mut config = HandConfig::new("cfg-hand", "http://127.0.0.1:5260");
        config.hand_type = HandType::Left;
        config.can_interface = "can1".to_string();
        config.assume_connected_on_start = false;

        let hand = HandBuilder::from_config(config)
            .communicator(Arc::new(MockCommunicator::new()))
            .build()
            .unwrap();

        assert_eq!(hand.hand_type(), HandType::Left);
        assert_eq!(hand.interface(), "can1");
        assert!(!hand.status().is_ready());
    }

    #[test]
    fn test_sensor_registered() {
        let hand = HandBuilder::new()
            .id("h")
            .interface("can2")
            .communicator(Arc::new(MockCommunicator::new()))
            .build()
            .unwrap();

        let sensor = hand.read_sensor_data().unwrap();
        assert_eq!(sensor.interface, "can2");
    }
}
