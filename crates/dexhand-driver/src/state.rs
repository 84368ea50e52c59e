//! 设备状态
//!
//! 每只手持有一把读写锁，同时保护手型、运行状态和组件注册表：
//! 状态读取永远不会看到只应用了一半的下发结果。

use crate::component::{Component, ComponentType, SensorData};
use crate::error::DriverError;
use crate::hand::Hand;
use dexhand_protocol::HandType;
use std::collections::HashMap;
use std::time::SystemTime;
use tracing::{info, warn};

/// 设备运行状态（快照）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceStatus {
    pub is_connected: bool,
    pub is_active: bool,
    /// 编码/发送失败累计次数
    pub error_count: u32,
    /// 最近一次失败的描述（无失败时为空）
    pub last_error: String,
    /// 最近一次成功下发或连接状态变化的时间
    pub last_update: SystemTime,
}

impl DeviceStatus {
    pub(crate) fn new(connected: bool) -> Self {
        Self {
            is_connected: connected,
            is_active: connected,
            error_count: 0,
            last_error: String::new(),
            last_update: SystemTime::now(),
        }
    }

    /// 是否允许下发指令
    pub fn is_ready(&self) -> bool {
        self.is_connected && self.is_active
    }
}

/// 锁内状态
#[derive(Debug)]
pub(crate) struct HandState {
    pub(crate) hand_type: HandType,
    pub(crate) status: DeviceStatus,
    pub(crate) components: HashMap<ComponentType, Vec<Component>>,
}

impl HandState {
    pub(crate) fn new(hand_type: HandType, connected: bool) -> Self {
        Self {
            hand_type,
            status: DeviceStatus::new(connected),
            components: HashMap::new(),
        }
    }

    pub(crate) fn register(&mut self, component: Component) {
        self.components
            .entry(component.component_type())
            .or_default()
            .push(component);
    }

    pub(crate) fn record_success(&mut self) {
        self.status.last_update = SystemTime::now();
    }

    pub(crate) fn record_failure(&mut self, message: String) {
        self.status.error_count = self.status.error_count.saturating_add(1);
        self.status.last_error = message;
    }

    fn set_link(&mut self, up: bool) {
        self.status.is_connected = up;
        self.status.is_active = up;
        self.status.last_update = SystemTime::now();
    }
}

impl Hand {
    /// 获取状态快照
    pub fn status(&self) -> DeviceStatus {
        self.state.read().status.clone()
    }

    /// 标记设备为已连接并激活
    ///
    /// 目前不探测 bridge 或硬件是否可达，总是成功。
    pub fn connect(&self) {
        self.state.write().set_link(true);
        info!("Device {} connected", self.id);
    }

    /// 标记设备为断开
    pub fn disconnect(&self) {
        self.state.write().set_link(false);
        info!("Device {} disconnected", self.id);
    }

    pub fn hand_type(&self) -> HandType {
        self.state.read().hand_type
    }

    /// 切换手型（同时改变之后所有消息的仲裁 ID）
    ///
    /// 接受 `HandType`、`"left"`/`"right"` 或仲裁 ID（`u32`）。
    ///
    /// # 错误
    /// - `DriverError::Protocol(InvalidHandType)`: 无法识别的手型，状态不变
    pub fn set_hand_type<T>(&self, hand_type: T) -> Result<(), DriverError>
    where
        T: TryInto<HandType>,
        DriverError: From<T::Error>,
    {
        let hand_type = hand_type.try_into()?;
        let mut state = self.state.write();
        if state.hand_type != hand_type {
            warn!(
                "Device {} hand type changed: {} -> {}",
                self.id, state.hand_type, hand_type
            );
        }
        state.hand_type = hand_type;
        Ok(())
    }

    /// 获取指定类型的组件（副本）
    pub fn components(&self, component_type: ComponentType) -> Vec<Component> {
        self.state
            .read()
            .components
            .get(&component_type)
            .cloned()
            .unwrap_or_default()
    }

    /// 读取第一个传感器的数据
    pub fn read_sensor_data(&self) -> Result<SensorData, DriverError> {
        let state = self.state.read();
        state
            .components
            .get(&ComponentType::Sensor)
            .into_iter()
            .flatten()
            .find_map(|comp| match comp {
                Component::Sensor(data) => Some(data.clone()),
            })
            .ok_or(DriverError::SensorNotFound)
    }
}
