//! 设备组件
//!
//! 组件只是数据容器，由驱动原样返回给调用方，不参与指令管线。

use rand::Rng;
use std::time::SystemTime;

/// 指尖数量
pub const FINGERTIP_COUNT: usize = 5;

/// 组件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentType {
    Sensor,
}

/// 设备组件
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Sensor(SensorData),
}

impl Component {
    pub fn component_type(&self) -> ComponentType {
        match self {
            Component::Sensor(_) => ComponentType::Sensor,
        }
    }
}

/// 压力传感器数据
#[derive(Debug, Clone, PartialEq)]
pub struct SensorData {
    /// 传感器所在 CAN 接口
    pub interface: String,
    /// 指尖压力 [拇指, 食指, 中指, 无名指, 小指]
    pub fingertip_pressure: [u8; FINGERTIP_COUNT],
    /// 采样时间
    pub timestamp: SystemTime,
}

impl SensorData {
    /// 创建空读数
    pub fn new(interface: impl Into<String>) -> Self {
        Self {
            interface: interface.into(),
            fingertip_pressure: [0; FINGERTIP_COUNT],
            timestamp: SystemTime::now(),
        }
    }

    /// 填充模拟读数
    ///
    /// 传感器反馈帧尚未接入，先用随机值占位。
    pub fn mock_data(&mut self) {
        let mut rng = rand::thread_rng();
        for p in self.fingertip_pressure.iter_mut() {
            *p = rng.gen_range(0..=100);
        }
        self.timestamp = SystemTime::now();
    }
}
