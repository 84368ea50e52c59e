//! 驱动层错误类型定义

use dexhand_can::CanError;
use dexhand_protocol::{CommandKind, ProtocolError};
use std::convert::Infallible;
use std::fmt;
use thiserror::Error;

/// 预设姿势中的执行步骤
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetStep {
    Finger,
    Palm,
}

impl fmt::Display for PresetStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresetStep::Finger => f.write_str("finger"),
            PresetStep::Palm => f.write_str("palm"),
        }
    }
}

/// 驱动层错误类型
#[derive(Error, Debug)]
pub enum DriverError {
    /// 姿态数据长度错误（在任何状态修改之前拒绝）
    #[error("Invalid {kind} payload length: expected {expected} bytes, got {actual}")]
    InvalidPayloadLength {
        kind: CommandKind,
        expected: usize,
        actual: usize,
    },

    /// 设备未连接或未激活
    #[error("Device {id} is not connected or not active")]
    DeviceUnavailable { id: String },

    /// 指令编码失败
    #[error("Failed to encode command: {0}")]
    EncodingFailed(#[source] ProtocolError),

    /// 发送失败（含超时）
    #[error("Failed to send command: {0}")]
    TransmissionFailed(#[source] CanError),

    /// 预设姿势不存在
    #[error("Preset '{0}' not found")]
    PresetNotFound(String),

    /// 预设姿势的某一步失败
    #[error("Preset '{preset}' {step} step failed: {source}")]
    PresetStep {
        preset: String,
        step: PresetStep,
        #[source]
        source: Box<DriverError>,
    },

    /// 协议错误（如无效手型）
    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// 传输层错误（诊断接口）
    #[error("CAN transport error: {0}")]
    Can(#[from] CanError),

    /// 传感器组件不存在
    #[error("Sensor not found")]
    SensorNotFound,

    /// 配置无效
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// 配置文件解析失败
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
}

impl DriverError {
    pub(crate) fn preset_step(preset: &str, step: PresetStep, source: DriverError) -> Self {
        DriverError::PresetStep {
            preset: preset.to_string(),
            step,
            source: Box::new(source),
        }
    }

    /// 是否由传输层失败引起（包括预设步骤中的传输失败）
    pub fn is_transmission_failure(&self) -> bool {
        match self {
            DriverError::TransmissionFailed(_) => true,
            DriverError::PresetStep { source, .. } => source.is_transmission_failure(),
            _ => false,
        }
    }
}

impl From<Infallible> for DriverError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
