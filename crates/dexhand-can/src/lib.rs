//! # Dexhand CAN Transport Layer
//!
//! CAN bridge 传输抽象层，提供统一的发送接口。
//!
//! 设备本身不直接操作 CAN 硬件，而是把编码好的 [`RawMessage`] 交给
//! 一个 bridge 服务，由后者写入对应的 CAN 接口。

use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

// 重新导出 dexhand-protocol 中的 RawMessage
pub use dexhand_protocol::RawMessage;

pub mod bridge;

pub use bridge::CanBridgeClient;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

/// 传输层统一错误类型
#[derive(Error, Debug)]
pub enum CanError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP 层错误（连接失败、请求构建失败等）
    #[error("HTTP Error: {0}")]
    Http(#[from] reqwest::Error),

    /// 超过调用方给定的截止时间
    #[error("Send timeout")]
    Timeout,

    /// bridge 服务返回非 2xx 状态
    #[error("Bridge rejected request (status {status}): {body}")]
    Bridge { status: u16, body: String },

    #[error("Invalid bridge URL: {0}")]
    InvalidUrl(String),

    #[error("Decode error: {0}")]
    Decode(String),
}

impl CanError {
    /// 是否为超时错误
    pub fn is_timeout(&self) -> bool {
        matches!(self, CanError::Timeout)
    }
}

/// 通信器 Trait
///
/// 语义：
/// - `send()`: 阻塞直到 bridge 确认或超过 `timeout`
/// - `interface_statuses()`: 查询 bridge 侧各 CAN 接口的可达性
///
/// 实现必须可以跨线程共享，驱动层以 `Arc<dyn Communicator>` 持有。
pub trait Communicator: Send + Sync {
    /// 发送一条消息
    ///
    /// # 错误处理
    /// - 超过截止时间 → `CanError::Timeout`
    /// - bridge 拒绝 → `CanError::Bridge`
    /// - 网络错误 → `CanError::Http` 或 `CanError::Io`
    fn send(&self, message: &RawMessage, timeout: Duration) -> Result<(), CanError>;

    /// 查询所有接口状态（接口名 → 是否可达）
    fn interface_statuses(&self) -> Result<HashMap<String, bool>, CanError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_error_display() {
        assert_eq!(CanError::Timeout.to_string(), "Send timeout");

        let err = CanError::Bridge {
            status: 503,
            body: "interface down".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("503") && msg.contains("interface down"), "{}", msg);
    }

    #[test]
    fn test_can_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "test");
        let can_err: CanError = io_err.into();
        assert!(matches!(can_err, CanError::Io(_)));
        assert!(!can_err.is_timeout());
    }

    #[test]
    fn test_communicator_as_trait_object() {
        let mock = std::sync::Arc::new(mock::MockCommunicator::new());
        let comm: std::sync::Arc<dyn Communicator> = mock.clone();
        let msg = RawMessage {
            interface: "can0".to_string(),
            id: 0x27,
            data: vec![0x01],
        };
        comm.send(&msg, Duration::from_secs(1)).unwrap();
        assert_eq!(mock.send_count(), 1);
    }
}
