//! Mock 通信器
//!
//! 用于测试的内存通信器：记录每次发送（含起止时间），可注入失败和延迟。

use crate::{CanError, Communicator, RawMessage};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// 一次发送记录
#[derive(Debug, Clone)]
pub struct SentMessage {
    pub message: RawMessage,
    /// 调用方给定的截止时间
    pub timeout: Duration,
    /// `send()` 进入时间
    pub started_at: Instant,
    /// `send()` 返回时间
    pub finished_at: Instant,
}

#[derive(Debug, Default)]
struct MockState {
    sent: Vec<SentMessage>,
    /// 每次发送的失败信息（None 表示成功）
    failure: Option<String>,
    /// 仅让第 N 次（从 0 开始）发送失败
    fail_at: Option<usize>,
    /// 模拟 bridge 处理耗时
    latency: Duration,
    attempts: usize,
    statuses: HashMap<String, bool>,
}

/// 模拟 CAN bridge
#[derive(Debug, Default)]
pub struct MockCommunicator {
    state: Mutex<MockState>,
}

impl MockCommunicator {
    /// 创建新的 Mock 通信器（所有发送成功，`can0` 可达）
    pub fn new() -> Self {
        let mock = Self::default();
        mock.state.lock().statuses.insert("can0".to_string(), true);
        mock
    }

    /// 之后的每次发送都失败
    pub fn fail_all(&self, message: impl Into<String>) {
        self.state.lock().failure = Some(message.into());
    }

    /// 仅第 `attempt` 次（从 0 开始计数）发送失败
    pub fn fail_at(&self, attempt: usize, message: impl Into<String>) {
        let mut state = self.state.lock();
        state.fail_at = Some(attempt);
        state.failure = Some(message.into());
    }

    /// 恢复为全部成功
    pub fn succeed(&self) {
        let mut state = self.state.lock();
        state.failure = None;
        state.fail_at = None;
    }

    /// 设置模拟延迟（超过截止时间时返回 `CanError::Timeout`）
    pub fn set_latency(&self, latency: Duration) {
        self.state.lock().latency = latency;
    }

    pub fn set_interface_status(&self, interface: impl Into<String>, reachable: bool) {
        self.state.lock().statuses.insert(interface.into(), reachable);
    }

    /// 成功发送的消息记录
    pub fn sent(&self) -> Vec<SentMessage> {
        self.state.lock().sent.clone()
    }

    /// 成功发送次数
    pub fn send_count(&self) -> usize {
        self.state.lock().sent.len()
    }

    /// 调用 `send()` 的总次数（含失败）
    pub fn attempt_count(&self) -> usize {
        self.state.lock().attempts
    }
}

impl Communicator for MockCommunicator {
    fn send(&self, message: &RawMessage, timeout: Duration) -> Result<(), CanError> {
        let started_at = Instant::now();

        let (attempt, latency, failure) = {
            let mut state = self.state.lock();
            let attempt = state.attempts;
            state.attempts += 1;
            let failure = match state.fail_at {
                Some(n) if n != attempt => None,
                _ => state.failure.clone(),
            };
            (attempt, state.latency, failure)
        };

        // 延迟期间不持有锁，允许并发调用方观察状态
        if !latency.is_zero() {
            std::thread::sleep(latency.min(timeout));
            if latency > timeout {
                return Err(CanError::Timeout);
            }
        }

        if let Some(reason) = failure {
            tracing::debug!("mock send #{} failing: {}", attempt, reason);
            return Err(CanError::Io(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                reason,
            )));
        }

        self.state.lock().sent.push(SentMessage {
            message: message.clone(),
            timeout,
            started_at,
            finished_at: Instant::now(),
        });
        Ok(())
    }

    fn interface_statuses(&self) -> Result<HashMap<String, bool>, CanError> {
        Ok(self.state.lock().statuses.clone())
    }
}
