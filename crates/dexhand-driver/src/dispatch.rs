//! 指令下发
//!
//! 所有 CAN 流量的唯一入口。每次下发：
//! 1. 获取写锁
//! 2. 检查连接/激活状态
//! 3. 编码
//! 4. 以固定截止时间调用通信器
//! 5. 把结果记入设备状态
//!
//! 不做重试：失败立即返回给调用方。

use crate::error::DriverError;
use crate::hand::Hand;
use crate::state::HandState;
use dexhand_protocol::{Command, ProtocolError, RawMessage};
use std::time::Duration;
use tracing::{debug, error};

/// 单次下发的截止时间
pub const DISPATCH_TIMEOUT: Duration = Duration::from_secs(3);

impl Hand {
    /// 执行一条通用指令
    ///
    /// 持有写锁直到通信器返回，因此同一只手同一时刻最多只有一帧在途。
    ///
    /// # 错误
    /// - `DriverError::DeviceUnavailable`: 设备未连接或未激活（不计入错误统计）
    /// - `DriverError::EncodingFailed`: 编码失败（计入错误统计）
    /// - `DriverError::TransmissionFailed`: 发送失败或超时（计入错误统计，连接状态不变）
    pub fn execute(&self, command: &Command) -> Result<(), DriverError> {
        let mut state = self.state.write();

        if !state.status.is_ready() {
            return Err(DriverError::DeviceUnavailable {
                id: self.id.clone(),
            });
        }

        let message = match self.encode_locked(&state, command) {
            Ok(message) => message,
            Err(e) => {
                state.record_failure(e.to_string());
                error!(
                    "{} ({}) failed to encode {}: {}",
                    self.id,
                    state.hand_type,
                    command.kind(),
                    e
                );
                return Err(DriverError::EncodingFailed(e));
            },
        };

        debug!(
            "{} -> {} ID: 0x{:X}, Data: {}",
            self.id,
            message.interface,
            message.id,
            hex::encode_upper(&message.data)
        );

        if let Err(e) = self.communicator.send(&message, DISPATCH_TIMEOUT) {
            state.record_failure(e.to_string());
            error!(
                "{} ({}) failed to send command: {} (ID: 0x{:X}, Data: {})",
                self.id,
                state.hand_type,
                e,
                message.id,
                hex::encode_upper(&message.data)
            );
            return Err(DriverError::TransmissionFailed(e));
        }

        state.record_success();
        Ok(())
    }

    /// 编码指令
    ///
    /// 只接受锁内状态的引用，调用方必须已持有写锁。
    fn encode_locked(
        &self,
        state: &HandState,
        command: &Command,
    ) -> Result<RawMessage, ProtocolError> {
        dexhand_protocol::encode(command, state.hand_type.arbitration_id(), &self.interface)
    }
}
