//! 指令编码
//!
//! 将 [`Command`] 转换为 L10 专用的 CAN 消息。

use crate::constants::MAX_FRAME_LEN;
use crate::{Command, ProtocolError, RawMessage};

/// 将指令编码为 CAN 消息
///
/// 帧数据为 `prefix + payload`：
/// - `SetFingerPose`: `0x01` + 6 字节 = 7 字节
/// - `SetPalmPose`: `0x04` + 4 字节 = 5 字节
///
/// 纯函数，本身不加锁。驱动层在持有设备写锁期间调用，
/// 保证仲裁 ID 与接口名称读取自同一份设备状态。
///
/// # 错误
/// - `ProtocolError::FrameTooLong`: 组帧后超过 8 字节
pub fn encode(
    command: &Command,
    arbitration_id: u32,
    interface: &str,
) -> Result<RawMessage, ProtocolError> {
    let kind = command.kind();
    let payload = command.payload();

    let len = payload.len() + 1;
    if len > MAX_FRAME_LEN {
        return Err(ProtocolError::FrameTooLong {
            kind,
            len,
            max: MAX_FRAME_LEN,
        });
    }

    let mut data = Vec::with_capacity(len);
    data.push(kind.prefix());
    data.extend_from_slice(payload);

    Ok(RawMessage {
        interface: interface.to_string(),
        id: arbitration_id,
        data,
    })
}
