//! 姿态接口
//!
//! 手指姿态 6 字节，掌部姿态 4 字节。下发前逐字节扰动。

use crate::error::DriverError;
use crate::hand::Hand;
use crate::perturb::perturb_pose;
use dexhand_protocol::{Command, CommandKind, FINGER_POSE_LEN, PALM_POSE_LEN};
use std::time::Duration;
use tracing::info;

/// 手指与掌部两步之间的稳定延时
pub const SETTLE_DELAY: Duration = Duration::from_millis(20);

/// 复位时的手指姿态
pub const DEFAULT_FINGER_POSE: [u8; FINGER_POSE_LEN] = [64; FINGER_POSE_LEN];

/// 复位时的掌部姿态
pub const DEFAULT_PALM_POSE: [u8; PALM_POSE_LEN] = [128; PALM_POSE_LEN];

/// 姿态执行器
///
/// 外部动画引擎只依赖这个接口，可被多个线程同时调用。
pub trait PoseExecutor: Send + Sync {
    fn set_finger_pose(&self, pose: &[u8]) -> Result<(), DriverError>;

    fn set_palm_pose(&self, pose: &[u8]) -> Result<(), DriverError>;

    /// 回到默认姿态（先手指，后掌部）
    fn reset_pose(&self) -> Result<(), DriverError>;
}

fn check_len(kind: CommandKind, expected: usize, pose: &[u8]) -> Result<(), DriverError> {
    if pose.len() != expected {
        return Err(DriverError::InvalidPayloadLength {
            kind,
            expected,
            actual: pose.len(),
        });
    }
    Ok(())
}

impl Hand {
    /// 设置手指姿态
    ///
    /// # 错误
    /// - `DriverError::InvalidPayloadLength`: 长度不是 6（不触发任何下发，也不计入错误统计）
    /// - 其余错误见 [`Hand::execute`]
    pub fn set_finger_pose(&self, pose: &[u8]) -> Result<(), DriverError> {
        check_len(CommandKind::SetFingerPose, FINGER_POSE_LEN, pose)?;

        let perturbed = perturb_pose(pose, self.jitter.finger);
        self.execute(&Command::SetFingerPose(perturbed.clone()))?;

        info!("{} finger pose sent: {:?}", self.id, perturbed);
        Ok(())
    }

    /// 设置掌部姿态
    pub fn set_palm_pose(&self, pose: &[u8]) -> Result<(), DriverError> {
        check_len(CommandKind::SetPalmPose, PALM_POSE_LEN, pose)?;

        let perturbed = perturb_pose(pose, self.jitter.palm);
        self.execute(&Command::SetPalmPose(perturbed.clone()))?;

        info!("{} palm pose sent: {:?}", self.id, perturbed);
        Ok(())
    }

    /// 复位到默认姿态
    ///
    /// 手指失败时直接返回，不再下发掌部。
    pub fn reset_pose(&self) -> Result<(), DriverError> {
        info!("Resetting {} to default pose", self.id);

        self.set_finger_pose(&DEFAULT_FINGER_POSE)?;
        spin_sleep::sleep(SETTLE_DELAY);
        self.set_palm_pose(&DEFAULT_PALM_POSE)
    }
}

impl PoseExecutor for Hand {
    fn set_finger_pose(&self, pose: &[u8]) -> Result<(), DriverError> {
        Hand::set_finger_pose(self, pose)
    }

    fn set_palm_pose(&self, pose: &[u8]) -> Result<(), DriverError> {
        Hand::set_palm_pose(self, pose)
    }

    fn reset_pose(&self) -> Result<(), DriverError> {
        Hand::reset_pose(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::HandBuilder;
    use dexhand_can::mock::MockCommunicator;
    use std::sync::Arc;

    fn setup() -> (Arc<MockCommunicator>, Hand) {
        let mock = Arc::new(MockCommunicator::new());
        let hand = HandBuilder::new()
            .id("pose-test")
            .communicator(mock.clone())
            .build()
            .unwrap();
        (mock, hand)
    }

    #[test]
    fn test_finger_pose_is_perturbed_within_bounds() {
        let (mock, hand) = setup();
        hand.set_finger_pose(&[10, 20, 30, 40, 50, 60]).unwrap();

        let sent = mock.sent();
        assert_eq!(sent.len(), 1);
        let data = &sent[0].message.data;
        assert_eq!(data[0], 0x01);
        for (got, want) in data[1..].iter().zip([10u8, 20, 30, 40, 50, 60]) {
            assert!(got.abs_diff(want) <= 5, "{} vs {}", got, want);
        }
    }

    #[test]
    fn test_wrong_length_rejected_before_dispatch() {
        let (mock, hand) = setup();

        let err = hand.set_palm_pose(&[1, 2, 3]).unwrap_err();
        assert!(matches!(
            err,
            DriverError::InvalidPayloadLength {
                kind: CommandKind::SetPalmPose,
                expected: 4,
                actual: 3
            }
        ));
        assert_eq!(mock.attempt_count(), 0);
        assert_eq!(hand.status().error_count, 0);
    }

    #[test]
    fn test_reset_sends_defaults() {
        let (mock, hand) = setup();
        hand.reset_pose().unwrap();

        let sent = mock.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].message.data[0], 0x01);
        assert_eq!(sent[1].message.data[0], 0x04);
        assert!(sent[0].message.data[1..].iter().all(|&b| (59..=69).contains(&b)));
        assert!(sent[1].message.data[1..].iter().all(|&b| (120..=136).contains(&b)));
    }

    #[test]
    fn test_pose_executor_object() {
        let (mock, hand) = setup();
        let executor: Arc<dyn PoseExecutor> = Arc::new(hand);
        executor.set_palm_pose(&[0; 4]).unwrap();
        assert_eq!(mock.send_count(), 1);
    }
}
