//! Hand API 模块
//!
//! 提供对外的 `Hand` 结构体。指令管线的各阶段分布在：
//! - `state`: 状态锁与连接状态
//! - `dispatch`: 加锁下发
//! - `pose`: 姿态接口
//! - `preset`: 预设姿势

use crate::component::{Component, SensorData};
use crate::error::DriverError;
use crate::perturb::JitterConfig;
use crate::preset::PresetCatalog;
use crate::state::HandState;
use dexhand_can::Communicator;
use dexhand_protocol::{HandType, L10_MODEL};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// L10 灵巧手设备
///
/// 线程安全：可以包装为 `Arc<Hand>` 在多个线程（动画引擎、预设执行、直接调用）之间共享。
/// 所有状态修改和 CAN 下发都通过同一把写锁串行化。
pub struct Hand {
    pub(crate) id: String,
    pub(crate) interface: String,
    pub(crate) communicator: Arc<dyn Communicator>,
    pub(crate) presets: Arc<dyn PresetCatalog>,
    pub(crate) jitter: JitterConfig,
    pub(crate) state: RwLock<HandState>,
}

impl Hand {
    /// 由 Builder 调用
    pub(crate) fn new(
        id: String,
        interface: String,
        hand_type: HandType,
        connected: bool,
        communicator: Arc<dyn Communicator>,
        presets: Arc<dyn PresetCatalog>,
        jitter: JitterConfig,
    ) -> Self {
        let mut state = HandState::new(hand_type, connected);

        let mut sensor = SensorData::new(interface.clone());
        sensor.mock_data();
        state.register(Component::Sensor(sensor));

        info!("Device {} ({}, {}) created", L10_MODEL, id, hand_type);

        Self {
            id,
            interface,
            communicator,
            presets,
            jitter,
            state: RwLock::new(state),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn model(&self) -> &'static str {
        L10_MODEL
    }

    /// CAN 接口名称
    pub fn interface(&self) -> &str {
        &self.interface
    }

    pub fn jitter(&self) -> JitterConfig {
        self.jitter
    }

    /// 查询 bridge 侧所有 CAN 接口的可达性（原样透传）
    pub fn can_status(&self) -> Result<HashMap<String, bool>, DriverError> {
        Ok(self.communicator.interface_statuses()?)
    }
}

impl std::fmt::Debug for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hand")
            .field("id", &self.id)
            .field("model", &L10_MODEL)
            .field("interface", &self.interface)
            .field("jitter", &self.jitter)
            .field("state", &*self.state.read())
            .finish_non_exhaustive()
    }
}
