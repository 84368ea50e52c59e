//! 预设姿势
//!
//! 预设 = 手指姿态 + 可选的掌部姿态。执行时先下发手指，
//! 若掌部非空，等待 [`SETTLE_DELAY`] 后再下发掌部。

use crate::error::{DriverError, PresetStep};
use crate::hand::Hand;
use crate::pose::SETTLE_DELAY;
use std::collections::BTreeMap;
use tracing::info;

/// 预设姿势
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetPose {
    pub name: String,
    pub description: String,
    /// 6 字节手指姿态
    pub finger_pose: Vec<u8>,
    /// 4 字节掌部姿态，为空时跳过掌部步骤
    pub palm_pose: Vec<u8>,
}

impl PresetPose {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        finger_pose: &[u8],
        palm_pose: &[u8],
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            finger_pose: finger_pose.to_vec(),
            palm_pose: palm_pose.to_vec(),
        }
    }
}

/// 预设目录
///
/// 驱动只读取目录，不关心预设存放在哪里。
pub trait PresetCatalog: Send + Sync {
    fn get(&self, name: &str) -> Option<PresetPose>;

    /// 所有预设名称（按字母序）
    fn names(&self) -> Vec<String>;

    /// 预设描述，未知名称返回空字符串
    fn description(&self, name: &str) -> String {
        self.get(name).map(|p| p.description).unwrap_or_default()
    }
}

/// 内存中的预设目录
#[derive(Debug, Clone, Default)]
pub struct PresetManager {
    presets: BTreeMap<String, PresetPose>,
}

impl PresetManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// 包含 L10 内置手势的目录
    pub fn with_l10_presets() -> Self {
        let mut manager = Self::new();
        for preset in l10_presets() {
            manager.register(preset);
        }
        manager
    }

    /// 注册预设（同名覆盖）
    pub fn register(&mut self, preset: PresetPose) {
        self.presets.insert(preset.name.clone(), preset);
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl PresetCatalog for PresetManager {
    fn get(&self, name: &str) -> Option<PresetPose> {
        self.presets.get(name).cloned()
    }

    fn names(&self) -> Vec<String> {
        self.presets.keys().cloned().collect()
    }
}

/// L10 内置手势
pub fn l10_presets() -> Vec<PresetPose> {
    vec![
        PresetPose::new("fist", "握拳", &[255, 255, 255, 255, 255, 255], &[128, 128, 128, 128]),
        PresetPose::new("open", "张开手掌", &[0, 0, 0, 0, 0, 0], &[128, 128, 128, 128]),
        PresetPose::new("pinch", "拇指与食指捏取", &[200, 200, 0, 0, 0, 0], &[200, 96, 128, 128]),
        PresetPose::new("point", "食指指向", &[255, 0, 255, 255, 255, 255], &[]),
        PresetPose::new(
            "thumbs_up",
            "竖起大拇指",
            &[0, 255, 255, 255, 255, 255],
            &[64, 128, 128, 128],
        ),
        PresetPose::new("peace", "剪刀手", &[255, 0, 0, 255, 255, 255], &[]),
        PresetPose::new("ok", "OK 手势", &[180, 180, 0, 0, 0, 0], &[180, 110, 128, 128]),
        PresetPose::new("rock", "摇滚手势", &[255, 0, 255, 255, 0, 255], &[]),
    ]
}

impl Hand {
    /// 执行预设姿势
    ///
    /// # 错误
    /// - `DriverError::PresetNotFound`: 名称未注册（不触发任何下发）
    /// - `DriverError::PresetStep`: 手指或掌部步骤失败，`source` 为原始错误
    pub fn execute_preset(&self, name: &str) -> Result<(), DriverError> {
        let preset = self
            .presets
            .get(name)
            .ok_or_else(|| DriverError::PresetNotFound(name.to_string()))?;

        info!("{} ({}) executing preset: {}", self.id, self.hand_type(), name);

        self.set_finger_pose(&preset.finger_pose)
            .map_err(|e| DriverError::preset_step(name, PresetStep::Finger, e))?;

        if !preset.palm_pose.is_empty() {
            spin_sleep::sleep(SETTLE_DELAY);
            self.set_palm_pose(&preset.palm_pose)
                .map_err(|e| DriverError::preset_step(name, PresetStep::Palm, e))?;
        }

        info!("{} preset '{}' done", self.id, name);
        Ok(())
    }

    /// 支持的预设名称（按字母序）
    pub fn supported_presets(&self) -> Vec<String> {
        self.presets.names()
    }

    pub fn preset_description(&self, name: &str) -> String {
        self.presets.description(name)
    }

    pub fn preset_details(&self, name: &str) -> Option<PresetPose> {
        self.presets.get(name)
    }
}
