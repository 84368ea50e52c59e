//! # Dexhand Driver
//!
//! L10 灵巧手的指令管线与设备状态管理。
//!
//! ## 指令管线
//!
//! ```text
//! set_finger_pose / set_palm_pose / execute_preset / reset_pose
//!         │  长度校验
//!         ▼
//!     perturb（逐字节扰动）
//!         │
//!         ▼
//!     execute（写锁 → 状态检查 → 编码 → 发送 → 记录结果）
//!         │
//!         ▼
//!     Communicator（CAN bridge）
//! ```
//!
//! ## 使用示例
//!
//! ```no_run
//! use dexhand_driver::HandBuilder;
//!
//! let hand = HandBuilder::new()
//!     .id("hand-right")
//!     .can_service_url("http://127.0.0.1:5260")
//!     .build()?;
//!
//! hand.execute_preset("fist")?;
//! hand.reset_pose()?;
//! # Ok::<(), dexhand_driver::DriverError>(())
//! ```

pub mod builder;
pub mod component;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod hand;
pub mod perturb;
pub mod pose;
pub mod preset;
pub mod state;

pub use builder::HandBuilder;
pub use component::{Component, ComponentType, SensorData};
pub use config::HandConfig;
pub use dispatch::DISPATCH_TIMEOUT;
pub use error::{DriverError, PresetStep};
pub use hand::Hand;
pub use perturb::JitterConfig;
pub use pose::{PoseExecutor, SETTLE_DELAY};
pub use preset::{PresetCatalog, PresetManager, PresetPose};
pub use state::DeviceStatus;

#[cfg(feature = "mock")]
pub use dexhand_can::mock;
