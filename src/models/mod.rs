//! # 数据模型模块
//!
//! 定义能带结构、态密度数据集以及能量变换、能带选择。
//!
//! ## 依赖关系
//! - 被 `parsers/`、`plot/` 和 `commands/` 使用
//! - 子模块: band, dos, selection, units

pub mod band;
pub mod dos;
pub mod selection;
pub mod units;

pub use band::BandStructure;
pub use dos::DensityOfStates;
pub use selection::BandSelection;
pub use units::EnergyTransform;
