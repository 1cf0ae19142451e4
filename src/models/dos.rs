//! # 态密度数据模型
//!
//! ## 依赖关系
//! - 由 `parsers/mod.rs` 构造
//! - 被 `plot/dos.rs`, `export.rs`, `commands/` 使用

use crate::models::band::bounds;
use crate::models::units::{self, EnergyData, EnergyUnit};
use crate::parsers::labels::DosLabels;

/// 态密度数据集
#[derive(Debug, Clone, PartialEq)]
pub struct DensityOfStates {
    /// 来源文件
    pub source: String,
    /// 能量网格
    pub energies: Vec<f64>,
    /// 各投影的态密度序列
    pub densities: Vec<Vec<f64>>,
    pub labels: DosLabels,
    /// 文件中的费米能 (Hartree)
    pub fermi_hartree: Option<f64>,
}

impl DensityOfStates {
    pub fn projection_count(&self) -> usize {
        self.densities.len()
    }

    /// 最后一列（通常为总态密度）的最大值
    pub fn max_total_density(&self) -> f64 {
        self.densities
            .last()
            .and_then(|d| bounds(d.iter().copied()))
            .map(|(_, hi)| hi)
            .unwrap_or(0.0)
    }

    /// 所有态密度列的范围
    pub fn density_bounds(&self) -> Option<(f64, f64)> {
        bounds(self.densities.iter().flatten().copied())
    }

    pub fn energy_bounds(&self) -> Option<(f64, f64)> {
        bounds(self.energies.iter().copied())
    }
}

impl EnergyData for DensityOfStates {
    fn shift_energies(&mut self, delta: f64) {
        units::shift_values(&mut self.energies, delta);
    }

    fn scale_energies(&mut self, factor: f64) {
        units::scale_values(&mut self.energies, factor);
    }

    fn relabel_for_fermi(&mut self) {
        self.labels.x_label = units::fermi_label(&self.labels.x_label);
    }

    // 态密度数值不随单位缩放，仅改写标签
    fn relabel_for_unit(&mut self, unit: EnergyUnit) {
        self.labels.x_label = units::unit_label(&self.labels.x_label, unit);
        self.labels.y_label = units::unit_label(&self.labels.y_label, unit);
    }
}
