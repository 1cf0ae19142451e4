//! # 能带结构数据模型
//!
//! ## 依赖关系
//! - 由 `parsers/mod.rs` 构造
//! - 被 `plot/band.rs`, `export.rs`, `commands/` 使用

use crate::models::units::{self, EnergyData, EnergyUnit};
use crate::parsers::labels::BandLabels;

use std::ops::RangeInclusive;

/// 能带结构数据集
#[derive(Debug, Clone, PartialEq)]
pub struct BandStructure {
    /// 来源文件
    pub source: String,
    /// k 点路径坐标
    pub kpoints: Vec<f64>,
    /// 每条能带的能量序列
    pub bands: Vec<Vec<f64>>,
    pub labels: BandLabels,
    /// 文件中的费米能 (Hartree)
    pub fermi_hartree: Option<f64>,
}

impl BandStructure {
    pub fn band_count(&self) -> usize {
        self.bands.len()
    }

    /// k 点路径终点
    pub fn k_max(&self) -> f64 {
        self.kpoints.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// 按 1 起始闭区间取能带
    pub fn selected(&self, range: &RangeInclusive<usize>) -> &[Vec<f64>] {
        let start = range.start().saturating_sub(1).min(self.bands.len());
        let end = (*range.end()).min(self.bands.len()).max(start);
        &self.bands[start..end]
    }

    /// 所选能带的能量范围
    pub fn energy_bounds(&self, range: &RangeInclusive<usize>) -> Option<(f64, f64)> {
        bounds(self.selected(range).iter().flatten().copied())
    }
}

impl EnergyData for BandStructure {
    fn shift_energies(&mut self, delta: f64) {
        self.bands
            .iter_mut()
            .for_each(|b| units::shift_values(b, delta));
    }

    fn scale_energies(&mut self, factor: f64) {
        self.bands
            .iter_mut()
            .for_each(|b| units::scale_values(b, factor));
    }

    fn relabel_for_fermi(&mut self) {
        self.labels.y_label = units::fermi_label(&self.labels.y_label);
    }

    fn relabel_for_unit(&mut self, unit: EnergyUnit) {
        self.labels.y_label = units::unit_label(&self.labels.y_label, unit);
    }
}

/// 求最小/最大值，忽略 NaN
pub(crate) fn bounds(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::units::{EnergyTransform, HARTREE_TO_EV};
    use crate::parsers::labels::BAND_X_LABEL;

    fn sample() -> BandStructure {
        BandStructure {
            source: "test".to_string(),
            kpoints: vec![0.0, 0.5, 1.0],
            bands: vec![
                vec![-0.6, -0.5, -0.4],
                vec![-0.1, 0.0, 0.1],
                vec![0.3, 0.4, 0.5],
            ],
            labels: BandLabels {
                tick_labels: vec![],
                tick_positions: vec![],
                x_label: BAND_X_LABEL.to_string(),
                y_label: "E-EFERMI (HARTREE)".to_string(),
                title: "t".to_string(),
            },
            fermi_hartree: Some(-0.2),
        }
    }

    #[test]
    fn test_selected_and_bounds() {
        let bs = sample();
        assert_eq!(bs.selected(&(2..=3)).len(), 2);
        assert_eq!(bs.energy_bounds(&(2..=2)), Some((-0.1, 0.1)));
        assert_eq!(bs.energy_bounds(&(1..=3)), Some((-0.6, 0.5)));
        assert_eq!(bs.k_max(), 1.0);
    }

    #[test]
    fn test_transform_only_touches_bands() {
        let mut bs = sample();
        let reference = EnergyTransform::new(true, true).apply(&mut bs, -0.2);

        assert_eq!(bs.kpoints, vec![0.0, 0.5, 1.0]);
        assert!((bs.bands[1][1] - (-0.2 * HARTREE_TO_EV)).abs() < 1e-10);
        assert!((reference - (-0.2 * HARTREE_TO_EV)).abs() < 1e-10);
        assert_eq!(bs.labels.y_label, "ENERGY (eV)");
    }
}
