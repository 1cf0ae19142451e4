//! # 能量单位与参考能级变换
//!
//! 先做费米能平移，再做 Hartree → eV 换算，并同步改写坐标轴标签。
//!
//! ## 顺序
//! 1. 费米参考：所有能量值加上费米能 (Hartree)，`E-EFERMI` → `ENERGY`
//! 2. eV 输出：所有能量值与费米能乘以换算因子，`HARTREE` → `eV`
//!
//! ## 依赖关系
//! - 被 `models/band.rs`, `models/dos.rs` 实现
//! - 被 `commands/plot/` 调用

/// Hartree → eV 换算因子
pub const HARTREE_TO_EV: f64 = 27.211386245988;

/// 能量单位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnergyUnit {
    #[default]
    Hartree,
    Ev,
}

impl EnergyUnit {
    /// 由 eV 开关选择单位
    pub fn from_ev_flag(ev: bool) -> Self {
        if ev {
            EnergyUnit::Ev
        } else {
            EnergyUnit::Hartree
        }
    }

    /// 相对 Hartree 的倍数
    pub fn factor(self) -> f64 {
        match self {
            EnergyUnit::Hartree => 1.0,
            EnergyUnit::Ev => HARTREE_TO_EV,
        }
    }

    pub fn scale_from_hartree(self, value: f64) -> f64 {
        value * self.factor()
    }

    /// 输出费米能时使用的单位名
    pub fn plural_name(self) -> &'static str {
        match self {
            EnergyUnit::Hartree => "Hartrees",
            EnergyUnit::Ev => "eV",
        }
    }
}

impl std::fmt::Display for EnergyUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnergyUnit::Hartree => write!(f, "Hartree"),
            EnergyUnit::Ev => write!(f, "eV"),
        }
    }
}

/// 可做能量变换的数据集
pub trait EnergyData {
    /// 平移所有能量值
    fn shift_energies(&mut self, delta: f64);

    /// 缩放所有能量值
    fn scale_energies(&mut self, factor: f64);

    /// 费米参考后的标签改写
    fn relabel_for_fermi(&mut self);

    /// 单位换算后的标签改写
    fn relabel_for_unit(&mut self, unit: EnergyUnit);
}

/// 变换选项
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EnergyTransform {
    /// 以费米能为参考输出绝对能量
    pub fermi_reference: bool,
    /// 输出单位
    pub unit: EnergyUnit,
}

impl EnergyTransform {
    pub fn new(fermi_reference: bool, ev: bool) -> Self {
        Self {
            fermi_reference,
            unit: EnergyUnit::from_ev_flag(ev),
        }
    }

    /// 原地变换数据集，返回参考线所在能级（已换算单位）
    ///
    /// 未启用费米参考时 `fermi_hartree` 被忽略，参考能级为 0。
    pub fn apply<T: EnergyData>(&self, data: &mut T, fermi_hartree: f64) -> f64 {
        let mut reference = 0.0;

        if self.fermi_reference {
            reference = fermi_hartree;
            data.shift_energies(fermi_hartree);
            data.relabel_for_fermi();
        }

        if self.unit != EnergyUnit::Hartree {
            reference = self.unit.scale_from_hartree(reference);
            data.scale_energies(self.unit.factor());
            data.relabel_for_unit(self.unit);
        }

        reference
    }
}

/// 平移一列数值
pub fn shift_values(values: &mut [f64], delta: f64) {
    values.iter_mut().for_each(|v| *v += delta);
}

/// 缩放一列数值
pub fn scale_values(values: &mut [f64], factor: f64) {
    values.iter_mut().for_each(|v| *v *= factor);
}

/// `E-EFERMI` → `ENERGY`
pub fn fermi_label(label: &str) -> String {
    label.replace("E-EFERMI", "ENERGY")
}

/// `HARTREE` → 目标单位名
pub fn unit_label(label: &str, unit: EnergyUnit) -> String {
    match unit {
        EnergyUnit::Hartree => label.to_string(),
        EnergyUnit::Ev => label.replace("HARTREE", "eV"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Series {
        values: Vec<f64>,
        label: String,
    }

    impl EnergyData for Series {
        fn shift_energies(&mut self, delta: f64) {
            shift_values(&mut self.values, delta);
        }
        fn scale_energies(&mut self, factor: f64) {
            scale_values(&mut self.values, factor);
        }
        fn relabel_for_fermi(&mut self) {
            self.label = fermi_label(&self.label);
        }
        fn relabel_for_unit(&mut self, unit: EnergyUnit) {
            self.label = unit_label(&self.label, unit);
        }
    }

    fn sample() -> Series {
        Series {
            values: vec![-0.5, -0.1, 0.0, 0.3],
            label: "E-EFERMI (HARTREE)".to_string(),
        }
    }

    #[test]
    fn test_fermi_shift_round_trip() {
        let original = sample();
        let mut s = original.clone();
        shift_values(&mut s.values, -0.2345);
        shift_values(&mut s.values, 0.2345);
        for (a, b) in s.values.iter().zip(&original.values) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_ev_conversion_is_linear_and_invertible() {
        let unit = EnergyUnit::Ev;
        let (a, b) = (0.37, -1.25);
        let lhs = unit.scale_from_hartree(2.0 * a + b);
        let rhs = 2.0 * unit.scale_from_hartree(a) + unit.scale_from_hartree(b);
        assert!((lhs - rhs).abs() < 1e-10);
        assert!((unit.scale_from_hartree(a) / unit.factor() - a).abs() < 1e-12);
    }

    #[test]
    fn test_apply_identity() {
        let mut s = sample();
        let reference = EnergyTransform::default().apply(&mut s, -0.2);
        assert_eq!(reference, 0.0);
        assert_eq!(s, sample());
    }

    #[test]
    fn test_apply_fermi_then_ev() {
        let mut s = sample();
        let transform = EnergyTransform::new(true, true);
        let reference = transform.apply(&mut s, -0.2);

        assert!((reference - (-0.2 * HARTREE_TO_EV)).abs() < 1e-10);
        assert!((s.values[0] - (-0.7 * HARTREE_TO_EV)).abs() < 1e-10);
        assert_eq!(s.label, "ENERGY (eV)");
    }

    #[test]
    fn test_apply_ev_only_keeps_zero_reference() {
        let mut s = sample();
        let reference = EnergyTransform::new(false, true).apply(&mut s, -0.2);
        assert_eq!(reference, 0.0);
        assert_eq!(s.label, "E-EFERMI (eV)");
        assert!((s.values[3] - 0.3 * HARTREE_TO_EV).abs() < 1e-10);
    }
}
