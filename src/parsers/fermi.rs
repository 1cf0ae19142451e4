//! # 费米能提取器
//!
//! 从 `# EFERMI <value>` 注释行读取费米能（单位 Hartree）。
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 和 `commands/inspect.rs` 使用
//! - 使用 `models/units.rs` 的单位换算

use crate::error::{BsDosError, Result};
use crate::models::units::EnergyUnit;
use crate::parsers::DataKind;

use std::fs;
use std::path::Path;

/// 费米能标记
const EFERMI_MARKER: &str = "# EFERMI";

/// 从文本中提取费米能 (Hartree)，多行时以最后一行为准
///
/// 标记行的数值无法解析时报告行号。
pub fn parse_fermi_content(
    content: &str,
    format: &str,
    source_name: &str,
) -> Result<Option<f64>> {
    let mut fermi = None;

    for (idx, line) in content.lines().enumerate() {
        if !line.contains(EFERMI_MARKER) {
            continue;
        }

        let token = line.split_whitespace().last().unwrap_or_default();
        let value = token.parse::<f64>().map_err(|_| BsDosError::ParseError {
            format: format.to_string(),
            path: source_name.to_string(),
            line: idx + 1,
            reason: format!("invalid Fermi energy '{}'", token),
        })?;
        fermi = Some(value);
    }

    Ok(fermi)
}

/// 读取文件的费米能并换算到目标单位
pub fn read_fermi_energy(path: &Path, unit: EnergyUnit) -> Result<f64> {
    let content = fs::read_to_string(path).map_err(|e| BsDosError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let source = path.display().to_string();
    let format = DataKind::from_path(path)
        .map(DataKind::format_name)
        .unwrap_or("EFERMI");
    let hartree = parse_fermi_content(&content, format, &source)?
        .ok_or(BsDosError::FermiNotFound { path: source })?;

    Ok(unit.scale_from_hartree(hartree))
}

/// 格式化费米能输出行
pub fn format_fermi_energy(value: f64, unit: EnergyUnit) -> String {
    format!("Fermi Energy: {} {}", value, unit.plural_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::units::HARTREE_TO_EV;

    #[test]
    fn test_parse_fermi_last_wins() {
        let content = "# EFERMI   -0.10\n@ TITLE \"x\"\n# EFERMI   -0.25\n0.0 1.0\n";
        assert_eq!(parse_fermi_content(content, "BAND", "t").unwrap(), Some(-0.25));
    }

    #[test]
    fn test_parse_fermi_missing() {
        assert_eq!(parse_fermi_content("0.0 1.0\n", "BAND", "t").unwrap(), None);
    }

    #[test]
    fn test_parse_fermi_bad_value_reports_line() {
        let content = "@ TITLE \"x\"\n# EFERMI (HARTREE) abc\n0.0 1.0\n";
        match parse_fermi_content(content, "DOSS", "t.DOSS") {
            Err(BsDosError::ParseError { line, format, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(format, "DOSS");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_fermi_in_ev() {
        let ev = EnergyUnit::Ev.scale_from_hartree(-0.25);
        assert!((ev - (-0.25 * HARTREE_TO_EV)).abs() < 1e-12);
    }

    #[test]
    fn test_format_fermi_energy() {
        assert_eq!(
            format_fermi_energy(-0.25, EnergyUnit::Hartree),
            "Fermi Energy: -0.25 Hartrees"
        );
        assert!(format_fermi_energy(1.0, EnergyUnit::Ev).ends_with(" eV"));
    }
}
