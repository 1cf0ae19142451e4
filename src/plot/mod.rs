//! # 图表生成模块
//!
//! 使用 `plotters` 绘制能带结构图、态密度图以及两者并排的组合图。
//!
//! ## 功能
//! - PNG / SVG 输出
//! - 费米能参考线
//! - 高对称点刻度（`Γ X M K Γ` 自动替换）
//! - 并排模式共享能量轴
//!
//! ## 依赖关系
//! - 被 `commands/plot/` 调用
//! - 使用 `models/` 数据集
//! - 子模块: band, dos, ticks, style

pub mod band;
pub mod dos;
pub mod style;
pub mod ticks;

pub use band::BandFigure;
pub use dos::DosFigure;

use crate::error::{BsDosError, Result};

use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;
use std::path::{Path, PathBuf};

/// 能量轴留白比例
const Y_PADDING: f64 = 0.05;

/// 画布设置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
    pub svg: bool,
}

impl Canvas {
    pub fn new(size: (u32, u32), svg: bool) -> Self {
        Self {
            width: size.0,
            height: size.1,
            svg,
        }
    }

    pub fn extension(&self) -> &'static str {
        if self.svg {
            "svg"
        } else {
            "png"
        }
    }
}

/// 可绘制到任意后端的图
pub trait Figure {
    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()>
    where
        DB::ErrorType: 'static;
}

/// 绘图错误转换
pub(crate) fn plot_err<E: std::fmt::Debug>(e: E) -> BsDosError {
    BsDosError::PlotError(format!("{:?}", e))
}

/// 输出文件名：追加扩展名（已存在时不重复）
pub fn output_path(name: &Path, canvas: &Canvas) -> PathBuf {
    let ext = canvas.extension();
    let has_ext = name
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext));

    if has_ext {
        name.to_path_buf()
    } else {
        let mut os = name.as_os_str().to_os_string();
        os.push(".");
        os.push(ext);
        PathBuf::from(os)
    }
}

/// 将图保存到文件
pub fn save<F: Figure>(figure: &F, path: &Path, canvas: &Canvas) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| BsDosError::FileWriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let size = (canvas.width, canvas.height);
    if canvas.svg {
        let root = SVGBackend::new(path, size).into_drawing_area();
        figure.draw(&root)?;
        root.present().map_err(plot_err)?;
    } else {
        let root = BitMapBackend::new(path, size).into_drawing_area();
        figure.draw(&root)?;
        root.present().map_err(plot_err)?;
    }
    Ok(())
}

/// 合并若干 (min, max) 区间并加留白
pub(crate) fn padded_range(bounds: impl IntoIterator<Item = (f64, f64)>) -> Range<f64> {
    let (lo, hi) = bounds
        .into_iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (a, b)| {
            (lo.min(a), hi.max(b))
        });

    if !lo.is_finite() || !hi.is_finite() {
        return -1.0..1.0;
    }

    let span = hi - lo;
    if span <= f64::EPSILON {
        return (lo - 0.5)..(hi + 0.5);
    }
    (lo - span * Y_PADDING)..(hi + span * Y_PADDING)
}

/// 能带 + 态密度并排图，共享能量轴
pub struct SideBySideFigure<'a> {
    pub band: BandFigure<'a>,
    pub dos: DosFigure<'a>,
}

impl SideBySideFigure<'_> {
    pub fn energy_range(&self) -> Range<f64> {
        padded_range(
            self.band
                .energy_bounds()
                .into_iter()
                .chain(self.dos.energy_bounds()),
        )
    }
}

impl Figure for SideBySideFigure<'_> {
    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()>
    where
        DB::ErrorType: 'static,
    {
        root.fill(&WHITE).map_err(plot_err)?;

        // 左图多出 y 轴标签区、右图多出间距，使两侧绘图区等宽
        let (width, _) = root.dim_in_pixel();
        let split = (width + style::Y_LABEL_AREA).saturating_sub(style::PANEL_GAP) / 2;
        let (left, right) = root.split_horizontally(split as i32);

        let y_range = self.energy_range();
        band::draw_band_panel(&left, &self.band, y_range.clone(), band::PanelSide::Left)?;
        dos::draw_dos_panel(&right, &self.dos, y_range, dos::PanelSide::Right)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BandStructure, DensityOfStates};
    use crate::parsers::labels::{BandLabels, DosLabels};
    use crate::plot::ticks::HIGH_SYMMETRY_PATH;

    fn band_data(tick_labels: &[&str]) -> BandStructure {
        BandStructure {
            source: "t.BAND".to_string(),
            kpoints: vec![0.0, 0.25, 0.5, 0.75, 1.0],
            bands: vec![
                vec![-0.6, -0.55, -0.5, -0.55, -0.6],
                vec![0.1, 0.2, 0.3, 0.2, 0.1],
            ],
            labels: BandLabels {
                tick_labels: tick_labels.iter().map(|s| s.to_string()).collect(),
                tick_positions: vec![0.0, 0.25, 0.5, 0.75, 1.0],
                x_label: "k-points".to_string(),
                y_label: "E-EFERMI (HARTREE)".to_string(),
                title: "Band Structure".to_string(),
            },
            fermi_hartree: Some(-0.2),
        }
    }

    fn dos_data() -> DensityOfStates {
        DensityOfStates {
            source: "t.DOSS".to_string(),
            energies: vec![-0.9, -0.3, 0.0, 0.4],
            densities: vec![vec![0.0, 1.0, 0.5, 0.2], vec![0.1, 2.4, 1.0, 0.3]],
            labels: DosLabels {
                x_label: "E-EFERMI (HARTREE)".to_string(),
                y_label: "DoS".to_string(),
                title: "Density of States".to_string(),
            },
            fermi_hartree: Some(-0.2),
        }
    }

    fn render_svg<F: Figure>(figure: &F, size: (u32, u32)) -> Result<String> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
            figure.draw(&root)?;
            root.present().map_err(plot_err)?;
        }
        Ok(svg)
    }

    #[test]
    fn test_output_path_appends_extension() {
        let png = Canvas::new((10, 10), false);
        let svg = Canvas::new((10, 10), true);
        assert_eq!(output_path(Path::new("out/mgo"), &png), PathBuf::from("out/mgo.png"));
        assert_eq!(output_path(Path::new("mgo.png"), &png), PathBuf::from("mgo.png"));
        assert_eq!(output_path(Path::new("mgo.v1"), &svg), PathBuf::from("mgo.v1.svg"));
    }

    #[test]
    fn test_band_bounds_include_reference_line() {
        let bs = band_data(&[]);
        let below = BandFigure::new(&bs, 1..=2, -1.5, "t");
        assert_eq!(below.energy_bounds(), Some((-1.5, 0.3)));

        let inside = BandFigure::new(&bs, 2..=2, 0.0, "t");
        assert_eq!(inside.energy_bounds(), Some((0.0, 0.3)));
    }

    #[test]
    fn test_side_by_side_range_is_union_of_panels() {
        let bs = band_data(&[]);
        let dos = dos_data();
        let figure = SideBySideFigure {
            band: BandFigure::new(&bs, 1..=2, 0.5, "bands"),
            dos: DosFigure::new(&dos, 0.5, "dos"),
        };

        // 下界来自态密度能量网格，上界来自参考线
        let expected = padded_range(vec![(-0.9, 0.5)]);
        assert_eq!(figure.energy_range(), expected);
        assert!(figure.energy_range().start < -0.9);
        assert!(figure.energy_range().end > 0.5);
    }

    #[test]
    fn test_split_leaves_equal_plot_widths() {
        let (width, _) = style::SIDE_BY_SIDE_SIZE;
        let split = (width + style::Y_LABEL_AREA - style::PANEL_GAP) / 2;
        let left_plot = split - style::Y_LABEL_AREA;
        let right_plot = width - split - style::PANEL_GAP;
        assert!(left_plot.abs_diff(right_plot) <= 1);
    }

    #[test]
    fn test_figures_render_to_svg() {
        let symbols = band_data(&HIGH_SYMMETRY_PATH);
        let raw = band_data(&["A", "B", "C"]);
        let dos = dos_data();

        let band_svg = render_svg(
            &BandFigure::new(&symbols, 1..=2, -0.2, "Band Structure"),
            style::SINGLE_PANEL_SIZE,
        )
        .unwrap();
        assert!(band_svg.contains("<svg"));
        assert!(band_svg.contains("Γ"));

        assert!(render_svg(
            &BandFigure::new(&raw, 2..=2, 0.0, "raw"),
            style::SINGLE_PANEL_SIZE
        )
        .is_ok());

        let dos_svg = render_svg(
            &DosFigure::new(&dos, -0.2, "Density of States"),
            style::SINGLE_PANEL_SIZE,
        )
        .unwrap();
        assert!(dos_svg.contains("Density of States"));

        let both = SideBySideFigure {
            band: BandFigure::new(&symbols, 1..=2, -0.2, "Band Structure"),
            dos: DosFigure::new(&dos, -0.2, "Density of States"),
        };
        assert!(render_svg(&both, style::SIDE_BY_SIDE_SIZE).is_ok());
    }

    #[test]
    fn test_save_writes_svg_file() {
        let bs = band_data(&[]);
        let dir = std::env::temp_dir().join(format!("bsdos_plot_{}", std::process::id()));
        let canvas = Canvas::new((400, 500), true);
        let path = output_path(&dir.join("bands"), &canvas);

        save(&BandFigure::new(&bs, 1..=2, 0.0, "t"), &path, &canvas).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_dir_all(&dir).ok();

        assert!(path.ends_with("bands.svg"));
        assert!(written.contains("<svg"));
    }

    #[test]
    fn test_padded_range() {
        let r = padded_range(vec![(0.0, 1.0), (-1.0, 0.5)]);
        assert!((r.start - (-1.1)).abs() < 1e-12);
        assert!((r.end - 1.1).abs() < 1e-12);

        let flat = padded_range(vec![(2.0, 2.0)]);
        assert_eq!(flat, 1.5..2.5);

        assert_eq!(padded_range(Vec::new()), -1.0..1.0);
    }
}
