//! # 态密度图
//!
//! 能量画在纵轴、态密度画在横轴，便于与能带图并排对照。
//!
//! ## 依赖关系
//! - 被 `plot/mod.rs` 的 `save` 与并排图调用
//! - 使用 `models/dos.rs`

use crate::error::Result;
use crate::models::DensityOfStates;
use crate::plot::{padded_range, plot_err, style, Figure};

use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;

/// 面板位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelSide {
    Single,
    /// 并排图右侧：共享左侧能量轴，不画 y 轴
    Right,
}

/// 态密度图
pub struct DosFigure<'a> {
    pub data: &'a DensityOfStates,
    /// 参考线能级
    pub reference: f64,
    pub title: String,
}

impl<'a> DosFigure<'a> {
    pub fn new(data: &'a DensityOfStates, reference: f64, title: impl Into<String>) -> Self {
        Self {
            data,
            reference,
            title: title.into(),
        }
    }

    /// 能量网格与参考线的范围
    pub fn energy_bounds(&self) -> Option<(f64, f64)> {
        let reference = self.reference;
        self.data
            .energy_bounds()
            .map(|(lo, hi)| (lo.min(reference), hi.max(reference)))
    }

    /// 横轴上限：最后一列最大值向上取整
    pub fn density_limit(&self) -> f64 {
        let limit = self.data.max_total_density().ceil();
        if limit > 0.0 {
            limit
        } else {
            1.0
        }
    }
}

impl Figure for DosFigure<'_> {
    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()>
    where
        DB::ErrorType: 'static,
    {
        root.fill(&WHITE).map_err(plot_err)?;
        let y_range = padded_range(self.energy_bounds());
        draw_dos_panel(root, self, y_range, PanelSide::Single)
    }
}

/// 绘制态密度面板
pub(crate) fn draw_dos_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    figure: &DosFigure,
    y_range: Range<f64>,
    side: PanelSide,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let data = figure.data;
    let labels = &data.labels;

    let mut builder = ChartBuilder::on(area);
    builder
        .caption(
            &figure.title,
            (style::FONT_FAMILY, style::FONT_SIZE_CAPTION).into_font(),
        )
        .margin(style::MARGIN)
        .x_label_area_size(style::X_LABEL_AREA);
    match side {
        PanelSide::Single => {
            builder.y_label_area_size(style::Y_LABEL_AREA);
        }
        PanelSide::Right => {
            builder.margin_left(style::PANEL_GAP).y_label_area_size(0);
        }
    }

    let mut chart = builder
        .build_cartesian_2d(0.0..figure.density_limit(), y_range)
        .map_err(plot_err)?;

    {
        let mut mesh = chart.configure_mesh();
        mesh.disable_mesh()
            .x_desc(labels.y_label.as_str())
            .label_style((style::FONT_FAMILY, style::FONT_SIZE_LABEL))
            .axis_desc_style((style::FONT_FAMILY, style::FONT_SIZE_DESC));
        match side {
            PanelSide::Single => {
                mesh.y_desc(labels.x_label.as_str());
            }
            PanelSide::Right => {
                mesh.disable_y_axis();
            }
        }
        mesh.draw().map_err(plot_err)?;
    }

    // 参考线：从 0 画到总态密度最大值
    chart
        .draw_series(LineSeries::new(
            vec![
                (0.0, figure.reference),
                (data.max_total_density(), figure.reference),
            ],
            style::REFERENCE_COLOR.stroke_width(style::LINE_WIDTH),
        ))
        .map_err(plot_err)?;

    for (i, density) in data.densities.iter().enumerate() {
        chart
            .draw_series(LineSeries::new(
                density.iter().copied().zip(data.energies.iter().copied()),
                style::dos_color(i).stroke_width(style::LINE_WIDTH),
            ))
            .map_err(plot_err)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::labels::DosLabels;

    fn sample(max: f64) -> DensityOfStates {
        DensityOfStates {
            source: "test".to_string(),
            energies: vec![-0.3, 0.0, 0.3],
            densities: vec![vec![0.0, 0.5, 0.1], vec![0.0, max, 0.2]],
            labels: DosLabels {
                x_label: "E".to_string(),
                y_label: "DoS".to_string(),
                title: "Density of States".to_string(),
            },
            fermi_hartree: None,
        }
    }

    #[test]
    fn test_density_limit_rounds_up_last_column() {
        let dos = sample(2.3);
        assert_eq!(DosFigure::new(&dos, 0.0, "t").density_limit(), 3.0);

        let empty = sample(0.0);
        assert_eq!(DosFigure::new(&empty, 0.0, "t").density_limit(), 1.0);
    }

    #[test]
    fn test_energy_bounds_include_reference() {
        let dos = sample(1.0);
        let fig = DosFigure::new(&dos, -0.5, "t");
        assert_eq!(fig.energy_bounds(), Some((-0.5, 0.3)));
    }
}
