//! # 能带结构图
//!
//! ## 依赖关系
//! - 被 `plot/mod.rs` 的 `save` 与并排图调用
//! - 使用 `models/band.rs` 与 `plot/ticks.rs`

use crate::error::Result;
use crate::models::BandStructure;
use crate::plot::ticks::{self, TickStyle};
use crate::plot::{padded_range, plot_err, style, Figure};

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::ops::{Range, RangeInclusive};

/// k 轴两端留白
const K_PADDING: f64 = 0.01;

/// 面板位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelSide {
    Single,
    /// 并排图左侧，无右边距
    Left,
}

/// 能带结构图
pub struct BandFigure<'a> {
    pub data: &'a BandStructure,
    /// 1 起始闭区间
    pub bands: RangeInclusive<usize>,
    /// 参考线能级
    pub reference: f64,
    pub title: String,
}

impl<'a> BandFigure<'a> {
    pub fn new(
        data: &'a BandStructure,
        bands: RangeInclusive<usize>,
        reference: f64,
        title: impl Into<String>,
    ) -> Self {
        Self {
            data,
            bands,
            reference,
            title: title.into(),
        }
    }

    /// 所选能带与参考线的能量范围
    pub fn energy_bounds(&self) -> Option<(f64, f64)> {
        let reference = self.reference;
        let merged = match self.data.energy_bounds(&self.bands) {
            Some((lo, hi)) => (lo.min(reference), hi.max(reference)),
            None => (reference, reference),
        };
        Some(merged)
    }
}

impl Figure for BandFigure<'_> {
    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()>
    where
        DB::ErrorType: 'static,
    {
        root.fill(&WHITE).map_err(plot_err)?;
        let y_range = padded_range(self.energy_bounds());
        draw_band_panel(root, self, y_range, PanelSide::Single)
    }
}

/// 绘制能带面板
pub(crate) fn draw_band_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    figure: &BandFigure,
    y_range: Range<f64>,
    side: PanelSide,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let data = figure.data;
    let labels = &data.labels;

    let k_min = data.kpoints.first().copied().unwrap_or(0.0).min(0.0);
    let k_max = data.k_max();
    let x_range = (k_min - K_PADDING)..(k_max + K_PADDING);

    let mut builder = ChartBuilder::on(area);
    builder
        .caption(
            &figure.title,
            (style::FONT_FAMILY, style::FONT_SIZE_CAPTION).into_font(),
        )
        .margin(style::MARGIN)
        .x_label_area_size(style::X_LABEL_AREA)
        .y_label_area_size(style::Y_LABEL_AREA);
    if side == PanelSide::Left {
        builder.margin_right(0);
    }

    let mut chart = builder
        .build_cartesian_2d(x_range, y_range.clone())
        .map_err(plot_err)?;

    // x 轴刻度由高对称点标签替代
    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(2)
        .x_label_formatter(&|_| String::new())
        .x_desc(labels.x_label.as_str())
        .y_desc(labels.y_label.as_str())
        .label_style((style::FONT_FAMILY, style::FONT_SIZE_LABEL))
        .axis_desc_style((style::FONT_FAMILY, style::FONT_SIZE_DESC))
        .draw()
        .map_err(plot_err)?;

    // 参考线
    chart
        .draw_series(LineSeries::new(
            vec![(k_min, figure.reference), (k_max, figure.reference)],
            style::REFERENCE_COLOR.stroke_width(style::LINE_WIDTH),
        ))
        .map_err(plot_err)?;

    for band in data.selected(&figure.bands) {
        chart
            .draw_series(LineSeries::new(
                data.kpoints.iter().copied().zip(band.iter().copied()),
                style::BAND_COLOR.stroke_width(style::LINE_WIDTH),
            ))
            .map_err(plot_err)?;
    }

    let (tick_labels, tick_style) = ticks::display_tick_labels(&labels.tick_labels);
    let pairs = ticks::tick_pairs(&labels.tick_positions, &tick_labels);

    chart
        .draw_series(pairs.iter().map(|(x, _)| {
            PathElement::new(
                vec![(*x, y_range.start), (*x, y_range.end)],
                style::TICK_LINE_COLOR.stroke_width(1),
            )
        }))
        .map_err(plot_err)?;

    let (anchor, offset) = match tick_style {
        TickStyle::Symbol => (Pos::new(HPos::Center, VPos::Top), (0, 8)),
        TickStyle::Raw => (Pos::new(HPos::Right, VPos::Top), (6, 8)),
    };
    let text_style = (style::FONT_FAMILY, style::FONT_SIZE_TICK)
        .into_font()
        .color(&style::TEXT_COLOR)
        .pos(anchor);

    chart
        .draw_series(pairs.iter().map(|(x, label)| {
            EmptyElement::at((*x, y_range.start))
                + Text::new(label.clone(), offset, text_style.clone())
        }))
        .map_err(plot_err)?;

    Ok(())
}
