//! # 图表样式常量
//!
//! 字体、尺寸与配色集中定义。

use plotters::style::RGBColor;

pub const FONT_FAMILY: &str = "sans-serif";

pub const FONT_SIZE_CAPTION: i32 = 28;
pub const FONT_SIZE_LABEL: i32 = 16;
pub const FONT_SIZE_DESC: i32 = 18;
pub const FONT_SIZE_TICK: i32 = 18;

pub const MARGIN: u32 = 20;
pub const X_LABEL_AREA: u32 = 70;
pub const Y_LABEL_AREA: u32 = 80;
/// 并排图两面板间距，避免末端刻度标签与态密度 0 刻度重叠
pub const PANEL_GAP: u32 = 30;

/// 单图默认尺寸 (4×5 英寸 @ 200 dpi)
pub const SINGLE_PANEL_SIZE: (u32, u32) = (800, 1000);
/// 并排图默认尺寸 (8×5 英寸 @ 200 dpi)
pub const SIDE_BY_SIDE_SIZE: (u32, u32) = (1600, 1000);

/// 费米能/零点参考线
pub const REFERENCE_COLOR: RGBColor = RGBColor(214, 39, 40);
/// 能带曲线
pub const BAND_COLOR: RGBColor = RGBColor(0, 0, 0);
/// 高对称点竖线
pub const TICK_LINE_COLOR: RGBColor = RGBColor(31, 119, 180);
pub const TEXT_COLOR: RGBColor = RGBColor(0, 0, 0);

pub const LINE_WIDTH: u32 = 2;

/// 态密度曲线循环配色 (tab10)
const DOS_PALETTE: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

pub fn dos_color(index: usize) -> RGBColor {
    DOS_PALETTE[index % DOS_PALETTE.len()]
}
