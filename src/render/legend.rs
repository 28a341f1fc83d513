//! Vertical color legend: a gradient bar with a value axis on its right.
//!
//! The axis reuses the color scale's domain, so the legend always reads the
//! same min/max the map was filled with.

use std::io::Write;

use anyhow::Result;

use crate::{
    config::LegendConfig,
    io::{ColorScale, svg::SvgStringWriter},
    scale::LinearScale,
};

/// Target tick count for the axis.
const TICK_COUNT: usize = 10;
const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;
/// Half-pixel shift that keeps 1px axis lines crisp.
const AXIS_OFFSET: f64 = 0.5;

/// Axis scale for the legend: the color domain over `[height, 0]`, large values on top.
pub fn legend_axis(scale: &ColorScale, legend: &LegendConfig) -> LinearScale {
    LinearScale::new(scale.domain(), (legend.height, 0.0))
}

pub fn render_legend(scale: &ColorScale, legend: &LegendConfig) -> Result<String> {
    let mut writer = SvgStringWriter::new();
    writer.write_header(legend.width, legend.height, Some("legend"))?;

    writeln!(writer, r#"<defs><linearGradient id="gradient" x1="100%" y1="0%" x2="100%" y2="100%" spreadMethod="pad">"#)?;
    writeln!(writer, r#"<stop offset="0%" stop-color="{}" stop-opacity="1"/>"#, scale.high().to_hex())?;
    writeln!(writer, r#"<stop offset="100%" stop-color="{}" stop-opacity="1"/>"#, scale.low().to_hex())?;
    writeln!(writer, "</linearGradient></defs>")?;

    writeln!(writer, r#"<rect width="{w}" height="{h}" style="fill:url(#gradient)" transform="translate(0,{dy})"/>"#,
        w = legend.bar_width,
        h = legend.height,
        dy = legend.offset,
    )?;

    write_axis(&mut writer, &legend_axis(scale, legend), legend.bar_width + 1.0, legend.offset)?;

    writer.write_footer()?;
    writer.into_string()
}

/// Right-oriented axis: domain line, then a tick mark and label per tick.
fn write_axis(writer: &mut impl Write, axis: &LinearScale, x: f64, y: f64) -> Result<()> {
    let (r0, r1) = axis.range();
    let format = axis.tick_format(TICK_COUNT);

    writeln!(writer, r#"<g class="y axis" transform="translate({x},{y})" fill="none" font-size="10" font-family="sans-serif" text-anchor="start">"#)?;
    writeln!(writer, r#"<path class="domain" stroke="currentColor" d="M{TICK_SIZE},{a}H{AXIS_OFFSET}V{b}H{TICK_SIZE}"/>"#,
        a = r0 + AXIS_OFFSET,
        b = r1 + AXIS_OFFSET,
    )?;
    for tick in axis.ticks(TICK_COUNT) {
        writeln!(writer,
            r#"<g class="tick" opacity="1" transform="translate(0,{ty})"><line stroke="currentColor" x2="{TICK_SIZE}"/><text fill="currentColor" x="{tx}" dy="0.32em">{label}</text></g>"#,
            ty = axis.scale(tick) + AXIS_OFFSET,
            tx = TICK_SIZE + TICK_PADDING,
            label = format(tick),
        )?;
    }
    writeln!(writer, "</g>")?;
    Ok(())
}
