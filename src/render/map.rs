use std::io::Write;

use anyhow::Result;

use crate::{
    config::RenderConfig,
    io::{ColorScale, svg::{SvgStringWriter, multipolygon_to_path}},
    proj::AlbersUsa,
    region::EnrichedRegion,
};
use super::tooltip::{tooltip_attr, write_title};

/// Draw one filled, stroked path per region, with hover labels attached.
/// Regions without metrics use `config.missing_color`.
pub fn render_map(regions: &[EnrichedRegion], scale: &ColorScale, config: &RenderConfig) -> Result<String> {
    let albers = AlbersUsa::new(config.projection_scale, config.translate());

    let mut writer = SvgStringWriter::new();
    writer.write_header(config.width, config.height, Some("map"))?;

    for region in regions {
        let fill = scale.color_or(region.value(), config.missing_color);
        write!(writer,
            r#"<path class="region" d="{d}" style="stroke:{stroke};stroke-width:{width};fill:{fill}"{tip}>"#,
            d = multipolygon_to_path(&region.feature.shape, &albers),
            stroke = config.stroke_color,
            width = config.stroke_width,
            tip = tooltip_attr(region),
        )?;
        write_title(&mut writer, region)?;
        writeln!(writer, "</path>")?;
    }

    writer.write_footer()?;
    writer.into_string()
}
