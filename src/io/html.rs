//! Standalone HTML page hosting the map and legend inside `div#plot`.

use std::fmt::Write;

use anyhow::Result;

use super::svg::escape_xml;

const TOOLTIP_CSS: &str = r#"
.d3-tip {
  position: absolute;
  pointer-events: none;
  padding: 8px 10px;
  background: rgba(0, 0, 0, 0.8);
  color: #fff;
  border-radius: 2px;
  font: 12px sans-serif;
  line-height: 1.3;
  white-space: pre-line;
  visibility: hidden;
}
"#;

/// Shows the hovered region's `data-tip` 5px above the pointer; hides it on leave.
/// Native <title> tooltips are removed so only one tooltip shows.
const TOOLTIP_SCRIPT: &str = r#"
(function () {
  var plot = document.getElementById("plot");
  var tip = document.createElement("div");
  tip.className = "d3-tip";
  document.body.appendChild(tip);
  plot.querySelectorAll("path.region title").forEach(function (t) { t.remove(); });
  plot.querySelectorAll("path.region").forEach(function (path) {
    path.addEventListener("mouseover", function (event) {
      tip.textContent = path.getAttribute("data-tip");
      tip.style.visibility = "visible";
      tip.style.left = (event.pageX - tip.offsetWidth / 2) + "px";
      tip.style.top = (event.pageY - tip.offsetHeight - 5) + "px";
    });
    path.addEventListener("mouseout", function () {
      tip.style.visibility = "hidden";
    });
  });
})();
"#;

/// Assemble the page. Surfaces are appended to `div#plot` in order.
pub(crate) fn write_page(title: &str, surfaces: &[&str]) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, r#"<html lang="en">"#)?;
    writeln!(out, "<head>")?;
    writeln!(out, r#"<meta charset="utf-8">"#)?;
    writeln!(out, "<title>{}</title>", escape_xml(title))?;
    writeln!(out, "<style>{TOOLTIP_CSS}</style>")?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, r#"<div id="plot">"#)?;
    for surface in surfaces {
        out.push_str(surface);
    }
    writeln!(out, "</div>")?;
    writeln!(out, "<script>{TOOLTIP_SCRIPT}</script>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surfaces_land_inside_plot_in_order() {
        let page = write_page("EV <stations>", &["<svg id=\"a\"></svg>\n", "<svg id=\"b\"></svg>\n"]).unwrap();

        let plot = page.find(r#"<div id="plot">"#).unwrap();
        let a = page.find(r#"<svg id="a">"#).unwrap();
        let b = page.find(r#"<svg id="b">"#).unwrap();
        let end = page[plot..].find("</div>").unwrap() + plot;
        assert!(plot < a && a < b && b < end);

        assert!(page.contains("<title>EV &lt;stations&gt;</title>"));
        assert!(page.contains("mouseover") && page.contains("mouseout"));
    }
}
