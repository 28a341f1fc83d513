//! SVG writing operations.

use std::{borrow::Cow, io::Write};

use anyhow::{Context, Result};

/// In-memory SVG writer; output is embedded inline in the HTML page.
pub(crate) struct SvgStringWriter {
    buffer: Vec<u8>
}

/// Implement std::io::Write so `write!` / `writeln!` work.
impl Write for SvgStringWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        std::io::Result::Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> { std::io::Result::Ok(()) }

    fn write_all(&mut self, buf: &[u8]) -> std::io::Result<()> {
        self.buffer.extend_from_slice(buf);
        std::io::Result::Ok(())
    }
}

impl SvgStringWriter {
    pub(crate) fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Get the SVG string
    pub(crate) fn into_string(self) -> Result<String> {
        String::from_utf8(self.buffer)
            .context("[io::svg] SVG output is not valid UTF-8")
    }

    /// Write the opening <svg> tag of an inline surface.
    pub(crate) fn write_header(&mut self, width: f64, height: f64, class: Option<&str>) -> Result<()> {
        write!(self, r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}""#)?;
        if let Some(class) = class {
            write!(self, r#" class="{}""#, escape_xml(class))?;
        }
        writeln!(self, ">")?;
        Ok(())
    }

    /// Write the closing </svg> tag.
    pub(crate) fn write_footer(&mut self) -> Result<()> {
        writeln!(self, "</svg>")?;
        Ok(())
    }
}

/// Escape text for use in element content or a double-quoted attribute.
/// Newlines become character references so they survive attribute normalization.
pub(crate) fn escape_xml(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'', '\n']) { return Cow::Borrowed(text) }

    let mut out = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '\n' => out.push_str("&#10;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_and_footer_wrap_content() {
        let mut writer = SvgStringWriter::new();
        writer.write_header(140.0, 300.0, Some("legend")).unwrap();
        writeln!(writer, "<g/>").unwrap();
        writer.write_footer().unwrap();

        let svg = writer.into_string().unwrap();
        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="140" height="300" viewBox="0 0 140 300" class="legend">"#));
        assert!(svg.ends_with("<g/>\n</svg>\n"));
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_xml("Ohio"), "Ohio");
        assert!(matches!(escape_xml("Ohio"), Cow::Borrowed(_)));
        assert_eq!(escape_xml(r#"A & B <"c">"#), "A &amp; B &lt;&quot;c&quot;&gt;");
        assert_eq!(escape_xml("one\ntwo"), "one&#10;two");
    }
}
