//! Color types and the linear color ramp used for fills and the legend.

use std::{fmt, str::FromStr};

use anyhow::{anyhow, ensure, Result};
use serde::Deserialize;

use crate::metrics::Domain;

/// Simple RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl fmt::Display for Rgb {
    /// Format as CSS: rgb(r,g,b)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = anyhow::Error;

    /// Parse `#rrggbb` or `#rgb`.
    fn from_str(s: &str) -> Result<Self> {
        let hex = s.trim().strip_prefix('#')
            .ok_or_else(|| anyhow!("[color] expected a '#' hex color, got {s:?}"))?;
        ensure!(hex.is_ascii(), "[color] invalid hex color {s:?}");

        let channel = |digits: &str| u8::from_str_radix(digits, 16)
            .map_err(|_| anyhow!("[color] invalid hex color {s:?}"));

        match hex.len() {
            6 => Ok(Rgb { r: channel(&hex[0..2])?, g: channel(&hex[2..4])?, b: channel(&hex[4..6])? }),
            3 => Ok(Rgb {
                r: channel(&hex[0..1])? * 17,
                g: channel(&hex[1..2])? * 17,
                b: channel(&hex[2..3])? * 17,
            }),
            _ => Err(anyhow!("[color] invalid hex color {s:?}")),
        }
    }
}

impl TryFrom<String> for Rgb {
    type Error = anyhow::Error;

    fn try_from(s: String) -> Result<Self> { s.parse() }
}

impl Rgb {
    /// Format as `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channel-wise interpolation, `t` in [0, 1].
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let lerp = |a: u8, b: u8| -> u8 {
            (a as f64 + (b as f64 - a as f64) * t)
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Rgb { r: lerp(self.r, other.r), g: lerp(self.g, other.g), b: lerp(self.b, other.b) }
    }
}

/// Continuous two-color ramp over a value domain.
#[derive(Clone, Copy, Debug)]
pub struct ColorScale {
    domain: Domain,
    low: Rgb,
    high: Rgb,
}

impl ColorScale {
    pub fn new(domain: Domain, low: Rgb, high: Rgb) -> Self {
        Self { domain, low, high }
    }

    pub fn domain(&self) -> Domain { self.domain }

    pub fn low(&self) -> Rgb { self.low }

    pub fn high(&self) -> Rgb { self.high }

    /// Color for `value`. Values outside the domain are clamped to the end colors.
    /// Returns `None` for non-finite input.
    pub fn color(&self, value: f64) -> Option<Rgb> {
        if !value.is_finite() { return None }
        let t = self.domain.normalize(value).clamp(0.0, 1.0);
        Some(self.low.lerp(self.high, t))
    }

    /// Color for an optional value, falling back to `missing`.
    pub fn color_or(&self, value: Option<f64>, missing: Rgb) -> Rgb {
        value.and_then(|v| self.color(v)).unwrap_or(missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOW: Rgb = Rgb { r: 0xd5, g: 0xb1, b: 0xe3 };
    const HIGH: Rgb = Rgb { r: 0x35, g: 0x01, b: 0x4a };

    fn scale(min: f64, max: f64) -> ColorScale {
        ColorScale::new(Domain { min, max }, LOW, HIGH)
    }

    #[test]
    fn parses_hex() {
        assert_eq!("#d5b1e3".parse::<Rgb>().unwrap(), LOW);
        assert_eq!("#fff".parse::<Rgb>().unwrap(), Rgb { r: 255, g: 255, b: 255 });
        assert!("d5b1e3".parse::<Rgb>().is_err());
        assert!("#d5b1e".parse::<Rgb>().is_err());
        assert!("#zzzzzz".parse::<Rgb>().is_err());
        assert!("#éab".parse::<Rgb>().is_err());
    }

    #[test]
    fn formats_css_and_hex() {
        assert_eq!(HIGH.to_string(), "rgb(53,1,74)");
        assert_eq!(HIGH.to_hex(), "#35014a");
    }

    #[test]
    fn endpoints_map_to_range_colors() {
        let s = scale(10.0, 20.0);
        assert_eq!(s.color(10.0), Some(LOW));
        assert_eq!(s.color(20.0), Some(HIGH));
        assert_eq!(s.color(15.0), Some(Rgb { r: 0x85, g: 0x59, b: 0x97 }));
    }

    #[test]
    fn out_of_domain_is_clamped() {
        let s = scale(10.0, 20.0);
        assert_eq!(s.color(-100.0), Some(LOW));
        assert_eq!(s.color(1e9), Some(HIGH));
    }

    #[test]
    fn channels_move_monotonically_toward_high() {
        let s = scale(0.0, 1000.0);
        let mut prev = s.color(0.0).unwrap();
        for i in 1..=1000 {
            let c = s.color(i as f64).unwrap();
            // low -> high decreases every channel for this palette
            assert!(c.r <= prev.r && c.g <= prev.g && c.b <= prev.b, "reversal at {i}");
            prev = c;
        }
    }

    #[test]
    fn degenerate_domain_uses_midpoint() {
        let s = scale(7.0, 7.0);
        assert_eq!(s.color(7.0), Some(LOW.lerp(HIGH, 0.5)));
    }

    #[test]
    fn non_finite_falls_back() {
        let s = scale(0.0, 1.0);
        let gray = Rgb { r: 150, g: 150, b: 150 };
        assert_eq!(s.color(f64::NAN), None);
        assert_eq!(s.color_or(None, gray), gray);
        assert_eq!(s.color_or(Some(f64::INFINITY), gray), gray);
        assert_eq!(s.color_or(Some(1.0), gray), HIGH);
    }
}
