//! Linear position scale with "nice" ticks, used by the legend axis.

use crate::metrics::Domain;

/// Maps a value domain onto a pixel range. The range may be inverted.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    domain: Domain,
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: Domain, range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> Domain { self.domain }

    pub fn range(&self) -> (f64, f64) { self.range }

    pub fn scale(&self, value: f64) -> f64 {
        let (r0, r1) = self.range;
        r0 + (r1 - r0) * self.domain.normalize(value)
    }

    /// Roughly `count` round-numbered ticks inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.min, self.domain.max, count as f64)
    }

    /// Tick labels with just enough decimals for the tick spacing, thousands grouped.
    pub fn tick_format(&self, count: usize) -> impl Fn(f64) -> String {
        let step = tick_step(self.domain.min, self.domain.max, count as f64);
        let precision = if step.is_finite() && step != 0.0 {
            (-step.abs().log10().floor()).max(0.0) as usize
        } else {
            0
        };
        move |value| format_grouped(value, precision)
    }
}

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Half-up rounding, so negative halves round toward +inf.
fn round_half_up(x: f64) -> f64 { (x + 0.5).floor() }

/// Tick index bounds and increment. A negative increment means "divide by -inc".
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 { 10.0 } else if error >= E5 { 5.0 } else if error >= E2 { 2.0 } else { 1.0 };

    // increments below 1 are kept as negative reciprocals to avoid float drift
    let (mut i1, mut i2, inc) = if power < 0.0 {
        let inv = 10f64.powf(-power) / factor;
        (round_half_up(start * inv), round_half_up(stop * inv), -inv)
    } else {
        let step = 10f64.powf(power) * factor;
        (round_half_up(start / step), round_half_up(stop / step), step)
    };
    let at = |i: f64| if inc < 0.0 { i / -inc } else { i * inc };
    if at(i1) < start { i1 += 1.0 }
    if at(i2) > stop { i2 -= 1.0 }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

pub(crate) fn ticks(start: f64, stop: f64, count: f64) -> Vec<f64> {
    if !(count > 0.0) || !start.is_finite() || !stop.is_finite() { return Vec::new() }
    if start == stop { return vec![start] }

    let reverse = stop < start;
    let (i1, i2, inc) = if reverse { tick_spec(stop, start, count) } else { tick_spec(start, stop, count) };
    if !(i2 >= i1) { return Vec::new() }

    let n = (i2 - i1) as usize + 1;
    let tick = |i: usize| {
        let k = i1 + i as f64;
        if inc < 0.0 { k / -inc } else { k * inc }
    };

    if reverse {
        (0..n).rev().map(tick).collect()
    } else {
        (0..n).map(tick).collect()
    }
}

/// Spacing between adjacent ticks.
pub(crate) fn tick_step(start: f64, stop: f64, count: f64) -> f64 {
    let reverse = stop < start;
    let (_, _, inc) = if reverse { tick_spec(stop, start, count) } else { tick_spec(start, stop, count) };
    let step = if inc < 0.0 { 1.0 / -inc } else { inc };
    if reverse { -step } else { step }
}

/// Fixed-precision decimal with comma thousands separators.
pub(crate) fn format_grouped(value: f64, precision: usize) -> String {
    let text = format!("{:.*}", precision, value.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let mut out = String::with_capacity(text.len() + int_part.len() / 3 + 1);
    // "-0" after rounding prints as "0"
    if value < 0.0 && text.bytes().any(|b| b.is_ascii_digit() && b != b'0') { out.push('-') }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 { out.push(',') }
        out.push(ch);
    }
    if let Some(frac_part) = frac_part {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}
