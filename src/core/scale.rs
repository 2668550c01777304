use serde::{Deserialize, Serialize};

use crate::core::layout::LayoutGeometry;
use crate::core::normalize::{SlopeRow, StackedColumn};
use crate::error::{ChartError, ChartResult};

/// Outward rounding granularity of the slopegraph value axis.
pub const SLOPEGRAPH_ROUND_FACTOR: f64 = 4.0;
/// Outward rounding granularity of the stacked-column value axis.
pub const STACKED_ROUND_FACTOR: f64 = 50.0;
/// Fraction of each band step left empty between stacked columns.
pub const STACKED_BAND_PADDING: f64 = 0.1;

const TICK_EPSILON: f64 = 1e-9;

/// Rounds half-way cases toward positive infinity, as pixel snapping expects.
#[must_use]
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Continuous mapping from a value domain into a pixel range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
    round: bool,
}

impl LinearScale {
    #[must_use]
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain,
            range,
            round: false,
        }
    }

    /// Snaps mapped outputs to whole pixels.
    #[must_use]
    pub fn with_rounding(mut self, round: bool) -> Self {
        self.round = round;
        self
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.domain
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.range
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 { 0.5 } else { (value - d0) / span };
        let mapped = r0 + t * (r1 - r0);
        if self.round {
            round_half_up(mapped)
        } else {
            mapped
        }
    }

    /// Tick values covering the domain with a 1, 2 or 5 × 10ⁿ step, aiming
    /// for roughly `count` ticks.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        let (lo, hi) = if self.domain.0 <= self.domain.1 {
            self.domain
        } else {
            (self.domain.1, self.domain.0)
        };
        let span = hi - lo;
        if count == 0 || !span.is_finite() || span <= 0.0 {
            return if lo.is_finite() { vec![lo] } else { Vec::new() };
        }

        let target = count as f64;
        let mut step = 10f64.powf((span / target).log10().floor());
        let err = target / span * step;
        if err <= 0.15 {
            step *= 10.0;
        } else if err <= 0.35 {
            step *= 5.0;
        } else if err <= 0.75 {
            step *= 2.0;
        }

        // Integer arithmetic on a scaled step keeps values like 0.6 exact.
        let decimals = (-step.log10().floor()).max(0.0);
        let scale = 10f64.powf(decimals);
        let step_units = (step * scale).round();
        let first = (lo / step - TICK_EPSILON).ceil() as i64;
        let last = (hi / step + TICK_EPSILON).floor() as i64;
        (first..=last)
            .map(|i| {
                let value = (i as f64 * step_units) / scale;
                if value == 0.0 { 0.0 } else { value }
            })
            .collect()
    }
}

/// Discrete mapping from category names onto an explicit output list.
/// Outputs are reused cyclically when the domain is longer than the range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdinalScale<T> {
    domain: Vec<String>,
    range: Vec<T>,
}

impl<T: Clone> OrdinalScale<T> {
    /// Duplicate domain entries keep their first position.
    #[must_use]
    pub fn new<I, S>(domain: I, range: Vec<T>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            domain: dedup_domain(domain),
            range,
        }
    }

    #[must_use]
    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    #[must_use]
    pub fn map(&self, key: &str) -> Option<T> {
        if self.range.is_empty() {
            return None;
        }
        let index = self.domain.iter().position(|d| d == key)?;
        Some(self.range[index % self.range.len()].clone())
    }
}

/// Evenly spaced bands with inner and outer padding, snapped to whole pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandScale {
    domain: Vec<String>,
    positions: Vec<f64>,
    bandwidth: f64,
}

impl BandScale {
    /// Lays out one band per distinct domain entry over `range`. Outer padding
    /// equals `padding`; the leftover pixels from rounding are split evenly on
    /// both ends.
    #[must_use]
    pub fn round_bands<I, S>(domain: I, range: (f64, f64), padding: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let domain = dedup_domain(domain);
        let (start, stop) = range;
        let n = domain.len() as f64;
        let step = ((stop - start) / (n - padding + 2.0 * padding)).floor();
        let error = stop - start - (n - padding) * step;
        let origin = start + round_half_up(error / 2.0);
        let positions = (0..domain.len())
            .map(|i| origin + step * i as f64)
            .collect();
        Self {
            domain,
            positions,
            bandwidth: round_half_up(step * (1.0 - padding)),
        }
    }

    #[must_use]
    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Left edge of the band for `key`.
    #[must_use]
    pub fn position(&self, key: &str) -> Option<f64> {
        let index = self.domain.iter().position(|d| d == key)?;
        self.positions.get(index).copied()
    }
}

fn dedup_domain<I, S>(domain: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut out: Vec<String> = Vec::new();
    for key in domain {
        let key = key.into();
        if !out.contains(&key) {
            out.push(key);
        }
    }
    out
}

/// Smallest and largest of `values`, skipping `NaN`. Both bounds are `NaN`
/// when nothing is comparable.
fn extent(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
        .unwrap_or((f64::NAN, f64::NAN))
}

fn empty_series_error(what: &str) -> ChartError {
    ChartError::InvalidData(format!("{what} scale requires at least one row"))
}

/// `[min(floor(start/f)*f), max(ceil(end/f)*f)]` over all rows.
pub fn slopegraph_value_domain(rows: &[SlopeRow], round_factor: f64) -> ChartResult<(f64, f64)> {
    if rows.is_empty() {
        return Err(empty_series_error("slopegraph"));
    }
    let (lo, _) = extent(
        rows.iter()
            .map(|r| (r.start / round_factor).floor() * round_factor),
    );
    let (_, hi) = extent(
        rows.iter()
            .map(|r| (r.end / round_factor).ceil() * round_factor),
    );
    Ok((lo, hi))
}

/// Rounded total extent with the lower bound clamped to at most zero.
pub fn stacked_value_domain(
    columns: &[StackedColumn],
    round_factor: f64,
) -> ChartResult<(f64, f64)> {
    if columns.is_empty() {
        return Err(empty_series_error("stacked column"));
    }
    let (lo, _) = extent(
        columns
            .iter()
            .map(|c| (c.total / round_factor).floor() * round_factor),
    );
    let (_, hi) = extent(
        columns
            .iter()
            .map(|c| (c.total / round_factor).ceil() * round_factor),
    );
    if lo.is_nan() {
        return Ok((lo, hi));
    }
    Ok((lo.min(0.0), hi))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlopegraphScales {
    pub x: OrdinalScale<f64>,
    pub y: LinearScale,
}

impl SlopegraphScales {
    pub fn build(
        rows: &[SlopeRow],
        geometry: LayoutGeometry,
        start_label: &str,
        end_label: &str,
    ) -> ChartResult<Self> {
        let domain = slopegraph_value_domain(rows, SLOPEGRAPH_ROUND_FACTOR)?;
        Ok(Self {
            x: OrdinalScale::new([start_label, end_label], vec![0.0, geometry.chart_width]),
            y: LinearScale::new(domain, (geometry.chart_height, 0.0)),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackedColumnScales {
    pub x: BandScale,
    pub y: LinearScale,
}

impl StackedColumnScales {
    pub fn build(columns: &[StackedColumn], geometry: LayoutGeometry) -> ChartResult<Self> {
        let domain = stacked_value_domain(columns, STACKED_ROUND_FACTOR)?;
        Ok(Self {
            x: BandScale::round_bands(
                columns.iter().map(|c| c.label.as_str()),
                (0.0, geometry.chart_width),
                STACKED_BAND_PADDING,
            ),
            y: LinearScale::new(domain, (geometry.chart_height, 0.0)).with_rounding(true),
        })
    }
}
