//! Synthetic price series for the trend comparison chart.
//!
//! Produces one point per year across the union of every selection's year
//! range. Each covering selection contributes
//! `base + variation + (year - year_start) * 2000`, where `base` is uniform in
//! `[40000, 69999]` and `variation` is uniform in `[-5000, 4999]`.

use std::collections::{BTreeMap, HashMap};

use crate::config::{
    CHART_PALETTE_SIZE, TREND_BASE_MIN, TREND_BASE_SPAN, TREND_MAX_YEAR_SPAN,
    TREND_VARIATION_MIN, TREND_VARIATION_SPAN, TREND_YEARLY_DRIFT,
};
use crate::error::{CarMarketError, Result};
use crate::models::{SeriesDescriptor, TrendChart, TrendSelection, TrendSeriesPoint};
use crate::random::NumberSource;

/// When the base price of a series is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BaseDraw {
    /// A fresh base for every (year, selection) pair. Lines jump around
    /// from year to year.
    #[default]
    PerPoint,
    /// One base per selection, drawn at its first covered year.
    PerSeries,
}

/// Generates chart series from a list of selections.
pub struct SeriesGenerator<S> {
    source: S,
    base_draw: BaseDraw,
}

impl<S: NumberSource> SeriesGenerator<S> {
    /// Create a generator with the default [`BaseDraw::PerPoint`] behavior.
    pub fn new(source: S) -> Self {
        Self {
            source,
            base_draw: BaseDraw::default(),
        }
    }

    pub fn base_draw(mut self, base_draw: BaseDraw) -> Self {
        self.base_draw = base_draw;
        self
    }

    pub fn into_source(self) -> S {
        self.source
    }

    /// Build one point per year in `[min year_start, max year_end]`.
    ///
    /// Returns an empty vector for no selections or an inverted overall
    /// range. Years a selection does not cover carry no key for it. When two
    /// selections share a series key, the later one's value is kept.
    ///
    /// Draw order is by year, then by selection order: base then variation.
    ///
    /// Fails with [`CarMarketError::InvalidArgument`] when the overall range
    /// is wider than [`TREND_MAX_YEAR_SPAN`] years; nothing is drawn then.
    pub fn build_series(
        &mut self,
        selections: &[TrendSelection],
    ) -> Result<Vec<TrendSeriesPoint>> {
        let Some((first, last)) = year_range(selections)? else {
            return Ok(Vec::new());
        };

        let mut series_bases: HashMap<u64, i64> = HashMap::new();
        let mut points = Vec::new();

        for year in first..=last {
            let mut values = BTreeMap::new();

            for selection in selections.iter().filter(|s| s.covers(year)) {
                let base = match self.base_draw {
                    BaseDraw::PerPoint => self.source.next_in(TREND_BASE_MIN, TREND_BASE_SPAN),
                    BaseDraw::PerSeries => *series_bases
                        .entry(selection.id)
                        .or_insert_with(|| self.source.next_in(TREND_BASE_MIN, TREND_BASE_SPAN)),
                };
                let variation = self
                    .source
                    .next_in(TREND_VARIATION_MIN, TREND_VARIATION_SPAN);
                let drift = i64::from(year - selection.year_start) * TREND_YEARLY_DRIFT;

                values.insert(selection.series_key(), base + variation + drift);
            }

            points.push(TrendSeriesPoint {
                year: year.to_string(),
                values,
            });
        }

        tracing::debug!(
            selections = selections.len(),
            points = points.len(),
            first_year = first,
            last_year = last,
            "built trend series"
        );
        Ok(points)
    }

    /// Build the series together with one line descriptor per selection.
    pub fn build_chart(&mut self, selections: &[TrendSelection]) -> Result<TrendChart> {
        Ok(TrendChart {
            points: self.build_series(selections)?,
            series: describe_series(selections),
        })
    }
}

/// The overall `(first, last)` year range of `selections`.
///
/// `None` when there are no selections or the range is inverted. Errors when
/// the range spans more than [`TREND_MAX_YEAR_SPAN`] years.
pub fn year_range(selections: &[TrendSelection]) -> Result<Option<(i32, i32)>> {
    let (Some(first), Some(last)) = (
        selections.iter().map(|s| s.year_start).min(),
        selections.iter().map(|s| s.year_end).max(),
    ) else {
        return Ok(None);
    };
    if first > last {
        return Ok(None);
    }

    let span = i64::from(last) - i64::from(first) + 1;
    if span > TREND_MAX_YEAR_SPAN {
        tracing::warn!(first, last, span, "rejected trend year range");
        return Err(CarMarketError::InvalidArgument(format!(
            "trend range {first}-{last} spans {span} years; at most {TREND_MAX_YEAR_SPAN} allowed"
        )));
    }
    Ok(Some((first, last)))
}

/// One descriptor per selection, colour slots cycling in selection order.
pub fn describe_series(selections: &[TrendSelection]) -> Vec<SeriesDescriptor> {
    selections
        .iter()
        .enumerate()
        .map(|(index, s)| SeriesDescriptor {
            id: s.id,
            key: s.series_key(),
            color_slot: index % CHART_PALETTE_SIZE,
        })
        .collect()
}
