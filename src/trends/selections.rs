//! Adding and removing trend selections.

use crate::config::{TREND_DEFAULT_END_YEAR, TREND_DEFAULT_START_YEAR};
use crate::error::Result;
use crate::models::{TrendCandidate, TrendChart, TrendSelection, TrendSeriesPoint};
use crate::random::NumberSource;
use crate::trends::generator::SeriesGenerator;
use crate::year::parse_bound;

/// Hands out selection ids, unique within one comparison.
#[derive(Debug, Clone, Default)]
pub struct SelectionIds {
    next: u64,
}

impl SelectionIds {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Continue numbering after the highest id already present.
    ///
    /// When the highest id is `u64::MAX`, numbering restarts at the smallest
    /// id not taken, so the next id handed out is still unused.
    pub fn after(selections: &[TrendSelection]) -> Self {
        let next = match selections.iter().map(|s| s.id).max() {
            None => 1,
            Some(id) => id
                .checked_add(1)
                .unwrap_or_else(|| smallest_free_id(selections)),
        };
        Self { next }
    }

    pub fn next_id(&mut self) -> u64 {
        let id = self.next.max(1);
        self.next = id.saturating_add(1);
        id
    }
}

/// Smallest id `>= 1` not used by any selection.
fn smallest_free_id(selections: &[TrendSelection]) -> u64 {
    let mut taken: Vec<u64> = selections.iter().map(|s| s.id).collect();
    taken.sort_unstable();
    taken.dedup();

    let mut candidate = 1;
    for id in taken {
        if id > candidate {
            break;
        }
        if id == candidate {
            candidate += 1;
        }
    }
    candidate
}

/// Append `candidate` to `selections` if its make and model are filled in.
///
/// Missing, empty or unparsable years fall back to 2013 and 2024. Returns
/// the new selection, or `None` when the candidate was rejected and the list
/// is unchanged.
pub fn add_selection(
    selections: &mut Vec<TrendSelection>,
    ids: &mut SelectionIds,
    candidate: &TrendCandidate,
) -> Option<TrendSelection> {
    if candidate.make.is_empty() || candidate.model.is_empty() {
        return None;
    }

    let selection = TrendSelection {
        id: ids.next_id(),
        make: candidate.make.clone(),
        model: candidate.model.clone(),
        year_start: parse_bound(candidate.year_start.as_deref())
            .unwrap_or(TREND_DEFAULT_START_YEAR),
        year_end: parse_bound(candidate.year_end.as_deref()).unwrap_or(TREND_DEFAULT_END_YEAR),
    };
    selections.push(selection.clone());
    Some(selection)
}

/// Remove the selection with `id`. Returns whether anything was removed.
pub fn remove_selection(selections: &mut Vec<TrendSelection>, id: u64) -> bool {
    let before = selections.len();
    selections.retain(|s| s.id != id);
    selections.len() != before
}

// ---------------------------------------------------------------------------
// TrendComparison
// ---------------------------------------------------------------------------

/// State of the trend comparison form: the pending candidate, the selections
/// added so far, and the generator that draws their series.
pub struct TrendComparison<S> {
    candidate: TrendCandidate,
    selections: Vec<TrendSelection>,
    ids: SelectionIds,
    generator: SeriesGenerator<S>,
}

impl<S: NumberSource> TrendComparison<S> {
    pub fn new(generator: SeriesGenerator<S>) -> Self {
        Self {
            candidate: default_candidate(),
            selections: Vec::new(),
            ids: SelectionIds::new(),
            generator,
        }
    }

    pub fn candidate(&self) -> &TrendCandidate {
        &self.candidate
    }

    /// Replace the pending candidate with new form values.
    pub fn set_candidate(&mut self, candidate: TrendCandidate) {
        self.candidate = candidate;
    }

    pub fn can_add(&self) -> bool {
        !self.candidate.make.is_empty() && !self.candidate.model.is_empty()
    }

    /// Add the pending candidate and reset the form on success.
    pub fn add(&mut self) -> Option<TrendSelection> {
        let added = add_selection(&mut self.selections, &mut self.ids, &self.candidate)?;
        self.candidate = default_candidate();
        Some(added)
    }

    pub fn remove(&mut self, id: u64) -> bool {
        remove_selection(&mut self.selections, id)
    }

    pub fn selections(&self) -> &[TrendSelection] {
        &self.selections
    }

    /// Regenerate the series. Each call draws new values.
    pub fn series(&mut self) -> Result<Vec<TrendSeriesPoint>> {
        self.generator.build_series(&self.selections)
    }

    pub fn chart(&mut self) -> Result<TrendChart> {
        self.generator.build_chart(&self.selections)
    }
}

/// A blank candidate with the default year range filled in.
pub fn default_candidate() -> TrendCandidate {
    TrendCandidate {
        make: String::new(),
        model: String::new(),
        year_start: Some(TREND_DEFAULT_START_YEAR.to_string()),
        year_end: Some(TREND_DEFAULT_END_YEAR.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_monotonic() {
        let mut ids = SelectionIds::new();
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);

        let mut default_ids = SelectionIds::default();
        assert_eq!(default_ids.next_id(), 1);
    }

    #[test]
    fn ids_resume_after_existing_selections() {
        let existing = vec![TrendSelection {
            id: 9,
            make: "Nissan".into(),
            model: "Patrol".into(),
            year_start: 2013,
            year_end: 2024,
        }];
        assert_eq!(SelectionIds::after(&existing).next_id(), 10);
        assert_eq!(SelectionIds::after(&[]).next_id(), 1);
    }

    #[test]
    fn ids_after_max_id_reuse_a_free_slot() {
        let selection = |id| TrendSelection {
            id,
            make: "Lexus".into(),
            model: "LX".into(),
            year_start: 2013,
            year_end: 2024,
        };

        let existing = vec![selection(u64::MAX)];
        assert_eq!(SelectionIds::after(&existing).next_id(), 1);

        let existing = vec![selection(1), selection(u64::MAX), selection(2), selection(4)];
        let id = SelectionIds::after(&existing).next_id();
        assert_eq!(id, 3);
        assert!(existing.iter().all(|s| s.id != id));
    }
}
