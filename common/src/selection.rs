//! Multi-select over search results, restricted to one frequency at a time.
//!
//! All mutations go through [`SelectionState::apply`], which is the only
//! place the single-frequency lock is enforced.

use std::{collections::BTreeMap, fmt::Display};

use thiserror::Error;

use crate::{
    search_panel::Feedback,
    search_result::{AddIndicatorsRequest, SearchResultSet},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionLock {
    Empty,
    Locked(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionAction {
    Toggle { frequency: String, index: usize },
    ToggleAll { frequency: String },
    Clear,
}

/// A rejected transition. State is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionRejected {
    #[error("Select indicators from a single frequency ({locked} is already selected)")]
    MixedFrequency { locked: String, attempted: String },
    #[error("unknown frequency {0:?}")]
    UnknownFrequency(String),
    #[error("no result at index {index} in {frequency:?}")]
    IndexOutOfRange { frequency: String, index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Select at least one indicator")]
    NothingSelected,
    #[error("table id is empty")]
    MissingTableId,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    selected: BTreeMap<String, Vec<bool>>,
    active_frequency: Option<String>,
}

impl SelectionState {
    /// All-false state aligned with a fresh result set.
    pub fn for_results(results: &SearchResultSet) -> Self {
        let selected = results
            .groups
            .iter()
            .map(|(frequency, items)| (frequency.clone(), vec![false; items.len()]))
            .collect();
        Self { selected, active_frequency: None }
    }

    pub fn lock(&self) -> SelectionLock {
        match &self.active_frequency {
            Some(f) => SelectionLock::Locked(f.clone()),
            None => SelectionLock::Empty,
        }
    }

    pub fn active_frequency(&self) -> Option<&str> {
        self.active_frequency.as_deref()
    }

    pub fn is_selected(&self, frequency: &str, index: usize) -> bool {
        self.selected.get(frequency).and_then(|v| v.get(index)).copied().unwrap_or(false)
    }

    pub fn is_all_selected(&self, frequency: &str) -> bool {
        match self.selected.get(frequency) {
            Some(flags) => !flags.is_empty() && flags.iter().all(|f| *f),
            None => false,
        }
    }

    pub fn selected_count(&self) -> usize {
        self.selected.values().flatten().filter(|f| **f).count()
    }

    /// Whether `frequency` can take selections right now.
    pub fn is_frequency_available(&self, frequency: &str) -> bool {
        match &self.active_frequency {
            Some(locked) => locked == frequency,
            None => true,
        }
    }

    pub fn apply(&mut self, action: SelectionAction) -> Result<(), SelectionRejected> {
        match action {
            SelectionAction::Clear => self.clear(),
            SelectionAction::Toggle { frequency, index } => {
                self.guard(&frequency)?;
                let flags = self.flags_mut(&frequency)?;
                let Some(flag) = flags.get_mut(index) else {
                    return Err(SelectionRejected::IndexOutOfRange { frequency, index });
                };
                *flag = !*flag;
            }
            SelectionAction::ToggleAll { frequency } => {
                self.guard(&frequency)?;
                let target = !self.is_all_selected(&frequency);
                self.flags_mut(&frequency)?.fill(target);
            }
        }
        self.active_frequency = self
            .selected
            .iter()
            .find(|(_, flags)| flags.iter().any(|f| *f))
            .map(|(frequency, _)| frequency.clone());
        Ok(())
    }

    /// Ids of selected results, frequency then index order.
    pub fn selected_ids(&self, results: &SearchResultSet) -> Vec<u64> {
        let mut ids = vec![];
        for (frequency, flags) in &self.selected {
            for (index, _) in flags.iter().enumerate().filter(|(_, f)| **f) {
                if let Some(item) = results.item(frequency, index) {
                    ids.push(item.id);
                }
            }
        }
        ids
    }

    pub fn build_add_request(&self, table_id: &str, results: &SearchResultSet) -> Result<AddIndicatorsRequest, SelectionError> {
        if table_id.trim().is_empty() {
            return Err(SelectionError::MissingTableId);
        }
        let indicators = self.selected_ids(results);
        if indicators.is_empty() {
            return Err(SelectionError::NothingSelected);
        }
        Ok(AddIndicatorsRequest { table_id: table_id.to_string(), indicators })
    }

    /// Apply the add-to-table outcome for `count` indicators. Success clears
    /// the selection; failure keeps it so the same request can be retried.
    pub fn finish_add<E: Display>(&mut self, outcome: Result<(), E>, count: usize) -> Feedback {
        match outcome {
            Ok(()) => {
                self.clear();
                self.active_frequency = None;
                Feedback::Info(format!("Added {count} indicator(s) to the table"))
            }
            Err(e) => Feedback::Error(format!("Could not add indicators: {e}")),
        }
    }

    fn clear(&mut self) {
        for flags in self.selected.values_mut() {
            flags.fill(false);
        }
    }

    fn guard(&self, frequency: &str) -> Result<(), SelectionRejected> {
        match &self.active_frequency {
            Some(locked) if locked != frequency => Err(SelectionRejected::MixedFrequency {
                locked: locked.clone(),
                attempted: frequency.to_string(),
            }),
            _ => Ok(()),
        }
    }

    fn flags_mut(&mut self, frequency: &str) -> Result<&mut Vec<bool>, SelectionRejected> {
        self.selected
            .get_mut(frequency)
            .ok_or_else(|| SelectionRejected::UnknownFrequency(frequency.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search_result::SearchResultItem;
    use pretty_assertions::assert_eq;

    fn item(id: u64) -> SearchResultItem {
        SearchResultItem { id, name: format!("indicator {id}"), code: format!("C{id}") }
    }

    fn results() -> SearchResultSet {
        let mut set = SearchResultSet::default();
        set.groups.insert("Monthly".into(), vec![item(10), item(11)]);
        set.groups.insert("Annual".into(), vec![item(20)]);
        set
    }

    fn toggle(frequency: &str, index: usize) -> SelectionAction {
        SelectionAction::Toggle { frequency: frequency.into(), index }
    }

    fn toggle_all(frequency: &str) -> SelectionAction {
        SelectionAction::ToggleAll { frequency: frequency.into() }
    }

    #[test]
    fn first_selection_locks_its_frequency() {
        let mut state = SelectionState::for_results(&results());
        assert_eq!(state.lock(), SelectionLock::Empty);
        state.apply(toggle("Monthly", 0)).unwrap();
        assert_eq!(state.lock(), SelectionLock::Locked("Monthly".into()));
        assert!(state.is_selected("Monthly", 0));
        assert!(!state.is_frequency_available("Annual"));
    }

    #[test]
    fn other_frequency_is_rejected_without_change() {
        let mut state = SelectionState::for_results(&results());
        state.apply(toggle("Monthly", 0)).unwrap();
        let before = state.clone();
        let err = state.apply(toggle("Annual", 0)).unwrap_err();
        assert_eq!(
            err,
            SelectionRejected::MixedFrequency { locked: "Monthly".into(), attempted: "Annual".into() }
        );
        assert_eq!(state, before);
        assert!(!state.is_selected("Annual", 0));
    }

    #[test]
    fn clearing_last_selection_unlocks() {
        let mut state = SelectionState::for_results(&results());
        state.apply(toggle("Monthly", 0)).unwrap();
        state.apply(toggle("Monthly", 0)).unwrap();
        assert_eq!(state.lock(), SelectionLock::Empty);
        state.apply(toggle("Annual", 0)).unwrap();
        assert_eq!(state.lock(), SelectionLock::Locked("Annual".into()));
    }

    #[test]
    fn select_all_toggles_whole_group() {
        let mut state = SelectionState::for_results(&results());
        state.apply(toggle("Monthly", 1)).unwrap();
        state.apply(toggle_all("Monthly")).unwrap();
        assert!(state.is_all_selected("Monthly"));
        assert_eq!(state.selected_count(), 2);
        state.apply(toggle_all("Monthly")).unwrap();
        assert_eq!(state.selected_count(), 0);
        assert_eq!(state.lock(), SelectionLock::Empty);
    }

    #[test]
    fn select_all_in_other_frequency_is_rejected() {
        let mut state = SelectionState::for_results(&results());
        state.apply(toggle("Annual", 0)).unwrap();
        assert!(matches!(state.apply(toggle_all("Monthly")), Err(SelectionRejected::MixedFrequency { .. })));
        assert!(!state.is_selected("Monthly", 0));
        assert!(!state.is_selected("Monthly", 1));
    }

    #[test]
    fn bad_targets_are_rejected() {
        let mut state = SelectionState::for_results(&results());
        assert_eq!(
            state.apply(toggle("Monthly", 5)),
            Err(SelectionRejected::IndexOutOfRange { frequency: "Monthly".into(), index: 5 })
        );
        assert_eq!(
            state.apply(toggle_all("Weekly")),
            Err(SelectionRejected::UnknownFrequency("Weekly".into()))
        );
        assert_eq!(state.lock(), SelectionLock::Empty);
    }

    #[test]
    fn clear_resets_everything() {
        let mut state = SelectionState::for_results(&results());
        state.apply(toggle_all("Monthly")).unwrap();
        state.apply(SelectionAction::Clear).unwrap();
        assert_eq!(state, SelectionState::for_results(&results()));
    }

    #[test]
    fn add_request_carries_selected_ids() {
        let results = results();
        let mut state = SelectionState::for_results(&results);
        state.apply(toggle("Monthly", 1)).unwrap();
        state.apply(toggle("Monthly", 0)).unwrap();
        let request = state.build_add_request("t-1", &results).unwrap();
        assert_eq!(request, AddIndicatorsRequest { table_id: "t-1".into(), indicators: vec![10, 11] });
    }

    #[test]
    fn empty_selection_is_an_error() {
        let results = results();
        let state = SelectionState::for_results(&results);
        assert_eq!(state.build_add_request("t-1", &results), Err(SelectionError::NothingSelected));
        assert_eq!(state.build_add_request(" ", &results), Err(SelectionError::MissingTableId));
    }

    #[test]
    fn empty_group_is_never_all_selected() {
        let mut set = SearchResultSet::default();
        set.groups.insert("Quarterly".into(), vec![]);
        let mut state = SelectionState::for_results(&set);
        assert!(!state.is_all_selected("Quarterly"));
        state.apply(toggle_all("Quarterly")).unwrap();
        assert_eq!(state.lock(), SelectionLock::Empty);
    }

    #[test]
    fn failed_add_keeps_the_selection() {
        let set = results();
        let mut state = SelectionState::for_results(&set);
        state.apply(toggle_all("Monthly")).unwrap();
        let request = state.build_add_request("t1", &set).unwrap();
        let before = state.clone();

        let feedback = state.finish_add(Err("Error: 409 Conflict: already in table"), request.indicators.len());
        assert_eq!(feedback, Feedback::Error("Could not add indicators: Error: 409 Conflict: already in table".into()));
        assert_eq!(state, before);
        assert_eq!(state.build_add_request("t1", &set).unwrap(), request);
    }

    #[test]
    fn successful_add_clears_the_selection() {
        let set = results();
        let mut state = SelectionState::for_results(&set);
        state.apply(toggle("Annual", 0)).unwrap();

        let feedback = state.finish_add::<String>(Ok(()), 1);
        assert_eq!(feedback, Feedback::Info("Added 1 indicator(s) to the table".into()));
        assert_eq!(state.lock(), SelectionLock::Empty);
        assert_eq!(state.selected_count(), 0);
    }
}
