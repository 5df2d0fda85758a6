// Row selection for the DataTable

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::component::Callback;

/// How many rows may be selected at once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Rows cannot be selected
    #[default]
    None,
    /// At most one row
    Single,
    /// Any number of rows
    Multiple,
}

impl SelectionMode {
    /// Whether rows can be selected at all
    pub fn is_selectable(self) -> bool {
        self != SelectionMode::None
    }
}

/// `selectable: true` turns on multiple selection
impl From<bool> for SelectionMode {
    fn from(selectable: bool) -> Self {
        if selectable {
            SelectionMode::Multiple
        } else {
            SelectionMode::None
        }
    }
}

/// Selected rows, by original position in the data.
///
/// In `Single` mode the set holds at most one index, and after every
/// reconciliation all indices are below the current data length.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    mode: SelectionMode,
    selected: BTreeSet<usize>,
}

impl SelectionState {
    /// Empty selection in `mode`
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            selected: BTreeSet::new(),
        }
    }

    /// Active mode
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Selected original indices, ascending
    pub fn selected(&self) -> &BTreeSet<usize> {
        &self.selected
    }

    /// Whether the row at original `index` is selected
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

/// Tracks selected rows and reports changes to `on_selection_change`.
///
/// Notifications carry the selected records themselves, cloned from the data
/// at notification time in ascending original-index order.
pub struct SelectionController<T> {
    state: SelectionState,
    on_selection_change: Option<Callback<Vec<T>>>,
}

impl<T> std::fmt::Debug for SelectionController<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionController")
            .field("state", &self.state)
            .field("has_callback", &self.on_selection_change.is_some())
            .finish()
    }
}

impl<T: Clone + 'static> SelectionController<T> {
    /// Controller with an empty selection
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            state: SelectionState::new(mode),
            on_selection_change: None,
        }
    }

    /// Builder-style callback registration
    pub fn with_callback(mut self, callback: Callback<Vec<T>>) -> Self {
        self.on_selection_change = Some(callback);
        self
    }

    /// Replace the change callback
    pub fn set_callback(&mut self, callback: Option<Callback<Vec<T>>>) {
        self.on_selection_change = callback;
    }

    /// Current selection
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Records currently selected in `data`
    pub fn selected_records(&self, data: &[T]) -> Vec<T> {
        self.state
            .selected
            .iter()
            .filter_map(|&index| data.get(index).cloned())
            .collect()
    }

    /// Toggle the row at original `index`.
    ///
    /// Single mode replaces the selection with `index`, or clears it when
    /// `index` was the selected row. Multiple mode flips `index` alone.
    /// Unselectable tables and out-of-range indices are left untouched.
    pub fn toggle(&mut self, index: usize, data: &[T]) -> &SelectionState {
        if index >= data.len() {
            log::trace!("ignoring toggle of row {index} beyond {} rows", data.len());
            return &self.state;
        }

        let mut next = self.state.selected.clone();
        match self.state.mode {
            SelectionMode::None => {
                log::trace!("ignoring toggle of row {index}: selection disabled");
                return &self.state;
            }
            SelectionMode::Single => {
                let was_selected = next.contains(&index);
                next.clear();
                if !was_selected {
                    next.insert(index);
                }
            }
            SelectionMode::Multiple => {
                if !next.remove(&index) {
                    next.insert(index);
                }
            }
        }

        self.apply(next, data);
        &self.state
    }

    /// Select every row; only meaningful in multiple mode
    pub fn select_all(&mut self, data: &[T]) -> &SelectionState {
        if self.state.mode != SelectionMode::Multiple {
            log::trace!("ignoring select-all in {:?} mode", self.state.mode);
            return &self.state;
        }
        self.apply((0..data.len()).collect(), data);
        &self.state
    }

    /// Deselect everything regardless of mode
    pub fn clear(&mut self, data: &[T]) -> &SelectionState {
        self.apply(BTreeSet::new(), data);
        &self.state
    }

    /// Drop indices that no longer exist in `data`.
    ///
    /// Notifies once, and only when something was purged.
    pub fn reconcile(&mut self, data: &[T]) -> &SelectionState {
        self.sync(self.state.mode, data)
    }

    /// Switch selection mode, trimming the selection to fit it.
    ///
    /// `None` clears the selection and `Single` keeps only the lowest selected
    /// index. Notifies only if the selection changed.
    pub fn set_mode(&mut self, mode: SelectionMode, data: &[T]) -> &SelectionState {
        if self.state.mode == mode {
            return &self.state;
        }
        self.sync(mode, data)
    }

    /// Adopt `mode` and reconcile against `data` as a single change.
    ///
    /// Stale indices are purged before the mode trims the selection, so the
    /// host hears about the final selection once and never sees an index
    /// beyond `data`.
    pub fn sync(&mut self, mode: SelectionMode, data: &[T]) -> &SelectionState {
        self.state.mode = mode;

        let len = data.len();
        let in_range = self.state.selected.range(..len).copied();
        let fitted: BTreeSet<usize> = match mode {
            SelectionMode::None => BTreeSet::new(),
            SelectionMode::Single => in_range.take(1).collect(),
            SelectionMode::Multiple => in_range.collect(),
        };

        if fitted != self.state.selected {
            log::debug!(
                "fitted selection to {mode:?} over {len} rows: {} -> {} selected",
                self.state.selected.len(),
                fitted.len()
            );
            self.apply(fitted, data);
        }
        &self.state
    }

    /// Forget the selection without notifying, e.g. when the table unmounts
    pub fn reset(&mut self) {
        self.state.selected.clear();
    }

    fn apply(&mut self, next: BTreeSet<usize>, data: &[T]) {
        self.state.selected = next;
        log::debug!("selection -> {:?}", self.state.selected);
        if let Some(callback) = &self.on_selection_change {
            callback.call(self.selected_records(data));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::callback;
    use std::sync::{Arc, Mutex};

    type Log = Arc<Mutex<Vec<Vec<&'static str>>>>;

    fn recording(mode: SelectionMode) -> (SelectionController<&'static str>, Log) {
        let log: Log = Arc::new(Mutex::new(Vec::new()));
        let sink = log.clone();
        let controller = SelectionController::new(mode)
            .with_callback(callback(move |records: Vec<&'static str>| {
                sink.lock().unwrap().push(records);
            }));
        (controller, log)
    }

    const ROWS: [&str; 6] = ["a", "b", "c", "d", "e", "f"];

    #[test]
    fn single_mode_replaces_previous_row() {
        let (mut selection, log) = recording(SelectionMode::Single);
        selection.toggle(2, &ROWS);
        selection.toggle(5, &ROWS);

        assert_eq!(selection.state().selected().iter().copied().collect::<Vec<_>>(), vec![5]);
        assert_eq!(*log.lock().unwrap(), vec![vec!["c"], vec!["f"]]);
    }

    #[test]
    fn single_mode_toggle_on_selected_row_clears() {
        let (mut selection, log) = recording(SelectionMode::Single);
        selection.toggle(1, &ROWS);
        selection.toggle(1, &ROWS);

        assert!(selection.state().is_empty());
        assert_eq!(log.lock().unwrap().last().unwrap(), &Vec::<&str>::new());
    }

    #[test]
    fn multiple_mode_flips_membership_independently() {
        let (mut selection, log) = recording(SelectionMode::Multiple);
        selection.toggle(3, &ROWS);
        selection.toggle(0, &ROWS);
        selection.toggle(3, &ROWS);

        assert!(selection.state().is_selected(0));
        assert!(!selection.state().is_selected(3));
        assert_eq!(
            *log.lock().unwrap(),
            vec![vec!["d"], vec!["a", "d"], vec!["a"]]
        );
    }

    #[test]
    fn none_mode_and_out_of_range_toggles_are_ignored() {
        let (mut selection, log) = recording(SelectionMode::None);
        selection.toggle(0, &ROWS);
        assert!(selection.state().is_empty());

        let (mut multi, multi_log) = recording(SelectionMode::Multiple);
        multi.toggle(ROWS.len(), &ROWS);
        assert!(multi.state().is_empty());

        assert!(log.lock().unwrap().is_empty());
        assert!(multi_log.lock().unwrap().is_empty());
    }

    #[test]
    fn select_all_only_in_multiple_mode() {
        let (mut single, single_log) = recording(SelectionMode::Single);
        single.select_all(&ROWS);
        assert!(single.state().is_empty());
        assert!(single_log.lock().unwrap().is_empty());

        let (mut multi, multi_log) = recording(SelectionMode::Multiple);
        multi.select_all(&ROWS);
        assert_eq!(multi.state().len(), ROWS.len());
        assert_eq!(multi_log.lock().unwrap()[0], ROWS.to_vec());
    }

    #[test]
    fn clear_empties_in_any_mode() {
        let (mut selection, log) = recording(SelectionMode::Single);
        selection.toggle(4, &ROWS);
        selection.clear(&ROWS);

        assert!(selection.state().is_empty());
        assert_eq!(log.lock().unwrap().len(), 2);
    }

    #[test]
    fn reconcile_purges_and_notifies_once() {
        let (mut selection, log) = recording(SelectionMode::Multiple);
        let five = &ROWS[..5];
        selection.toggle(0, five);
        selection.toggle(3, five);
        log.lock().unwrap().clear();

        let three = ["x", "y", "z"];
        selection.reconcile(&three);

        assert_eq!(selection.state().selected().iter().copied().collect::<Vec<_>>(), vec![0]);
        assert_eq!(*log.lock().unwrap(), vec![vec!["x"]]);
    }

    #[test]
    fn reconcile_without_stale_indices_is_silent() {
        let (mut selection, log) = recording(SelectionMode::Multiple);
        selection.toggle(1, &ROWS);
        log.lock().unwrap().clear();

        selection.reconcile(&ROWS[..2]);
        assert!(selection.state().is_selected(1));
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn switching_to_single_keeps_lowest_index() {
        let (mut selection, log) = recording(SelectionMode::Multiple);
        selection.toggle(4, &ROWS);
        selection.toggle(2, &ROWS);
        log.lock().unwrap().clear();

        selection.set_mode(SelectionMode::Single, &ROWS);
        assert_eq!(selection.state().mode(), SelectionMode::Single);
        assert_eq!(selection.state().selected().iter().copied().collect::<Vec<_>>(), vec![2]);
        assert_eq!(*log.lock().unwrap(), vec![vec!["c"]]);

        selection.set_mode(SelectionMode::None, &ROWS);
        assert!(selection.state().is_empty());
    }

    #[test]
    fn sync_purges_before_trimming_and_notifies_once() {
        let (mut selection, log) = recording(SelectionMode::Multiple);
        selection.toggle(1, &ROWS);
        selection.toggle(4, &ROWS);
        selection.toggle(5, &ROWS);
        log.lock().unwrap().clear();

        // 4 and 5 are gone; Single keeps the lowest surviving index
        selection.sync(SelectionMode::Single, &ROWS[..3]);
        assert_eq!(selection.state().selected().iter().copied().collect::<Vec<_>>(), vec![1]);
        assert_eq!(*log.lock().unwrap(), vec![vec!["b"]]);

        selection.sync(SelectionMode::Single, &ROWS[..3]);
        assert_eq!(log.lock().unwrap().len(), 1);
    }

    #[test]
    fn selectable_flag_maps_to_modes() {
        assert_eq!(SelectionMode::from(true), SelectionMode::Multiple);
        assert_eq!(SelectionMode::from(false), SelectionMode::None);
        assert!(!SelectionMode::None.is_selectable());
    }
}
