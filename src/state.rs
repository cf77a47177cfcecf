use std::path::{Path, PathBuf};

use crate::color::CityColors;
use crate::data::filter::{filtered_indices, CostRange, Handle};
use crate::data::loader::load_file;
use crate::data::model::{CityCostRecord, CityCostTable};

/// Loaded at startup, relative to the working directory.
pub const DEFAULT_DATASET_PATH: &str = "cities_living_cost.csv";

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The working set is loaded and derived once per file; interactions only
/// recompute the selection and the range view.
#[derive(Default)]
pub struct AppState {
    /// Working set (None until a file loads successfully).
    pub dataset: Option<CityCostTable>,

    /// File the working set came from.
    pub source_path: Option<PathBuf>,

    /// City shown in the overview.
    pub selected_city: Option<String>,

    /// Current slider range on the total student cost.
    pub cost_range: Option<CostRange>,

    /// Indices of cities passing the range filter (cached).
    pub visible_indices: Vec<usize>,

    /// Per-city chart colours.
    pub colors: CityColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Ingest a newly loaded working set: select the first city, open the
    /// range to the full bounds.
    pub fn set_dataset(&mut self, dataset: CityCostTable) {
        self.selected_city = dataset.city_names().next().map(str::to_string);
        self.cost_range = dataset.cost_bounds();
        self.colors = CityColors::new(dataset.city_names());
        self.dataset = Some(dataset);
        self.status_message = None;
        self.refilter();
    }

    /// Load `path` and install it. On failure nothing of the previous
    /// dataset survives and the error becomes the status message.
    pub fn load_path(&mut self, path: &Path) {
        self.source_path = Some(path.to_path_buf());
        match load_file(path) {
            Ok(dataset) => {
                log::info!("Loaded {} cities from {}", dataset.len(), path.display());
                self.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", path.display());
                self.clear();
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Re-read the current source file.
    pub fn reload(&mut self) {
        match self.source_path.clone() {
            Some(path) => self.load_path(&path),
            None => {
                log::warn!("Reload requested with no dataset file");
                self.status_message = Some("Error: no dataset file to reload".to_string());
            }
        }
    }

    fn clear(&mut self) {
        self.dataset = None;
        self.selected_city = None;
        self.cost_range = None;
        self.visible_indices.clear();
        self.colors = CityColors::default();
    }

    /// Recompute `visible_indices` after a range change.
    pub fn refilter(&mut self) {
        self.visible_indices = match (&self.dataset, &self.cost_range) {
            (Some(ds), Some(range)) => filtered_indices(ds, range),
            _ => Vec::new(),
        };
    }

    /// Select a city for the overview. Names outside the working set are
    /// ignored; returns whether the selection changed.
    pub fn select_city(&mut self, name: &str) -> bool {
        let known = self
            .dataset
            .as_ref()
            .is_some_and(|ds| ds.find_city(name).is_some());
        if !known || self.selected_city.as_deref() == Some(name) {
            return false;
        }
        log::debug!("Selected city {name}");
        self.selected_city = Some(name.to_string());
        true
    }

    /// The record behind the current selection.
    pub fn selected_record(&self) -> Option<&CityCostRecord> {
        let name = self.selected_city.as_deref()?;
        self.dataset.as_ref()?.find_city(name)
    }

    /// Full min/max of the derived total cost.
    pub fn cost_bounds(&self) -> Option<CostRange> {
        self.dataset.as_ref()?.cost_bounds()
    }

    /// Move one end of the cost range, see [`CostRange::drag`].
    pub fn drag_cost_range(&mut self, handle: Handle, value: f64) {
        let (Some(bounds), Some(current)) = (self.cost_bounds(), self.cost_range) else {
            return;
        };
        let range = current.drag(handle, value, &bounds);
        if self.cost_range != Some(range) {
            log::debug!("Cost range set to [{}, {}]", range.lo, range.hi);
            self.cost_range = Some(range);
            self.refilter();
        }
    }

    /// Open the range to the full bounds again.
    pub fn reset_cost_range(&mut self) {
        self.cost_range = self.cost_bounds();
        self.refilter();
    }

    /// Records passing the range filter, in source order.
    pub fn visible_records(&self) -> Vec<&CityCostRecord> {
        match &self.dataset {
            Some(ds) => self
                .visible_indices
                .iter()
                .filter_map(|&i| ds.get(i))
                .collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::data::model::sample_table;

    fn loaded_state() -> AppState {
        let mut state = AppState::default();
        state.set_dataset(sample_table());
        state
    }

    fn visible_cities(state: &AppState) -> Vec<&str> {
        state
            .visible_records()
            .into_iter()
            .map(|r| r.city.as_str())
            .collect()
    }

    #[test]
    fn test_set_dataset_defaults() {
        let state = loaded_state();
        assert_eq!(state.selected_city.as_deref(), Some("Berlin"));
        assert_eq!(state.cost_range, Some(CostRange::new(750.5, 1527.0)));
        assert_eq!(visible_cities(&state), ["Berlin", "Munich", "Leipzig"]);
    }

    #[test]
    fn test_select_city_only_accepts_working_set() {
        let mut state = loaded_state();
        assert!(state.select_city("Leipzig"));
        assert_eq!(state.selected_record().unwrap().city, "Leipzig");

        assert!(!state.select_city("Vienna"));
        assert_eq!(state.selected_city.as_deref(), Some("Leipzig"));
    }

    #[test]
    fn test_drag_cost_range_filters_and_clamps() {
        let mut state = loaded_state();
        state.drag_cost_range(Handle::Min, 900.0);
        state.drag_cost_range(Handle::Max, 1200.0);
        assert_eq!(state.cost_range, Some(CostRange::new(900.0, 1200.0)));
        assert_eq!(visible_cities(&state), ["Berlin"]);

        state.drag_cost_range(Handle::Min, 0.0);
        state.drag_cost_range(Handle::Max, 10_000.0);
        assert_eq!(state.cost_range, Some(CostRange::new(750.5, 1527.0)));
        assert_eq!(visible_cities(&state), ["Berlin", "Munich", "Leipzig"]);
    }

    #[test]
    fn test_drag_min_past_max_pushes_max() {
        let mut state = loaded_state();
        state.drag_cost_range(Handle::Max, 1000.0);
        state.drag_cost_range(Handle::Min, 1527.0);
        assert_eq!(state.cost_range, Some(CostRange::new(1527.0, 1527.0)));
        assert_eq!(visible_cities(&state), ["Munich"]);
    }

    #[test]
    fn test_empty_view_keeps_selection() {
        let mut state = loaded_state();
        state.drag_cost_range(Handle::Min, 1000.0);
        state.drag_cost_range(Handle::Max, 1100.0);
        assert!(state.visible_records().is_empty());
        assert_eq!(state.selected_record().unwrap().city, "Berlin");

        state.reset_cost_range();
        assert_eq!(visible_cities(&state).len(), 3);
    }

    #[test]
    fn test_failed_load_clears_previous_dataset() {
        let mut state = loaded_state();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.csv");
        {
            let mut file = std::fs::File::create(&path).unwrap();
            writeln!(file, "City,Cost_index\nBerlin,68.4").unwrap();
        }

        state.load_path(&path);
        assert!(state.dataset.is_none());
        assert!(state.selected_record().is_none());
        assert!(state.visible_records().is_empty());
        assert!(state
            .status_message
            .as_deref()
            .unwrap()
            .contains("missing required column"));
    }

    #[test]
    fn test_reload_without_source_reports_status() {
        let mut state = AppState::default();
        state.reload();
        assert!(state.dataset.is_none());
        assert_eq!(
            state.status_message.as_deref(),
            Some("Error: no dataset file to reload")
        );
    }

    #[test]
    fn test_load_path_installs_bundled_dataset() {
        let mut state = AppState::default();
        state.load_path(&Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_DATASET_PATH));
        assert!(state.status_message.is_none());
        assert_eq!(state.visible_records().len(), 15);
        assert_eq!(state.selected_city.as_deref(), Some("Berlin"));
    }
}
