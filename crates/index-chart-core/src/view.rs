// File: crates/index-chart-core/src/view.rs
// Host-owned view state. The engine reads a snapshot of it on every recompute.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::events::EventId;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewState {
    pub log_scale: bool,
    /// Trailing smoothing window in points; clamped to `[1, len]` on use.
    pub smoothing_window: usize,
    pub show_events: bool,
    /// Only drawn in log mode.
    pub show_trendline: bool,
    /// Active "highlight" toggles. Any entry turns the catalogue into an allow-list.
    pub event_filters: BTreeSet<EventId>,
    /// Brushed time window; `None` shows the whole series.
    pub selected_domain: Option<(NaiveDate, NaiveDate)>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            log_scale: false,
            smoothing_window: 1,
            show_events: true,
            show_trendline: false,
            event_filters: BTreeSet::new(),
            selected_domain: None,
        }
    }
}

impl ViewState {
    /// Selected window with its bounds in ascending order.
    pub fn normalized_domain(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.selected_domain.map(|(a, b)| if a <= b { (a, b) } else { (b, a) })
    }

    /// Flip one highlight toggle.
    pub fn toggle_filter(&mut self, id: EventId) {
        if !self.event_filters.remove(&id) {
            self.event_filters.insert(id);
        }
    }

    pub fn with_selection(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.selected_domain = Some((start, end));
        self
    }
}
