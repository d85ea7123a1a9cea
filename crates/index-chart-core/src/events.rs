// File: crates/index-chart-core/src/events.rs
// Summary: Compiled-in catalogue of market events and the filter that decides which are drawn.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::series::parse_month_year;

/// Events that can be singled out with a "Highlight Major Event" toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventId {
    BlackMonday,
    DotComBust,
    GlobalFinancialCrisis,
    EurozoneCrisis,
    CovidCrash,
    RateHikes,
}

impl EventId {
    pub const ALL: [EventId; 6] = [
        EventId::BlackMonday,
        EventId::DotComBust,
        EventId::GlobalFinancialCrisis,
        EventId::EurozoneCrisis,
        EventId::CovidCrash,
        EventId::RateHikes,
    ];

    /// Toggle caption.
    pub fn name(&self) -> &'static str {
        match self {
            EventId::BlackMonday => "Black Monday",
            EventId::DotComBust => "Dot-com Bubble",
            EventId::GlobalFinancialCrisis => "Global Financial Crisis",
            EventId::EurozoneCrisis => "Eurozone Crisis",
            EventId::CovidCrash => "COVID Crash",
            EventId::RateHikes => "Inflation & Rate Hikes",
        }
    }

    /// Parse the kebab-case id used in config files and on the command line.
    pub fn from_slug(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.slug() == s)
    }

    pub fn slug(&self) -> &'static str {
        match self {
            EventId::BlackMonday => "black-monday",
            EventId::DotComBust => "dot-com-bust",
            EventId::GlobalFinancialCrisis => "global-financial-crisis",
            EventId::EurozoneCrisis => "eurozone-crisis",
            EventId::CovidCrash => "covid-crash",
            EventId::RateHikes => "rate-hikes",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EventMarker {
    pub date: NaiveDate,
    pub label: &'static str,
    pub id: Option<EventId>,
}

// (MM/YYYY, label, filter id)
const CATALOGUE: [(&str, &str, Option<EventId>); 22] = [
    ("03/1980", "Volcker Shock", None),
    ("10/1987", "Black Monday", Some(EventId::BlackMonday)),
    ("07/1990", "Early 90s Recession", None),
    ("07/1997", "Asian Crisis", None),
    ("09/1998", "LTCM Collapse", None),
    ("03/2000", "Dot-com Bubble Burst", Some(EventId::DotComBust)),
    ("09/2001", "9/11 Attacks", None),
    ("09/2008", "Global Financial Crisis", Some(EventId::GlobalFinancialCrisis)),
    ("05/2010", "Eurozone Crisis", Some(EventId::EurozoneCrisis)),
    ("08/2011", "US Debt Downgrade", None),
    ("08/2015", "China Market Turmoil", None),
    ("06/2016", "Brexit", None),
    ("10/2018", "Trade War Fears", None),
    ("03/2020", "COVID Crash", Some(EventId::CovidCrash)),
    ("02/2022", "Russia Invades Ukraine", None),
    ("06/2022", "Inflation & Rate Hikes", Some(EventId::RateHikes)),
    ("10/2022", "UK Gilt Crisis", None),
    ("03/2023", "Banking Mini-Crisis", None),
    ("05/2023", "US Debt Ceiling Crisis", None),
    ("10/2023", "Israel-Hamas War Begins", None),
    ("11/2023", "AI-Led Rally Begins", None),
    ("01/2024", "Fed Pivot Optimism", None),
];

/// The static catalogue, in date order.
pub fn catalogue() -> Vec<EventMarker> {
    let mut out: Vec<EventMarker> = CATALOGUE
        .iter()
        .filter_map(|&(date, label, id)| match parse_month_year(date) {
            Some(date) => Some(EventMarker { date, label, id }),
            None => {
                log::warn!("skipping catalogue entry {label:?} with bad date {date:?}");
                None
            }
        })
        .collect();
    out.sort_by_key(|e| e.date);
    out
}

/// Markers to draw. Hidden entirely when `show_events` is off. Otherwise, if
/// any filter is active, only events whose id is in `filters` are kept (events
/// without an id are dropped too); with no active filter the full catalogue is kept.
pub fn visible_events(
    catalogue: &[EventMarker],
    filters: &BTreeSet<EventId>,
    show_events: bool,
) -> Vec<EventMarker> {
    if !show_events {
        return Vec::new();
    }
    if filters.is_empty() {
        return catalogue.to_vec();
    }
    catalogue
        .iter()
        .filter(|e| e.id.is_some_and(|id| filters.contains(&id)))
        .cloned()
        .collect()
}

/// Keep only markers dated inside `[start, end]`.
pub fn clip_to_domain(events: Vec<EventMarker>, start: NaiveDate, end: NaiveDate) -> Vec<EventMarker> {
    events.into_iter().filter(|e| e.date >= start && e.date <= end).collect()
}
