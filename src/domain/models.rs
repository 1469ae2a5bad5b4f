use crate::domain::constants::{ALL_DISTRICTS, DEFAULT_RANGE_DAYS, HEADCOUNT_MIN};
use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Session-scoped filter selection. One writer (the filter-confirmation
/// action), many readers.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub district: String,
    pub headcount: u8,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        let from = Local::now().date_naive();
        let to = from
            .checked_add_days(Days::new(DEFAULT_RANGE_DAYS))
            .unwrap_or(from);
        Self {
            district: ALL_DISTRICTS.to_string(),
            headcount: HEADCOUNT_MIN,
            date_from: from,
            date_to: to,
        }
    }
}

/// Partial edit applied by a filter commit; unset fields keep their current
/// value (replace-by-merge).
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct FilterPatch {
    pub district: Option<String>,
    pub headcount: Option<u8>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

/// Abstract instruction for the router: which view to show and with what
/// parameters. The core never performs the transition itself.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct NavigationIntent {
    pub target_view: String,
    pub params: BTreeMap<String, String>,
}

impl NavigationIntent {
    pub fn new(target_view: &str) -> Self {
        Self {
            target_view: target_view.to_string(),
            params: BTreeMap::new(),
        }
    }

    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }
}

#[derive(Serialize)]
pub struct DistrictRow {
    pub code: String,
    pub display_name: String,
    pub listings: usize,
}

#[derive(Serialize)]
pub struct ValidateReport {
    pub status: String,
    pub listings: usize,
    pub districts: usize,
    pub orphaned: Vec<String>,
}

#[derive(Debug, Serialize, Clone)]
pub struct SessionSnapshot {
    pub district: String,
    pub headcount: u8,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub focused: usize,
    pub visible: usize,
}
