use crate::domain::constants::{HEADCOUNT_MAX, HEADCOUNT_MIN};
use crate::domain::models::{FilterCriteria, FilterPatch};
use chrono::NaiveDate;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum FilterError {
    #[error("invalid filter: date range {from} > {to}")]
    DateRangeInverted { from: NaiveDate, to: NaiveDate },
    #[error("invalid filter: headcount {0} outside 1..=4")]
    HeadcountOutOfRange(u8),
}

/// Session filter state. A successful `write` bumps the generation counter;
/// the owning view re-reads and re-renders when the generation moves, which
/// replaces the reactive store of the original UI.
#[derive(Debug, Default)]
pub struct FilterStore {
    criteria: FilterCriteria,
    generation: u64,
}

pub fn merge(current: &FilterCriteria, patch: &FilterPatch) -> FilterCriteria {
    FilterCriteria {
        district: patch
            .district
            .clone()
            .unwrap_or_else(|| current.district.clone()),
        headcount: patch.headcount.unwrap_or(current.headcount),
        date_from: patch.date_from.unwrap_or(current.date_from),
        date_to: patch.date_to.unwrap_or(current.date_to),
    }
}

pub fn check(criteria: &FilterCriteria) -> Result<(), FilterError> {
    if criteria.headcount < HEADCOUNT_MIN || criteria.headcount > HEADCOUNT_MAX {
        return Err(FilterError::HeadcountOutOfRange(criteria.headcount));
    }
    if criteria.date_from > criteria.date_to {
        return Err(FilterError::DateRangeInverted {
            from: criteria.date_from,
            to: criteria.date_to,
        });
    }
    Ok(())
}

impl FilterStore {
    pub fn read(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Merge the patch over the current criteria and commit only if the
    /// merged result is valid. On rejection the stored criteria are left
    /// untouched.
    pub fn write(&mut self, patch: &FilterPatch) -> Result<(), FilterError> {
        let merged = merge(&self.criteria, patch);
        check(&merged)?;
        self.criteria = merged;
        self.generation += 1;
        Ok(())
    }
}
