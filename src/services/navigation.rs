use crate::catalog::Listing;
use crate::domain::models::{FilterCriteria, FilterPatch, NavigationIntent};
use crate::services::filters::{FilterError, FilterStore};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum NavigationError {
    #[error("no listing selected")]
    NoListingSelected,
}

/// Validate and commit the pending criteria, then ask the router to re-render
/// the catalog view with the committed filters. The date range rides along as
/// booking parameters.
pub fn confirm_filters(
    store: &mut FilterStore,
    patch: &FilterPatch,
) -> Result<NavigationIntent, FilterError> {
    store.write(patch)?;
    Ok(catalog_intent(store.read()))
}

fn catalog_intent(criteria: &FilterCriteria) -> NavigationIntent {
    NavigationIntent::new("catalog")
        .with("district", criteria.district.clone())
        .with("headcount", criteria.headcount.to_string())
        .with("from", criteria.date_from.to_string())
        .with("to", criteria.date_to.to_string())
}

pub fn select_listing(listing: &Listing) -> NavigationIntent {
    NavigationIntent::new("details").with("id", listing.id.clone())
}

/// Stories always open at their first episode.
pub fn view_story(current: Option<&Listing>) -> Result<NavigationIntent, NavigationError> {
    let listing = current.ok_or(NavigationError::NoListingSelected)?;
    Ok(NavigationIntent::new("story")
        .with("id", listing.id.clone())
        .with("episode", "0"))
}
