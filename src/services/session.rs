use crate::catalog::{visible_subset, Catalog, Listing};
use crate::domain::models::{FilterPatch, NavigationIntent, SessionSnapshot};
use crate::services::filters::FilterStore;
use crate::services::focus::FocusTracker;
use crate::services::navigation;
use anyhow::{anyhow, bail};
use chrono::NaiveDate;

/// One line of user interaction, as typed into the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Filter(FilterPatch),
    Slide(usize),
    Tap(usize),
    Story,
    Subset,
    State,
    Quit,
}

/// What the session answers to one command. Serialized as one JSON line in
/// `--json` mode.
#[derive(Debug, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionReply {
    FiltersCommitted {
        intent: NavigationIntent,
        visible: usize,
    },
    FocusMoved {
        focused: usize,
    },
    ListingSelected {
        intent: NavigationIntent,
    },
    StoryOpened {
        intent: NavigationIntent,
    },
    Subset {
        rows: Vec<Listing>,
    },
    Snapshot {
        state: SessionSnapshot,
    },
    Bye,
}

/// The catalog view instance: owns the filter store and the focus tracker,
/// borrows the immutable catalog, and processes interactions strictly in the
/// order they arrive. A failed command leaves all state untouched.
pub struct Session<'a> {
    catalog: &'a Catalog,
    store: FilterStore,
    focus: FocusTracker,
    visible: Vec<&'a Listing>,
    rendered_generation: u64,
}

impl<'a> Session<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        let store = FilterStore::default();
        let visible = visible_subset(&catalog.items, store.read());
        let rendered_generation = store.generation();
        Self {
            catalog,
            store,
            focus: FocusTracker::default(),
            visible,
            rendered_generation,
        }
    }

    pub fn visible(&self) -> &[&'a Listing] {
        &self.visible
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let c = self.store.read();
        SessionSnapshot {
            district: c.district.clone(),
            headcount: c.headcount,
            date_from: c.date_from,
            date_to: c.date_to,
            focused: self.focus.focused(),
            visible: self.visible.len(),
        }
    }

    /// Re-evaluate the subset when the store generation moved past what the
    /// view last rendered. A committed filter changes the subset identity, so
    /// the focus goes back to the first card.
    fn redraw_if_stale(&mut self) {
        if self.store.generation() != self.rendered_generation {
            self.visible = visible_subset(&self.catalog.items, self.store.read());
            self.focus.reset();
            self.rendered_generation = self.store.generation();
        }
    }

    pub fn apply(&mut self, command: SessionCommand) -> anyhow::Result<SessionReply> {
        match command {
            SessionCommand::Filter(patch) => {
                let intent = navigation::confirm_filters(&mut self.store, &patch)?;
                self.redraw_if_stale();
                Ok(SessionReply::FiltersCommitted {
                    intent,
                    visible: self.visible.len(),
                })
            }
            SessionCommand::Slide(index) => {
                self.focus.on_slide_change(index, self.visible.len());
                Ok(SessionReply::FocusMoved {
                    focused: self.focus.focused(),
                })
            }
            SessionCommand::Tap(index) => {
                if self.visible.is_empty() {
                    return Err(navigation::NavigationError::NoListingSelected.into());
                }
                self.focus.on_slide_change(index, self.visible.len());
                let listing = self.visible[self.focus.focused()];
                Ok(SessionReply::ListingSelected {
                    intent: navigation::select_listing(listing),
                })
            }
            SessionCommand::Story => {
                let intent = navigation::view_story(self.focus.current(&self.visible))?;
                Ok(SessionReply::StoryOpened { intent })
            }
            SessionCommand::Subset => Ok(SessionReply::Subset {
                rows: self.visible.iter().map(|l| (*l).clone()).collect(),
            }),
            SessionCommand::State => Ok(SessionReply::Snapshot {
                state: self.snapshot(),
            }),
            SessionCommand::Quit => Ok(SessionReply::Bye),
        }
    }
}

/// Parse one session line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> anyhow::Result<Option<SessionCommand>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let mut parts = line.split_whitespace();
    let verb = parts.next().unwrap_or_default();
    let command = match verb {
        "filter" => SessionCommand::Filter(parse_patch(parts)?),
        "slide" => SessionCommand::Slide(parse_index(parts.next())?),
        "tap" => SessionCommand::Tap(parse_index(parts.next())?),
        "story" => SessionCommand::Story,
        "subset" => SessionCommand::Subset,
        "state" => SessionCommand::State,
        "quit" => SessionCommand::Quit,
        other => bail!("unknown session command: {}", other),
    };
    Ok(Some(command))
}

fn parse_index(arg: Option<&str>) -> anyhow::Result<usize> {
    let raw = arg.ok_or_else(|| anyhow!("missing index argument"))?;
    raw.parse()
        .map_err(|_| anyhow!("invalid index: {}", raw))
}

fn parse_patch<'i>(pairs: impl Iterator<Item = &'i str>) -> anyhow::Result<FilterPatch> {
    let mut patch = FilterPatch::default();
    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| anyhow!("expected key=value, got: {}", pair))?;
        match key {
            "district" => patch.district = Some(value.to_string()),
            "headcount" => {
                patch.headcount =
                    Some(value.parse().map_err(|_| anyhow!("invalid headcount: {}", value))?)
            }
            "from" => patch.date_from = Some(parse_date(value)?),
            "to" => patch.date_to = Some(parse_date(value)?),
            other => bail!("unknown filter key: {}", other),
        }
    }
    Ok(patch)
}

fn parse_date(raw: &str) -> anyhow::Result<NaiveDate> {
    raw.parse()
        .map_err(|_| anyhow!("invalid date (want YYYY-MM-DD): {}", raw))
}
