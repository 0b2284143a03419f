//! Autocomplete entry control
//!
//! A single-line text input that filters a suggestion source on every
//! change and drives the overlay below it.

mod entry_events;
mod entry_state;

pub use entry_events::EntryEvent;
pub use entry_state::{DEFAULT_LIST_HEIGHT, EntryOptions, EntryState};
