//! The saved selection set and its transitions.
//!
//! Every mutation the UI can make to the to-do list is a pure function
//! over the `Vec<Entry>` value: old state + action in, new state out.
//! That keeps the render/update cycle testable without a terminal and
//! reduces persistence to "serialize current state" after each transition.

use serde::{Deserialize, Serialize};

use super::activity::Activity;

/// One saved activity. Display order is the position in the vector;
/// identifiers within the set are unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(flatten)]
    pub activity: Activity,
    #[serde(default)]
    pub done: bool,
}

/// Is this activity currently in the selection set?
pub fn is_selected(entries: &[Entry], activity: &Activity) -> bool {
    entries.iter().any(|e| e.activity.id() == activity.id())
}

/// Toggle an activity in or out of the selection set.
///
/// Newly selected activities go to the top of the list. Toggling twice
/// returns the original state.
pub fn toggle(mut entries: Vec<Entry>, activity: &Activity) -> Vec<Entry> {
    if let Some(pos) = entries.iter().position(|e| e.activity.id() == activity.id()) {
        entries.remove(pos);
    } else {
        entries.insert(
            0,
            Entry {
                activity: activity.clone(),
                done: false,
            },
        );
    }
    entries
}

/// Remove the entry at `index`, if it exists.
pub fn remove(mut entries: Vec<Entry>, index: usize) -> Vec<Entry> {
    if index < entries.len() {
        entries.remove(index);
    }
    entries
}

/// Move the entry at `index` up one position. The first entry stays put.
pub fn move_up(mut entries: Vec<Entry>, index: usize) -> Vec<Entry> {
    if index > 0 && index < entries.len() {
        entries.swap(index, index - 1);
    }
    entries
}

/// Move the entry at `index` down one position. The last entry stays put.
pub fn move_down(mut entries: Vec<Entry>, index: usize) -> Vec<Entry> {
    if index + 1 < entries.len() {
        entries.swap(index, index + 1);
    }
    entries
}

/// Flip the done flag on the entry at `index`.
pub fn toggle_done(mut entries: Vec<Entry>, index: usize) -> Vec<Entry> {
    if let Some(entry) = entries.get_mut(index) {
        entry.done = !entry.done;
    }
    entries
}
