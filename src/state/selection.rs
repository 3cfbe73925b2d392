// Layout controller transitions, kept free of Yew hooks so they run natively.
use super::fragment::{SizeSink, SizeSource};
use crate::model::{SIZE_OPTIONS, ViewAction, ViewState};

/// Builds the starting state from the fragment. Called once per layout.
pub fn initial_state<S: SizeSource + ?Sized>(source: &S) -> ViewState {
    ViewState::new(source.initial_size())
}

/// Writes the fragment for a picked size and returns the action that commits it.
pub fn commit_selection<S: SizeSink + ?Sized>(sink: &S, size: i64) -> ViewAction {
    sink.size_changed(size);
    ViewAction::SelectSize(size)
}

/// Maps a raw picker value to a size, or `None` when it is not one of the options.
pub fn parse_picker_value(raw: &str) -> Option<i64> {
    let size = raw.trim().parse::<i64>().ok()?;
    SIZE_OPTIONS.contains(&size).then_some(size)
}
