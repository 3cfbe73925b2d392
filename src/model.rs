//! Application state for the grid page.
//! The only state is the selected board size; everything else is derived.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

/// Sizes offered by the picker, in display order.
pub const SIZE_OPTIONS: [i64; 4] = [2, 3, 4, 5];

/// Pixel budget per cell along one side of the grid.
pub const CELL_PX: u32 = 36;

/// Side length of the grid in pixels. Undefined, zero or negative sizes map to 0.
pub fn pixel_dimension(size: Option<i64>) -> u32 {
    side_len(size).saturating_mul(CELL_PX)
}

/// Number of rows/columns to lay out for a size; never fails.
pub fn side_len(size: Option<i64>) -> u32 {
    match size {
        Some(n) if n > 0 => u32::try_from(n).unwrap_or(u32::MAX),
        _ => 0,
    }
}

/// Picker label for a size, e.g. `3x3`.
pub fn size_label(size: i64) -> String {
    format!("{size}x{size}")
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// Board side length. `None` when the fragment was absent or unparseable.
    pub size: Option<i64>,
}

impl ViewState {
    pub fn new(size: Option<i64>) -> Self {
        Self { size }
    }

    pub fn pixel_dimension(&self) -> u32 {
        pixel_dimension(self.size)
    }

    /// Returns the state with `size` replaced.
    pub fn with_size(self, size: i64) -> Self {
        Self { size: Some(size) }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewAction {
    SelectSize(i64),
}

impl Reducible for ViewState {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ViewAction::SelectSize(size) => {
                if self.size == Some(size) {
                    return self;
                }
                Rc::new((*self).with_size(size))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_dimension_is_36_per_cell() {
        for n in SIZE_OPTIONS {
            assert_eq!(pixel_dimension(Some(n)), 36 * n as u32);
        }
        assert_eq!(ViewState::new(Some(4)).pixel_dimension(), 144);
    }

    #[test]
    fn invalid_sizes_have_no_extent() {
        assert_eq!(pixel_dimension(None), 0);
        assert_eq!(pixel_dimension(Some(0)), 0);
        assert_eq!(pixel_dimension(Some(-3)), 0);
        assert_eq!(side_len(Some(i64::MAX)), u32::MAX);
        assert_eq!(pixel_dimension(Some(i64::MAX)), u32::MAX);
    }

    #[test]
    fn labels_use_n_by_n_form() {
        let labels: Vec<String> = SIZE_OPTIONS.iter().map(|&n| size_label(n)).collect();
        assert_eq!(labels, ["2x2", "3x3", "4x4", "5x5"]);
    }

    #[test]
    fn select_size_replaces_state() {
        let state = Rc::new(ViewState::default());
        let next = state.clone().reduce(ViewAction::SelectSize(3));
        assert_eq!(next.size, Some(3));
        assert_eq!(state.size, None);

        let again = next.clone().reduce(ViewAction::SelectSize(5));
        assert_eq!(again.size, Some(5));
    }

    #[test]
    fn reselecting_same_size_keeps_state_instance() {
        let state = Rc::new(ViewState::new(Some(2)));
        let next = state.clone().reduce(ViewAction::SelectSize(2));
        assert!(Rc::ptr_eq(&state, &next));
    }
}
