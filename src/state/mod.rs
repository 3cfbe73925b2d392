pub mod fragment;
pub mod selection;

pub use fragment::{FragmentHandle, LocationHash, MemoryFragment, SizeChannel, SizeSink, SizeSource};
pub use selection::{commit_selection, initial_state, parse_picker_value};
