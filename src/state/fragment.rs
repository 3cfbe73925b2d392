//! Address-bar fragment binding for the board size.
//!
//! The layout only talks to [`SizeSource`] and [`SizeSink`]. [`LocationHash`]
//! binds them to `window.location.hash`; [`MemoryFragment`] keeps the fragment
//! in memory for tests and non-browser hosts.

use crate::error::FragmentError;
use std::cell::RefCell;
use std::ops::Deref;
use std::rc::Rc;

/// Parses `#<number>` into a size. The remainder is trimmed; integral decimals
/// such as `4.0` are accepted, anything else is rejected.
pub fn parse_fragment(fragment: &str) -> Result<i64, FragmentError> {
    if fragment.is_empty() {
        return Err(FragmentError::Empty);
    }
    let Some(rest) = fragment.strip_prefix('#') else {
        return Err(FragmentError::MissingHash(fragment.to_string()));
    };
    if rest.is_empty() {
        return Err(FragmentError::Empty);
    }
    let trimmed = rest.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return Ok(n);
    }
    match trimmed.parse::<f64>() {
        Ok(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(f as i64),
        _ => Err(FragmentError::NotANumber(rest.to_string())),
    }
}

pub fn encode_fragment(size: i64) -> String {
    format!("#{size}")
}

/// Size to start from, given the raw fragment. Absent or malformed fragments
/// leave the size undefined.
pub fn size_from_fragment(fragment: &str) -> Option<i64> {
    match parse_fragment(fragment) {
        Ok(n) => Some(n),
        Err(FragmentError::Empty) => None,
        Err(err) => {
            log::warn!("ignoring fragment: {err}");
            None
        }
    }
}

/// Supplies the size the page starts with. Read once per layout.
pub trait SizeSource {
    fn initial_size(&self) -> Option<i64>;
}

/// Told about every committed size selection.
pub trait SizeSink {
    fn size_changed(&self, size: i64);
}

pub trait SizeChannel: SizeSource + SizeSink {}

impl<T: SizeSource + SizeSink> SizeChannel for T {}

/// Browser adapter over `window.location.hash`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocationHash;

impl LocationHash {
    fn location() -> Option<web_sys::Location> {
        web_sys::window().map(|win| win.location())
    }
}

impl SizeSource for LocationHash {
    fn initial_size(&self) -> Option<i64> {
        let hash = Self::location().and_then(|loc| loc.hash().ok())?;
        size_from_fragment(&hash)
    }
}

impl SizeSink for LocationHash {
    fn size_changed(&self, size: i64) {
        let Some(location) = Self::location() else {
            log::warn!("no window; fragment not updated");
            return;
        };
        if let Err(err) = location.set_hash(&encode_fragment(size)) {
            log::warn!("failed to write fragment: {err:?}");
        }
    }
}

/// In-memory fragment with the same read/write behavior as the address bar.
#[derive(Debug, Default)]
pub struct MemoryFragment {
    fragment: RefCell<String>,
}

impl MemoryFragment {
    pub fn new(fragment: impl Into<String>) -> Self {
        Self {
            fragment: RefCell::new(fragment.into()),
        }
    }

    pub fn fragment(&self) -> String {
        self.fragment.borrow().clone()
    }
}

impl SizeSource for MemoryFragment {
    fn initial_size(&self) -> Option<i64> {
        size_from_fragment(&self.fragment.borrow())
    }
}

impl SizeSink for MemoryFragment {
    fn size_changed(&self, size: i64) {
        *self.fragment.borrow_mut() = encode_fragment(size);
    }
}

/// Shared handle passed through component props. Equal only to clones of itself.
#[derive(Clone)]
pub struct FragmentHandle(Rc<dyn SizeChannel>);

impl FragmentHandle {
    pub fn new(channel: impl SizeChannel + 'static) -> Self {
        Self(Rc::new(channel))
    }

    pub fn browser() -> Self {
        Self::new(LocationHash)
    }
}

impl Deref for FragmentHandle {
    type Target = dyn SizeChannel;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl PartialEq for FragmentHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_fragments() {
        assert_eq!(parse_fragment("#4"), Ok(4));
        assert_eq!(parse_fragment("#12"), Ok(12));
        assert_eq!(parse_fragment("#-2"), Ok(-2));
        assert_eq!(parse_fragment("# 3 "), Ok(3));
        assert_eq!(parse_fragment("#5.0"), Ok(5));
    }

    #[test]
    fn rejects_missing_or_malformed_fragments() {
        assert_eq!(parse_fragment(""), Err(FragmentError::Empty));
        assert_eq!(parse_fragment("#"), Err(FragmentError::Empty));
        assert_eq!(
            parse_fragment("4"),
            Err(FragmentError::MissingHash("4".into()))
        );
        assert_eq!(
            parse_fragment("#abc"),
            Err(FragmentError::NotANumber("abc".into()))
        );
        assert_eq!(
            parse_fragment("#2.5"),
            Err(FragmentError::NotANumber("2.5".into()))
        );
        assert!(parse_fragment("#NaN").is_err());
        assert!(parse_fragment("#inf").is_err());
    }

    #[test]
    fn malformed_fragment_leaves_size_undefined() {
        assert_eq!(size_from_fragment("#abc"), None);
        assert_eq!(size_from_fragment(""), None);
        assert_eq!(size_from_fragment("#4"), Some(4));
    }

    #[test]
    fn memory_fragment_round_trips_selection() {
        let fragment = MemoryFragment::new("#4");
        assert_eq!(fragment.initial_size(), Some(4));
        fragment.size_changed(2);
        assert_eq!(fragment.fragment(), "#2");
        assert_eq!(fragment.initial_size(), Some(2));
    }

    #[test]
    fn handles_compare_by_identity() {
        let a = FragmentHandle::new(MemoryFragment::new("#3"));
        let b = FragmentHandle::new(MemoryFragment::new("#3"));
        assert!(a == a.clone());
        assert!(a != b);
        assert_eq!(a.initial_size(), Some(3));
    }
}
