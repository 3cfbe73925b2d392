pub mod app;
pub mod app_bar;
pub mod grid;
pub mod size_picker;
pub mod theme;

pub use app::{App, AppProps};
pub use theme::Theme;
