// Colors shared through a context so nested components don't need theme props.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub bar_background: &'static str,
    pub bar_text: &'static str,
    pub accent: &'static str,
    pub font_family: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bar_background: "#2c95dd",
            bar_text: "#ffffff",
            accent: "#2c95dd",
            font_family: "Roboto, sans-serif",
        }
    }
}
