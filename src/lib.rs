//! Checkbox board page: an app bar with a 2x2..5x5 size picker above an NxN
//! grid of checkboxes. The selected size lives in the address-bar fragment.

pub mod components;
pub mod config;
pub mod error;
pub mod grid;
pub mod model;
pub mod state;

use components::{App, AppProps};
use config::{AppConfig, CONFIG_ELEMENT_ID};
use error::AppError;
use state::FragmentHandle;
use web_sys::Document;

/// Reads the optional JSON override embedded in the page.
fn load_config(document: &Document) -> Result<AppConfig, AppError> {
    match document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    {
        Some(raw) if !raw.trim().is_empty() => AppConfig::from_json(&raw),
        _ => Ok(AppConfig::default()),
    }
}

/// Mounts the app into the configured host element.
pub fn start() -> Result<(), AppError> {
    let window = web_sys::window().ok_or(AppError::NoWindow)?;
    let document = window.document().ok_or(AppError::NoDocument)?;
    let config = load_config(&document)?;
    console_log::init_with_level(config.level()).map_err(|e| AppError::Logger(e.to_string()))?;

    let host = document
        .get_element_by_id(&config.host_id)
        .ok_or_else(|| AppError::MissingHost(config.host_id.clone()))?;
    log::info!("mounting into #{}", config.host_id);

    let props = AppProps {
        config,
        fragment: FragmentHandle::browser(),
    };
    yew::Renderer::<App>::with_root_and_props(host, props).render();
    Ok(())
}
