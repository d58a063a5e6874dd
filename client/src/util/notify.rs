//! Blocking acknowledgment dialogs for mutation outcomes.

/// Show `message` in a browser alert. Outside the browser it is only logged.
pub fn acknowledge(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        let shown = web_sys::window().map(|w| w.alert_with_message(message));
        if !matches!(shown, Some(Ok(()))) {
            leptos::logging::warn!("could not show alert: {message}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        leptos::logging::log!("{message}");
    }
}
