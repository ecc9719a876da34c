//! Dark mode preference handling.
//!
//! The preference lives in `localStorage`; the effective theme is applied
//! as a `data-theme` attribute on `<html>`. With no stored preference the
//! system setting wins. SSR paths no-op so server rendering stays
//! deterministic.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "eventhub_dark";

#[cfg(feature = "hydrate")]
fn stored_preference() -> Option<bool> {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
    let value = storage.get_item(STORAGE_KEY).ok().flatten()?;
    Some(value == "true")
}

#[cfg(feature = "hydrate")]
fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map_or(false, |mq| mq.matches())
}

/// Resolve the initial preference and apply it. Returns the resolved value.
pub fn init() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let enabled = stored_preference().unwrap_or_else(system_prefers_dark);
        apply(enabled);
        enabled
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(element) = element {
            let _ = element.set_attribute("data-theme", if enabled { "dark" } else { "light" });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Flip the theme, persist the choice, and return the new value.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if let Some(storage) = storage {
            let _ = storage.set_item(STORAGE_KEY, if next { "true" } else { "false" });
        }
    }
    next
}
