//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps transient presentation preferences out of the session store so
//! chrome controls can evolve independently of identity state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for shared chrome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
}
