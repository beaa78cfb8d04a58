//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Presentation concerns stay out of the session store so identity state can
//! evolve independently of theming controls.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state shared through context (currently just the color scheme).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
}
