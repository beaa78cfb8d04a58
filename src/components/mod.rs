//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render screen chrome while reading shared state from Leptos
//! context providers; screen-level orchestration stays in `pages`.

pub mod auth_layout;
pub mod tab_bar;
