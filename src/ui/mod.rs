//! UI layer: App orchestrator, panel renderer, colour palette, and fonts.

pub mod app;
pub mod colors;
pub mod fonts;
pub mod panel_view;
