//! Engine sub-modules: widget interface, title randomizer, panel stack, and
//! button dispatch. None of these depend on egui.

pub mod actions;
pub mod panels;
pub mod title;
pub mod widgets;
