//! Serif font family used by the title label.

use egui::FontFamily;
use once_cell::sync::Lazy;

pub static SERIF: Lazy<FontFamily> = Lazy::new(|| FontFamily::Name("serif".into()));

/// Registers [`SERIF`] with the context. egui ships no serif face, so the
/// family aliases the bundled proportional fonts.
pub fn install(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    let proportional = fonts
        .families
        .get(&FontFamily::Proportional)
        .cloned()
        .unwrap_or_default();
    log::debug!("serif family -> {proportional:?}");
    fonts.families.insert(SERIF.clone(), proportional);
    ctx.set_fonts(fonts);
}
