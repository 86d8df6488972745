//! Top navigation bar

use eframe::egui;
use egui::RichText;

use crate::gui::constants::*;
use crate::sections::SectionId;

/// Render the navbar; returns the section link that was clicked, if any.
/// Past the scroll threshold the bar condenses (smaller wordmark).
pub fn navbar(
    ui: &mut egui::Ui,
    current: Option<SectionId>,
    scrolled: bool,
) -> Option<SectionId> {
    let mut clicked = None;

    let wordmark_size = if scrolled { 16.0 } else { 20.0 };
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(WINDOW_TITLE)
                .strong()
                .size(wordmark_size)
                .color(ACCENT),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            for &id in SectionId::ALL.iter().rev() {
                let is_current = current == Some(id);
                if ui.selectable_label(is_current, id.label()).clicked() {
                    clicked = Some(id);
                }
            }
        });
    });

    clicked
}
