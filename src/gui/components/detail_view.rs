//! Detail overlay content
//!
//! Rebuilt from the record every frame the overlay is shown; immediate mode
//! makes the full rebuild the natural shape. Everything record-sourced is
//! escaped before display.

use eframe::egui;
use egui::RichText;

use crate::commands::NavCommand;
use crate::gui::components::card::tag_pill;
use crate::gui::constants::*;
use crate::project::{LinkKind, ProjectRecord};
use crate::text::escape_markup;

/// Render the full project detail; emits `Close` from the close button.
pub fn detail_view(ui: &mut egui::Ui, record: &ProjectRecord) -> Option<NavCommand> {
    let mut command = None;

    ui.horizontal(|ui| {
        ui.heading(escape_markup(&record.title));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("\u{2715}").clicked() {
                command = Some(NavCommand::Close);
            }
        });
    });
    ui.separator();
    ui.add_space(ITEM_SPACING);

    ui.label(escape_markup(&record.description));

    if !record.stats.is_empty() {
        ui.add_space(SECTION_SPACING);
        ui.horizontal(|ui| {
            for stat in &record.stats {
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(escape_markup(&stat.number))
                            .strong()
                            .size(20.0)
                            .color(ACCENT),
                    );
                    ui.weak(escape_markup(&stat.label));
                });
                ui.add_space(SECTION_SPACING);
            }
        });
    }

    if !record.tech_tags.is_empty() {
        ui.add_space(SECTION_SPACING);
        ui.horizontal_wrapped(|ui| {
            // Full list here, unlike the card
            for tag in &record.tech_tags {
                tag_pill(ui, tag);
            }
        });
    }

    for (section, bullets) in &record.details {
        if bullets.is_empty() {
            continue;
        }
        ui.add_space(SECTION_SPACING);
        ui.label(RichText::new(escape_markup(section)).strong());
        ui.add_space(ITEM_SPACING / 2.0);
        for bullet in bullets {
            ui.label(format!("\u{2022} {}", escape_markup(bullet)));
        }
    }

    if !record.links.is_empty() {
        ui.add_space(SECTION_SPACING);
        ui.separator();
        ui.add_space(ITEM_SPACING);
        ui.horizontal_wrapped(|ui| {
            for link in &record.links {
                match link.kind {
                    LinkKind::Normal => {
                        if ui.link(escape_markup(&link.text)).clicked() {
                            ui.ctx().open_url(egui::OpenUrl::new_tab(&link.url));
                        }
                    }
                    LinkKind::ComingSoon => {
                        ui.add_enabled(
                            false,
                            egui::Button::new(format!(
                                "{} (coming soon)",
                                escape_markup(&link.text)
                            )),
                        );
                    }
                }
            }
        });
    }

    command
}
