//! Carousel card rendering

use eframe::egui;
use egui::RichText;

use crate::carousel::CardRole;
use crate::commands::NavCommand;
use crate::constants::carousel::CARD_DESCRIPTION_LIMIT;
use crate::gui::constants::*;
use crate::project::ProjectRecord;
use crate::text::{escape_markup, truncate_chars};

/// Render one project card; emits `Open` when "Read more" is clicked.
/// Role only affects presentation: the active card is highlighted, the rest
/// are dimmed.
pub fn project_card(
    ui: &mut egui::Ui,
    index: usize,
    record: &ProjectRecord,
    role: CardRole,
) -> Option<NavCommand> {
    let mut command = None;

    let (fill, stroke, opacity) = match role {
        CardRole::Active => (CARD_ACTIVE_FILL, egui::Stroke::new(1.5, ACCENT), 1.0),
        CardRole::Neighbor => (CARD_FILL, egui::Stroke::new(1.0, CARD_STROKE), 0.8),
        CardRole::Inactive => (CARD_FILL, egui::Stroke::new(1.0, CARD_STROKE), 0.55),
    };

    ui.scope(|ui| {
        ui.multiply_opacity(opacity);
        egui::Frame::new()
            .fill(fill)
            .stroke(stroke)
            .corner_radius(egui::CornerRadius::same(10))
            .inner_margin(egui::Margin::same(14))
            .show(ui, |ui| {
                ui.set_width(CARD_WIDTH);
                ui.set_min_height(CARD_MIN_HEIGHT);

                ui.label(RichText::new(escape_markup(&record.title)).heading());
                ui.add_space(ITEM_SPACING);
                ui.label(escape_markup(&truncate_chars(
                    &record.description,
                    CARD_DESCRIPTION_LIMIT,
                )));

                if !record.tech_tags.is_empty() {
                    ui.add_space(ITEM_SPACING);
                    ui.horizontal_wrapped(|ui| {
                        for tag in record.card_tags() {
                            tag_pill(ui, tag);
                        }
                        let hidden = record.hidden_tag_count();
                        if hidden > 0 {
                            ui.weak(format!("+{hidden} more"));
                        }
                    });
                }

                ui.add_space(ITEM_SPACING);
                if ui.button("Read more").clicked() {
                    command = Some(NavCommand::Open(index));
                }
            });
    });

    command
}

pub fn tag_pill(ui: &mut egui::Ui, tag: &str) {
    egui::Frame::new()
        .fill(TAG_FILL)
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.small(escape_markup(tag));
        });
}
