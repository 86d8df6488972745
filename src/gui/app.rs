//! Showcase application
//!
//! `DeckApp` owns the catalog and every piece of interaction state, threaded
//! explicitly instead of living in globals. Each frame collects commands
//! from all input channels (keyboard, buttons, dots, swipe, auto-play),
//! dispatches them after painting, and schedules a repaint for the nearest
//! pending timer.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use eframe::{egui, CreationContext, NativeOptions};
use egui::RichText;
use tracing::{error, info, warn};

use crate::autoplay::AutoPlay;
use crate::carousel::CarouselState;
use crate::catalog::Catalog;
use crate::commands::{dispatch, NavCommand};
use crate::gestures::SwipeTracker;
use crate::gui::components::{card, detail_view, navbar};
use crate::gui::constants::*;
use crate::overlay::OverlayState;
use crate::sections::{navbar_scrolled, SectionId, SectionTracker};
use crate::settings::Settings;
use crate::typewriter::{Phase, Typewriter};

pub struct DeckApp {
    catalog: Catalog,
    data_path: PathBuf,
    settings: Settings,

    carousel: CarouselState,
    overlay: OverlayState,
    swipe: SwipeTracker,
    autoplay: AutoPlay,
    typewriter: Typewriter,
    sections: SectionTracker,

    banner: Option<String>,
    typewriter_deadline: Option<Instant>,
    pending_scroll: Option<SectionId>,
    // Measured last frame; the navbar paints before the page body
    page_offset: f32,
    current_section: Option<SectionId>,
}

impl DeckApp {
    fn new(
        _cc: &CreationContext<'_>,
        catalog: Catalog,
        settings: Settings,
        data_path: PathBuf,
    ) -> Self {
        info!(projects = catalog.len(), "initializing showcase");

        let carousel = CarouselState::new(catalog.len());
        let mut autoplay = AutoPlay::new(settings.autoplay_interval());
        if settings.autoplay {
            autoplay.start(Instant::now());
        }
        let typewriter =
            Typewriter::new(HERO_PHRASES.iter().map(|phrase| phrase.to_string()).collect());
        let banner = catalog
            .is_fallback()
            .then(|| BANNER_LOAD_FAILURE.to_string());

        Self {
            catalog,
            data_path,
            settings,
            carousel,
            overlay: OverlayState::new(),
            swipe: SwipeTracker::new(),
            autoplay,
            typewriter,
            sections: SectionTracker::new(),
            banner,
            typewriter_deadline: None,
            pending_scroll: None,
            page_offset: 0.0,
            current_section: None,
        }
    }

    fn reload(&mut self) {
        info!(path = %self.data_path.display(), "reloading catalog");
        self.catalog = Catalog::load(&self.data_path);
        self.carousel = CarouselState::new(self.catalog.len());
        self.overlay = OverlayState::new();
        self.banner = self
            .catalog
            .is_fallback()
            .then(|| BANNER_LOAD_FAILURE.to_string());
    }

    fn collect_input(&mut self, ctx: &egui::Context, now: Instant, commands: &mut Vec<NavCommand>) {
        self.autoplay.set_window_visible(ctx.input(|i| i.focused));
        if self.autoplay.poll(now) {
            commands.push(NavCommand::Next);
        }

        // Escape closes the overlay regardless of focus; arrows are
        // suppressed while a text widget wants the keyboard
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            commands.push(NavCommand::Close);
        }
        if !ctx.wants_keyboard_input() {
            ctx.input(|i| {
                if i.key_pressed(egui::Key::ArrowRight) {
                    commands.push(NavCommand::Next);
                }
                if i.key_pressed(egui::Key::ArrowLeft) {
                    commands.push(NavCommand::Previous);
                }
            });
        }
    }

    fn drive_typewriter(&mut self, now: Instant) {
        if !self.settings.typewriter || self.typewriter.is_inert() {
            self.typewriter_deadline = None;
            return;
        }
        match self.typewriter_deadline {
            Some(deadline) if now < deadline => {}
            _ => {
                let delay = self.typewriter.tick();
                self.typewriter_deadline = Some(now + delay);
            }
        }
    }

    fn banner_ui(&mut self, ctx: &egui::Context) {
        let Some(message) = self.banner.clone() else {
            return;
        };
        let mut reload_requested = false;
        egui::TopBottomPanel::top("error_banner")
            .frame(
                egui::Frame::new()
                    .fill(BANNER_FILL)
                    .inner_margin(egui::Margin::same(8)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.colored_label(BANNER_TEXT, message);
                    if ui.button("Reload").clicked() {
                        reload_requested = true;
                    }
                });
            });
        if reload_requested {
            self.reload();
        }
    }

    fn navbar_ui(&mut self, ctx: &egui::Context) {
        let scrolled = navbar_scrolled(self.page_offset);
        egui::TopBottomPanel::top("navbar").show(ctx, |ui| {
            if let Some(target) = navbar::navbar(ui, self.current_section, scrolled) {
                self.pending_scroll = Some(target);
            }
        });
    }

    fn page_ui(&mut self, ctx: &egui::Context, commands: &mut Vec<NavCommand>) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let output = egui::ScrollArea::vertical()
                .id_salt("page")
                .auto_shrink([false; 2])
                .enable_scrolling(!self.overlay.scroll_locked())
                .show(ui, |ui| {
                    self.hero_ui(ui);
                    self.section_frame(ui, SectionId::Projects, |app, ui| {
                        app.carousel_ui(ui, commands);
                    });
                    self.about_ui(ui);
                    self.contact_ui(ui);
                });

            self.page_offset = output.state.offset.y;
            let viewport = output.inner_rect;
            self.sections.update(viewport.top(), viewport.bottom());
            self.current_section = self.sections.current(viewport.top(), viewport.bottom());
        });
    }

    /// Common section wrapper: reveal fade, extent bookkeeping and
    /// navbar-driven scrolling
    fn section_frame(
        &mut self,
        ui: &mut egui::Ui,
        id: SectionId,
        add_contents: impl FnOnce(&mut Self, &mut egui::Ui),
    ) {
        let revealed = self.sections.is_revealed(id);
        let inner = ui.scope(|ui| {
            let alpha = ui.ctx().animate_bool_with_time(
                egui::Id::new(("section_reveal", id.label())),
                revealed,
                REVEAL_SECONDS,
            );
            ui.multiply_opacity(alpha.max(0.05));
            add_contents(self, ui);
            ui.add_space(SECTION_BOTTOM_PADDING);
        });

        let rect = inner.response.rect;
        self.sections.record_extent(id, rect.top(), rect.bottom());
        if self.pending_scroll == Some(id) {
            ui.scroll_to_rect(rect, Some(egui::Align::Min));
            self.pending_scroll = None;
        }
    }

    fn hero_ui(&mut self, ui: &mut egui::Ui) {
        self.section_frame(ui, SectionId::Home, |app, ui| {
            ui.add_space(HERO_TOP_PADDING);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(HERO_NAME).size(34.0).strong());
                ui.add_space(ITEM_SPACING);
                let headline = if app.settings.typewriter {
                    app.typewriter.visible()
                } else {
                    HERO_PHRASES.first().copied().unwrap_or_default()
                };
                // The caret rests while the machine pauses between phrases
                let caret = match app.typewriter.phase() {
                    Phase::PausedAtFull | Phase::PausedAtEmpty => " ",
                    Phase::TypingForward | Phase::DeletingBackward => "\u{258c}",
                };
                ui.label(
                    RichText::new(format!("{headline}{caret}"))
                        .size(22.0)
                        .color(ACCENT),
                );
                ui.add_space(ITEM_SPACING);
                ui.weak(HERO_TAGLINE);
            });
            ui.add_space(HERO_BOTTOM_PADDING - SECTION_BOTTOM_PADDING);
        });
    }

    fn carousel_ui(&mut self, ui: &mut egui::Ui, commands: &mut Vec<NavCommand>) {
        ui.heading("Projects");
        ui.add_space(SECTION_SPACING);

        if self.carousel.is_inert() {
            // Degraded feature: the section renders, navigation stays inert
            ui.weak("No projects to show yet.");
            return;
        }

        let track_width = (ui.available_width() - 2.0 * NAV_BUTTON_GUTTER).max(CARD_WIDTH);
        let full_track = self.carousel.total() as f32 * (CARD_WIDTH + CARD_SPACING);
        let track_offset = self.carousel.offset_fraction() * full_track;

        ui.horizontal(|ui| {
            if ui
                .add(egui::Button::new(RichText::new("\u{25c0}").size(18.0)).frame(false))
                .clicked()
            {
                commands.push(NavCommand::Previous);
            }

            let output = egui::ScrollArea::horizontal()
                .id_salt("carousel_track")
                .max_width(track_width)
                .scroll_offset(egui::vec2(track_offset, 0.0))
                .enable_scrolling(false)
                .show(ui, |ui| {
                    ui.spacing_mut().item_spacing.x = CARD_SPACING;
                    ui.horizontal(|ui| {
                        for (index, record) in self.catalog.iter().enumerate() {
                            let role = self.carousel.card_role(index);
                            if let Some(command) = card::project_card(ui, index, record, role) {
                                commands.push(command);
                            }
                        }
                    });
                });

            // Swipe: a drag-only overlay on the track, so card buttons keep
            // their clicks
            let track_rect = output.inner_rect;
            let swipe_response =
                ui.interact(track_rect, ui.id().with("swipe"), egui::Sense::drag());
            if swipe_response.drag_started()
                && let Some(pos) = swipe_response.interact_pointer_pos()
            {
                self.swipe.begin(pos.x, pos.y);
            }
            if swipe_response.drag_stopped() {
                let release = swipe_response
                    .interact_pointer_pos()
                    .or_else(|| ui.ctx().input(|i| i.pointer.latest_pos()));
                match release {
                    Some(pos) => {
                        if let Some(command) = self.swipe.finish(pos.x, pos.y) {
                            commands.push(command);
                        }
                    }
                    None => self.swipe.cancel(),
                }
            }

            self.autoplay.set_hovered(ui.rect_contains_pointer(track_rect));

            if ui
                .add(egui::Button::new(RichText::new("\u{25b6}").size(18.0)).frame(false))
                .clicked()
            {
                commands.push(NavCommand::Next);
            }
        });

        ui.add_space(ITEM_SPACING);
        ui.horizontal(|ui| {
            for index in 0..self.carousel.total() {
                let active = index == self.carousel.current();
                let dot = RichText::new(if active { "\u{25cf}" } else { "\u{25cb}" })
                    .color(if active { ACCENT } else { DOT_INACTIVE });
                if ui.add(egui::Button::new(dot).frame(false)).clicked() {
                    commands.push(NavCommand::GoTo(index));
                }
            }
        });

        ui.add_space(ITEM_SPACING);
        let mut autoplay_enabled = self.settings.autoplay;
        if ui.checkbox(&mut autoplay_enabled, "Auto-play").changed() {
            self.settings.autoplay = autoplay_enabled;
            if autoplay_enabled {
                self.autoplay.start(Instant::now());
            } else {
                self.autoplay.stop();
            }
            if let Err(err) = self.settings.save() {
                error!(error = ?err, "failed to persist settings");
            }
        }
    }

    fn about_ui(&mut self, ui: &mut egui::Ui) {
        self.section_frame(ui, SectionId::About, |_app, ui| {
            ui.heading("About");
            ui.add_space(SECTION_SPACING);
            ui.label(ABOUT_BODY);
        });
    }

    fn contact_ui(&mut self, ui: &mut egui::Ui) {
        self.section_frame(ui, SectionId::Contact, |_app, ui| {
            ui.heading("Contact");
            ui.add_space(SECTION_SPACING);
            ui.horizontal(|ui| {
                ui.label("Say hi:");
                ui.hyperlink_to(CONTACT_EMAIL, format!("mailto:{CONTACT_EMAIL}"));
                ui.label("or find me on");
                ui.hyperlink_to("GitHub", CONTACT_GITHUB);
            });
        });
    }

    fn overlay_ui(&mut self, ctx: &egui::Context, open_ix: usize, commands: &mut Vec<NavCommand>) {
        let Some(record) = self.catalog.get(open_ix) else {
            warn!(index = open_ix, "overlay points past the catalog, closing");
            commands.push(NavCommand::Close);
            return;
        };

        let screen = ctx.screen_rect();
        egui::Area::new(egui::Id::new("overlay_scrim"))
            .order(egui::Order::Middle)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                ui.painter()
                    .rect_filled(screen, egui::CornerRadius::ZERO, SCRIM);
                // Clicks landing on the scrim itself close; the detail panel
                // sits in a higher layer and keeps its own clicks
                if ui.allocate_rect(screen, egui::Sense::click()).clicked() {
                    commands.push(NavCommand::Close);
                }
            });

        egui::Window::new("project_detail")
            .title_bar(false)
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .fixed_size(egui::vec2(DETAIL_WIDTH, DETAIL_HEIGHT))
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("detail_body")
                    .show(ui, |ui| {
                        if let Some(command) = detail_view::detail_view(ui, record) {
                            commands.push(command);
                        }
                    });
            });
    }
}

impl eframe::App for DeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let mut commands: Vec<NavCommand> = Vec::new();

        self.collect_input(ctx, now, &mut commands);
        self.drive_typewriter(now);

        self.banner_ui(ctx);
        self.navbar_ui(ctx);
        self.page_ui(ctx, &mut commands);
        if let Some(open_ix) = self.overlay.open_index() {
            self.overlay_ui(ctx, open_ix, &mut commands);
        }

        // Applied after painting; each discrete input is one transition and
        // the new state shows on the next frame
        for command in commands {
            dispatch(command, &mut self.carousel, &mut self.overlay);
        }

        let mut next_wakeup: Option<Duration> = self.autoplay.next_deadline(now);
        if let Some(deadline) = self.typewriter_deadline {
            let remaining = deadline.saturating_duration_since(now);
            next_wakeup = Some(next_wakeup.map_or(remaining, |d| d.min(remaining)));
        }
        if let Some(delay) = next_wakeup {
            ctx.request_repaint_after(delay);
        }
    }
}

pub fn run(catalog: Catalog, settings: Settings, data_path: PathBuf) -> Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_min_inner_size([WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT])
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        APP_ID,
        options,
        Box::new(move |cc| Ok(Box::new(DeckApp::new(cc, catalog, settings, data_path)))),
    )
    .map_err(|err| anyhow!("Failed to launch showcase window: {err}"))
}
