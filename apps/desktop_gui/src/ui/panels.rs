//! Painting for each [`Screen`] variant. Panels never mutate app state; they
//! report user intent back to the caller.

use client_core::view::{
    ContactKind, ErrorScreen, PortfolioView, ProjectCard, ProjectLinkKind, ProjectsBody,
    StatKind,
};
use eframe::egui::{self, RichText, TextureHandle};

use crate::ui::theme;

pub fn show_loading(ctx: &egui::Context, label: &str) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.4);
            ui.spinner();
            ui.label(label);
        });
    });
}

/// Returns `true` when the retry control was clicked this frame.
pub fn show_error(ctx: &egui::Context, error: &ErrorScreen) -> bool {
    let mut retry = false;
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.4);
            ui.label(RichText::new(error.headline()).color(theme::ERROR_TEXT));
            ui.add_space(8.0);
            retry = ui.button(error.retry_label).clicked();
        });
    });
    retry
}

pub fn show_portfolio(ctx: &egui::Context, view: &PortfolioView, avatar: Option<&TextureHandle>) {
    egui::SidePanel::left("portfolio_sidebar")
        .resizable(false)
        .exact_width(theme::SIDEBAR_WIDTH)
        .frame(
            egui::Frame::new()
                .fill(theme::SIDEBAR_FILL)
                .inner_margin(egui::Margin::same(20)),
        )
        .show(ctx, |ui| show_sidebar(ui, view, avatar));

    egui::CentralPanel::default().show(ctx, |ui| show_projects(ui, view));
}

fn show_sidebar(ui: &mut egui::Ui, view: &PortfolioView, avatar: Option<&TextureHandle>) {
    let profile = &view.profile;

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            if let Some(texture) = avatar {
                ui.add(
                    egui::Image::new(texture)
                        .fit_to_exact_size(egui::vec2(theme::AVATAR_SIZE, theme::AVATAR_SIZE))
                        .corner_radius(theme::AVATAR_SIZE / 2.0),
                );
            }
            ui.heading(RichText::new(&profile.name).strong());
            if let Some(title) = &profile.title {
                ui.label(RichText::new(title).color(theme::ACCENT));
            }
            if let Some(bio) = &profile.bio {
                ui.label(RichText::new(bio).color(theme::MUTED_TEXT));
            }
        });

        ui.add_space(12.0);
        for contact in &view.contacts {
            let icon = match contact.kind {
                ContactKind::GitHub => "🐙",
                ContactKind::Email => "✉",
            };
            ui.hyperlink_to(format!("{icon} {}", contact.label), &contact.href);
        }

        ui.add_space(12.0);
        for stat in &view.stats {
            let icon = match stat.kind {
                StatKind::Repositories => "</>",
                StatKind::Stars => "★",
                StatKind::Followers => "👥",
            };
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(RichText::new(format!("{icon} {}", stat.label)).color(theme::MUTED_TEXT));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(stat.value.to_string()).strong());
                    });
                });
            });
        }

        if let Some(skills) = &view.skills {
            ui.add_space(12.0);
            ui.label(RichText::new("Skills").strong());
            ui.horizontal_wrapped(|ui| {
                for skill in skills {
                    tag(ui, skill);
                }
            });
        }

        ui.add_space(16.0);
        ui.separator();
        if let Some(location) = &view.location {
            ui.label(RichText::new(format!("📍 {location}")).color(theme::MUTED_TEXT));
        }
        ui.label(RichText::new("Built with Rust & egui").small().color(theme::MUTED_TEXT));
    });
}

fn show_projects(ui: &mut egui::Ui, view: &PortfolioView) {
    ui.horizontal(|ui| {
        ui.heading("📁 Projects");
        if let Some(count) = view.projects.count {
            ui.label(RichText::new(count.to_string()).color(theme::ACCENT).strong());
        }
    });
    ui.add_space(8.0);

    match &view.projects.body {
        ProjectsBody::Empty { title, description } => {
            ui.vertical_centered(|ui| {
                ui.add_space(48.0);
                ui.label(RichText::new("📁").size(40.0).color(theme::MUTED_TEXT));
                ui.label(RichText::new(*title).strong());
                ui.label(RichText::new(*description).color(theme::MUTED_TEXT));
            });
        }
        ProjectsBody::Grid(cards) => {
            let columns = ((ui.available_width() / theme::CARD_MIN_WIDTH).floor() as usize).max(1);
            egui::ScrollArea::vertical().show(ui, |ui| {
                for row in cards.chunks(columns) {
                    ui.columns(columns, |cols| {
                        for (col, card) in cols.iter_mut().zip(row) {
                            project_card(col, card);
                        }
                    });
                    ui.add_space(8.0);
                }
            });
        }
    }
}

fn project_card(ui: &mut egui::Ui, card: &ProjectCard) {
    egui::Frame::group(ui.style())
        .fill(theme::CARD_FILL)
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(&card.title).strong().size(16.0));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    for link in card.links.iter().rev() {
                        let label = match link.kind {
                            ProjectLinkKind::Repository => "🐙",
                            ProjectLinkKind::Homepage => "🔗",
                        };
                        ui.hyperlink_to(label, &link.href);
                    }
                });
            });

            ui.label(RichText::new(&card.description).color(theme::MUTED_TEXT));

            ui.horizontal(|ui| {
                if let Some(language) = &card.language {
                    ui.label(format!("</> {language}"));
                }
                ui.label(format!("★ {}", card.stars));
                ui.label(format!("⑂ {}", card.forks));
            });

            if let Some(topics) = &card.topics {
                ui.horizontal_wrapped(|ui| {
                    for topic in &topics.visible {
                        tag(ui, topic);
                    }
                    if let Some(more) = topics.overflow_label() {
                        ui.label(RichText::new(more).italics().color(theme::MUTED_TEXT));
                    }
                });
            }
        });
}

fn tag(ui: &mut egui::Ui, text: &str) {
    egui::Frame::new()
        .fill(theme::TAG_FILL)
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small());
        });
}
