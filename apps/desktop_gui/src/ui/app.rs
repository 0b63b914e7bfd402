use std::time::Duration;

use client_core::{render, FetchError, LoadState, Screen};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui::{self, TextureHandle};

use crate::backend_bridge::{avatar::AvatarImage, commands::BackendCommand};
use crate::controller::{events::UiEvent, orchestration::dispatch_backend_command};
use crate::ui::{panels, theme};

pub struct PortfolioApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    state: LoadState,
    load_in_flight: bool,
    /// Avatar URL of the current document, once its download has been queued.
    avatar_requested: Option<String>,
    pending_avatar: Option<AvatarImage>,
    avatar_texture: Option<TextureHandle>,
    theme_applied: bool,
}

impl PortfolioApp {
    /// Builds the app and queues the initial load.
    pub fn bootstrap(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        let mut app = Self::new(cmd_tx, ui_rx);
        app.load_portfolio();
        app
    }

    fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            state: LoadState::default(),
            load_in_flight: false,
            avatar_requested: None,
            pending_avatar: None,
            avatar_texture: None,
            theme_applied: false,
        }
    }

    /// Shared by the initial load and retry. A load already in flight wins;
    /// later requests are dropped rather than queued.
    fn load_portfolio(&mut self) {
        if self.load_in_flight {
            tracing::debug!("portfolio load already in flight; ignoring request");
            return;
        }

        self.state.begin_load();
        self.avatar_requested = None;
        self.pending_avatar = None;
        self.avatar_texture = None;

        match dispatch_backend_command(&self.cmd_tx, BackendCommand::LoadPortfolio) {
            Ok(()) => self.load_in_flight = true,
            Err(message) => self
                .state
                .finish(Err(FetchError::Transport(message.to_string()))),
        }
    }

    fn retry(&mut self) {
        if self.state.can_retry() {
            self.load_portfolio();
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.apply_event(event);
        }
    }

    fn apply_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::PortfolioLoaded(outcome) => {
                self.load_in_flight = false;
                self.state.finish(outcome);
                self.request_avatar();
            }
            UiEvent::AvatarLoaded { url, image } => {
                if self.avatar_requested.as_deref() == Some(url.as_str()) {
                    self.pending_avatar = Some(image);
                } else {
                    tracing::debug!(%url, "dropping avatar for a replaced document");
                }
            }
            UiEvent::AvatarFailed { url, reason } => {
                tracing::warn!(%url, %reason, "avatar unavailable");
            }
            UiEvent::BackendFailed(message) => {
                self.load_in_flight = false;
                self.state.finish(Err(FetchError::Transport(message)));
            }
        }
    }

    fn request_avatar(&mut self) {
        let Some(url) = self
            .state
            .document()
            .and_then(|document| document.avatar_url())
            .map(str::to_owned)
        else {
            return;
        };

        let cmd = BackendCommand::FetchAvatar { url: url.clone() };
        if dispatch_backend_command(&self.cmd_tx, cmd).is_ok() {
            self.avatar_requested = Some(url);
        }
    }

    fn upload_pending_avatar(&mut self, ctx: &egui::Context) {
        let Some(image) = self.pending_avatar.take() else {
            return;
        };
        let color_image =
            egui::ColorImage::from_rgba_unmultiplied([image.width, image.height], &image.rgba);
        self.avatar_texture =
            Some(ctx.load_texture("portfolio-avatar", color_image, Default::default()));
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        theme::apply_if_needed(ctx, &mut self.theme_applied);
        self.upload_pending_avatar(ctx);

        match render(&self.state) {
            Screen::Loading { label } => panels::show_loading(ctx, label),
            Screen::Error(error) => {
                if panels::show_error(ctx, &error) {
                    self.retry();
                }
            }
            Screen::Ready(view) => {
                panels::show_portfolio(ctx, &view, self.avatar_texture.as_ref())
            }
        }

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;
