// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! `ShellApp` binds the toolbar state machine to egui: it draws the
//! resolved controls using the last enablement map the controller emitted,
//! routes toolbar events to the file controller or to the workspace values,
//! and feeds every outcome back as a lifecycle signal.

use crate::controller::file::{ExitDecision, FileController};
use crate::controller::toolbar::{EnablementMap, ToolbarStateController};
use crate::models::control::{ControlCategory, ControlId};
use crate::models::workspace::WorkspaceValues;
use crate::ui::dialogs::{self, DialogText, UnsavedChoice};
use crate::ui::layout::{ids, ResolvedControl, Toolbar};
use crate::ui::toolbar::{self, IconTextures, ToolbarEvent};

/// Main application state.
pub struct ShellApp {
    toolbar: ToolbarStateController,
    controls: Vec<ResolvedControl>,
    icons: IconTextures,
    text: DialogText,
    files: FileController,
    values: WorkspaceValues,

    /// Last map emitted by the toolbar controller
    enablement: EnablementMap,

    /// Whether the play control shows its pause face
    playing: bool,

    /// Name being edited in the rename window
    rename_buffer: Option<String>,

    /// Set once the user has agreed to close the window
    allowed_to_close: bool,
}

impl ShellApp {
    /// Create the application from an already built toolbar.
    pub fn new(ctx: &egui::Context, text: DialogText, toolbar: Toolbar) -> Self {
        let icons = IconTextures::load(ctx, &toolbar.controls);

        Self {
            enablement: toolbar.state.enablement(),
            toolbar: toolbar.state,
            controls: toolbar.controls,
            icons,
            text,
            files: FileController::new(),
            values: WorkspaceValues::default(),
            playing: false,
            rename_buffer: None,
            allowed_to_close: false,
        }
    }

    fn mark_edited(&mut self) {
        match self.toolbar.on_edit() {
            Ok(map) => self.enablement = map,
            Err(e) => log::warn!("Ignoring edit: {}", e),
        }
    }

    /// Offer to save unsaved work. Returns whether the caller may proceed.
    fn resolve_unsaved(&mut self) -> bool {
        if self.files.exit_decision(self.toolbar.current_state()) == ExitDecision::Exit {
            return true;
        }
        match dialogs::confirm_unsaved(&self.text) {
            UnsavedChoice::Save => self.save(),
            UnsavedChoice::Discard => true,
            UnsavedChoice::Cancel => false,
        }
    }

    fn new_work(&mut self) {
        if !self.resolve_unsaved() {
            return;
        }
        match self.files.handle_new(&mut self.toolbar) {
            Ok((values, map)) => {
                self.values = values;
                self.enablement = map;
                self.playing = false;
                log::info!("{}", self.text.new_completed.message);
            }
            Err(e) => {
                log::error!("New work failed: {:#}", e);
                dialogs::show_error(&self.text.new_error, &e);
            }
        }
    }

    fn load_work(&mut self) {
        if !self.resolve_unsaved() {
            return;
        }
        let Some(path) = dialogs::pick_work_file(&self.text) else {
            return;
        };
        match self.files.handle_load(&path, &mut self.toolbar) {
            Ok((values, map)) => {
                self.values = values;
                self.enablement = map;
                self.playing = false;
                log::info!("{}", self.text.load_completed.message);
            }
            Err(e) => dialogs::show_error(&self.text.load_error, &e),
        }
    }

    /// Save the work, asking for a file the first time. Returns whether it
    /// was saved.
    fn save(&mut self) -> bool {
        let target = if self.files.needs_save_target() {
            match dialogs::pick_save_target(&self.text) {
                Some(path) => Some(path),
                None => return false,
            }
        } else {
            None
        };

        match self.files.handle_save(target.as_deref(), &self.values, &mut self.toolbar) {
            Ok(map) => {
                self.enablement = map;
                log::info!("{}", self.text.save_completed.message);
                true
            }
            Err(e) => {
                dialogs::show_error(&self.text.save_error, &e);
                false
            }
        }
    }

    fn export_work(&mut self) {
        let Some(path) = dialogs::pick_export_target() else {
            return;
        };
        if let Err(e) = self.files.handle_export(&path, &self.values) {
            log::error!("Export failed: {:#}", e);
            dialogs::show_error(&self.text.export_error, &e);
        }
    }

    fn request_exit(&mut self, ctx: &egui::Context) {
        if self.resolve_unsaved() {
            self.allowed_to_close = true;
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    fn activate(&mut self, ctx: &egui::Context, id: &ControlId) {
        log::debug!("Activated '{}'", id);
        match id.as_str() {
            ids::NEW => self.new_work(),
            ids::LOAD => self.load_work(),
            ids::SAVE => {
                self.save();
            }
            ids::EXPORT => self.export_work(),
            ids::EXIT => self.request_exit(ctx),
            ids::RENAME => self.rename_buffer = Some(self.values.name.clone()),
            ids::ADD_IMAGE => {
                if let Some(path) = dialogs::pick_image() {
                    self.values.add_image(path.to_string_lossy().to_string());
                    self.mark_edited();
                }
            }
            ids::REMOVE => {
                if self.values.remove_last_image().is_some() {
                    self.mark_edited();
                }
            }
            ids::REASSIGN_COLORS => {
                self.values.reassign_colors();
                self.mark_edited();
            }
            ids::PLAY => self.playing = !self.playing,
            ids::RESIZE => {
                self.values.reset_size();
                self.mark_edited();
            }
            other => log::warn!("No action bound to control '{}'", other),
        }
    }

    fn show_rename_window(&mut self, ctx: &egui::Context) {
        let Some(mut buffer) = self.rename_buffer.take() else {
            return;
        };

        let ok_label = &self.text.ok_label;
        let cancel_label = &self.text.cancel_label;
        let mut outcome = None;
        egui::Window::new(self.text.rename_title.as_str())
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.text_edit_singleline(&mut buffer);
                ui.horizontal(|ui| {
                    if ui.button(ok_label.as_str()).clicked() {
                        outcome = Some(true);
                    }
                    if ui.button(cancel_label.as_str()).clicked() {
                        outcome = Some(false);
                    }
                });
            });

        match outcome {
            Some(true) => {
                if buffer != self.values.name {
                    self.values.name = buffer;
                    self.mark_edited();
                }
            }
            Some(false) => {}
            None => self.rename_buffer = Some(buffer),
        }
    }

    fn show_workspace(&self, ui: &mut egui::Ui) {
        if !self.toolbar.current_state().has_document() {
            return;
        }

        egui::ScrollArea::both().show(ui, |ui| {
            ui.heading(self.values.name.as_str());
            if let Some(path) = self.files.current_file() {
                ui.label(egui::RichText::new(path.display().to_string()).italics().weak());
            }

            let [r, g, b, a] = self.values.background;
            let fill = egui::Color32::from_rgba_unmultiplied(r, g, b, a);
            let [r, g, b, a] = self.values.border;
            let stroke = egui::Stroke::new(
                self.values.border_thickness * self.values.zoom,
                egui::Color32::from_rgba_unmultiplied(r, g, b, a),
            );
            let (rect, _) = ui.allocate_exact_size(
                egui::vec2(320.0, 200.0) * self.values.zoom,
                egui::Sense::hover(),
            );
            ui.painter().rect(rect, 0.0, fill, stroke);

            for image in &self.values.images {
                ui.label(image.as_str());
            }
        });
    }
}

impl eframe::App for ShellApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().close_requested()) && !self.allowed_to_close {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            self.request_exit(ctx);
        }

        let mut events = Vec::new();
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                for category in [ControlCategory::File, ControlCategory::Edit] {
                    events.extend(toolbar::show(
                        ui,
                        category,
                        &self.controls,
                        &self.enablement,
                        &self.icons,
                        &mut self.values,
                        self.playing,
                    ));
                    ui.separator();
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| self.show_workspace(ui));

        self.show_rename_window(ctx);

        for event in events {
            match event {
                ToolbarEvent::Activated(id) => self.activate(ctx, &id),
                ToolbarEvent::ValueChanged(_) => self.mark_edited(),
            }
        }
    }
}
