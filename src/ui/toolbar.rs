// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Toolbar rendering.
//!
//! Draws resolved controls with egui, each one enabled or disabled exactly
//! as the last emitted enablement map says, and reports what the user did
//! as [`ToolbarEvent`]s. No state decisions are made here.

use super::layout::{ids, ControlFace, ResolvedControl};
use crate::controller::toolbar::EnablementMap;
use crate::io::icons;
use crate::models::control::{ControlCategory, ControlId, ControlKind};
use crate::models::workspace::{WorkspaceValues, BORDER_THICKNESS_RANGE, ZOOM_RANGE};
use crate::settings::startup::ICON_SIZE;
use std::collections::HashMap;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

/// Something the user did on the toolbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarEvent {
    /// A button was clicked.
    Activated(ControlId),
    /// A picker or slider changed its value.
    ValueChanged(ControlId),
}

/// Icon textures keyed by icon path.
#[derive(Default)]
pub struct IconTextures {
    textures: HashMap<PathBuf, egui::TextureHandle>,
}

impl IconTextures {
    /// Upload every icon the controls refer to. Icons that fail to decode are
    /// logged and their buttons fall back to tooltip text.
    pub fn load(ctx: &egui::Context, controls: &[ResolvedControl]) -> Self {
        let mut textures = HashMap::new();
        let faces = controls
            .iter()
            .flat_map(|c| std::iter::once(&c.face).chain(c.toggled.as_ref().map(|(f, _)| f)));

        for face in faces {
            let ControlFace::Icon(path) = face else { continue };
            if textures.contains_key(path) {
                continue;
            }
            match icons::load_icon(path) {
                Ok(icon) => {
                    let texture = ctx.load_texture(
                        path.display().to_string(),
                        icon.to_color_image(),
                        egui::TextureOptions::LINEAR,
                    );
                    textures.insert(path.clone(), texture);
                }
                Err(e) => log::warn!("Using text for toolbar icon: {:#}", e),
            }
        }

        log::debug!("Loaded {} toolbar icons", textures.len());
        Self { textures }
    }

    fn get(&self, path: &Path) -> Option<&egui::TextureHandle> {
        self.textures.get(path)
    }
}

fn color_slot<'a>(values: &'a mut WorkspaceValues, id: &str) -> Option<&'a mut [u8; 4]> {
    match id {
        ids::BACKGROUND_COLOR => Some(&mut values.background),
        ids::BORDER_COLOR => Some(&mut values.border),
        _ => None,
    }
}

fn slider_slot<'a>(
    values: &'a mut WorkspaceValues,
    id: &str,
) -> Option<(&'a mut f32, RangeInclusive<f32>)> {
    match id {
        ids::BORDER_THICKNESS => Some((&mut values.border_thickness, BORDER_THICKNESS_RANGE)),
        ids::ZOOM => Some((&mut values.zoom, ZOOM_RANGE)),
        _ => None,
    }
}

fn button(
    ui: &mut egui::Ui,
    enabled: bool,
    face: &ControlFace,
    tooltip: &str,
    icons: &IconTextures,
) -> egui::Response {
    let widget = match face {
        ControlFace::Icon(path) => match icons.get(path) {
            Some(texture) => egui::Button::image(
                egui::Image::new(egui::load::SizedTexture::from_handle(texture))
                    .fit_to_exact_size(egui::vec2(ICON_SIZE, ICON_SIZE)),
            ),
            None => egui::Button::new(tooltip),
        },
        ControlFace::Caption(text) => egui::Button::new(text.as_str()),
    };

    ui.add_enabled(enabled, widget)
        .on_hover_text(tooltip)
        .on_disabled_hover_text(tooltip)
}

/// Display one toolbar (file or edit) and collect the user's actions.
///
/// `playing` selects the toggled face of the play control.
pub fn show(
    ui: &mut egui::Ui,
    category: ControlCategory,
    controls: &[ResolvedControl],
    enablement: &EnablementMap,
    icons: &IconTextures,
    values: &mut WorkspaceValues,
    playing: bool,
) -> Vec<ToolbarEvent> {
    let mut events = Vec::new();
    ui.spacing_mut().item_spacing.x = 8.0;

    for control in controls.iter().filter(|c| c.category == category) {
        let enabled = enablement.get(&control.id).copied().unwrap_or(false);
        let (face, tooltip) = match (&control.toggled, playing && control.id.as_str() == ids::PLAY) {
            (Some((face, tooltip)), true) => (face, tooltip.as_str()),
            _ => (&control.face, control.tooltip.as_str()),
        };

        match control.kind {
            ControlKind::Button => {
                if button(ui, enabled, face, tooltip, icons).clicked() {
                    events.push(ToolbarEvent::Activated(control.id.clone()));
                }
            }
            ControlKind::ColorPicker => {
                let Some(slot) = color_slot(values, control.id.as_str()) else {
                    log::warn!("No value bound to color picker '{}'", control.id);
                    continue;
                };
                let changed = ui
                    .add_enabled_ui(enabled, |ui| {
                        ui.vertical(|ui| {
                            if let ControlFace::Caption(caption) = face {
                                ui.label(caption.as_str());
                            }
                            ui.color_edit_button_srgba_unmultiplied(slot)
                                .on_hover_text(tooltip)
                                .changed()
                        })
                        .inner
                    })
                    .inner;
                if changed {
                    events.push(ToolbarEvent::ValueChanged(control.id.clone()));
                }
            }
            ControlKind::Slider => {
                let Some((slot, range)) = slider_slot(values, control.id.as_str()) else {
                    log::warn!("No value bound to slider '{}'", control.id);
                    continue;
                };
                let caption = match face {
                    ControlFace::Caption(caption) => caption.as_str(),
                    ControlFace::Icon(_) => "",
                };
                let changed = ui
                    .add_enabled(enabled, egui::Slider::new(slot, range).text(caption))
                    .on_hover_text(tooltip)
                    .changed();
                if changed {
                    events.push(ToolbarEvent::ValueChanged(control.id.clone()));
                }
            }
        }
    }

    events
}
