// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Property-driven toolbar construction.
//!
//! The standard file and edit toolbars are declared here as
//! [`ControlDescriptor`]s that name property keys, never literal strings.
//! [`resolve_controls`] turns them into concrete icon paths, captions and
//! tooltips against a loaded catalog, failing on the first key the catalog
//! does not define.

use crate::controller::toolbar::{ToolbarError, ToolbarStateController};
use crate::io::catalog::{MissingKeyError, PropertyCatalog};
use crate::models::control::{
    ControlCategory, ControlDescriptor, ControlId, ControlKind, EnablementRule,
};
use crate::settings::property_type::PropertyKey;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Control ids of the standard toolbars.
pub mod ids {
    pub const NEW: &str = "new";
    pub const LOAD: &str = "load";
    pub const SAVE: &str = "save";
    pub const EXPORT: &str = "export";
    pub const EXIT: &str = "exit";

    pub const RENAME: &str = "rename";
    pub const ADD_IMAGE: &str = "add_image";
    pub const REMOVE: &str = "remove";
    pub const BACKGROUND_COLOR: &str = "background_color";
    pub const BORDER_COLOR: &str = "border_color";
    pub const BORDER_THICKNESS: &str = "border_thickness";
    pub const ZOOM: &str = "zoom";
    pub const REASSIGN_COLORS: &str = "reassign_colors";
    pub const PLAY: &str = "play";
    pub const RESIZE: &str = "resize";
}

/// Every control of the file toolbar followed by the edit toolbar.
pub fn standard_controls() -> Vec<ControlDescriptor> {
    use ControlCategory::{Edit, File};
    use PropertyKey::*;

    vec![
        // File toolbar: new, load and exit start enabled
        ControlDescriptor::button(ids::NEW, File, NewIcon, NewTooltip, false),
        ControlDescriptor::button(ids::LOAD, File, LoadIcon, LoadTooltip, false),
        ControlDescriptor::button(ids::SAVE, File, SaveIcon, SaveTooltip, true)
            .with_rule(EnablementRule::WhenDirty),
        ControlDescriptor::button(ids::EXPORT, File, ExportIcon, ExportTooltip, true)
            .with_rule(EnablementRule::WhenDocument),
        ControlDescriptor::button(ids::EXIT, File, ExitIcon, ExitTooltip, false),
        // Edit toolbar
        ControlDescriptor::button(ids::RENAME, Edit, ChangeName, ChangeTooltip, true),
        ControlDescriptor::button(ids::ADD_IMAGE, Edit, AddIcon, AddTooltip, true),
        ControlDescriptor::button(ids::REMOVE, Edit, Remove, RemoveTooltip, true),
        ControlDescriptor::edit_widget(
            ids::BACKGROUND_COLOR,
            ControlKind::ColorPicker,
            ChangeColor,
            ChangeColorTooltip,
        ),
        ControlDescriptor::edit_widget(
            ids::BORDER_COLOR,
            ControlKind::ColorPicker,
            BorderColor,
            BorderColorTooltip,
        ),
        ControlDescriptor::edit_widget(
            ids::BORDER_THICKNESS,
            ControlKind::Slider,
            ThicknessTooltip,
            ThicknessTooltip,
        ),
        ControlDescriptor::edit_widget(ids::ZOOM, ControlKind::Slider, ZoomTooltip, ZoomTooltip),
        ControlDescriptor::button(ids::REASSIGN_COLORS, Edit, ReassignIcon, ReassignColorTooltip, true),
        ControlDescriptor::button(ids::PLAY, Edit, PlayIcon, PlayTooltip, true),
        ControlDescriptor::button(ids::RESIZE, Edit, ResizeIcon, ResizeTooltip, true),
    ]
}

/// Controls with a second face shown while toggled on: (id, face, tooltip).
const TOGGLED_FACES: &[(&str, PropertyKey, PropertyKey)] =
    &[(ids::PLAY, PropertyKey::PauseIcon, PropertyKey::PauseTooltip)];

/// How a control presents itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlFace {
    /// Path of an icon image.
    Icon(PathBuf),
    /// Caption text shown beside a picker or slider.
    Caption(String),
}

/// A control with every presentation string looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedControl {
    pub id: ControlId,
    pub category: ControlCategory,
    pub kind: ControlKind,
    pub face: ControlFace,
    pub tooltip: String,
    /// Face and tooltip while the control is toggled on.
    pub toggled: Option<(ControlFace, String)>,
}

fn resolve_face(
    kind: ControlKind,
    key: PropertyKey,
    catalog: &PropertyCatalog,
    images_dir: &Path,
) -> Result<ControlFace, MissingKeyError> {
    let value = catalog.resolve(key)?;
    Ok(match kind {
        ControlKind::Button => ControlFace::Icon(images_dir.join(value)),
        ControlKind::ColorPicker | ControlKind::Slider => ControlFace::Caption(value.to_string()),
    })
}

/// Look up the face and tooltip of every descriptor.
pub fn resolve_controls(
    descriptors: &[ControlDescriptor],
    catalog: &PropertyCatalog,
    images_dir: &Path,
) -> Result<Vec<ResolvedControl>, MissingKeyError> {
    descriptors
        .iter()
        .map(|d| -> Result<ResolvedControl, MissingKeyError> {
            let toggled = TOGGLED_FACES
                .iter()
                .find(|(id, _, _)| *id == d.id.as_str())
                .map(|(_, face, tooltip)| -> Result<_, MissingKeyError> {
                    Ok((
                        resolve_face(d.kind, *face, catalog, images_dir)?,
                        catalog.resolve(*tooltip)?.to_string(),
                    ))
                })
                .transpose()?;

            Ok(ResolvedControl {
                id: d.id.clone(),
                category: d.category,
                kind: d.kind,
                face: resolve_face(d.kind, d.face, catalog, images_dir)?,
                tooltip: catalog.resolve(d.tooltip)?.to_string(),
                toggled,
            })
        })
        .collect()
}

#[derive(Debug, Error)]
pub enum ToolbarBuildError {
    #[error(transparent)]
    MissingKey(#[from] MissingKeyError),

    #[error(transparent)]
    Registration(#[from] ToolbarError),
}

/// The state controller together with the controls it governs.
pub struct Toolbar {
    pub state: ToolbarStateController,
    pub controls: Vec<ResolvedControl>,
}

/// Resolve and register the standard toolbars.
pub fn build_toolbar(
    catalog: &PropertyCatalog,
    images_dir: &Path,
) -> Result<Toolbar, ToolbarBuildError> {
    let descriptors = standard_controls();
    let controls = resolve_controls(&descriptors, catalog, images_dir)?;

    let mut state = ToolbarStateController::new();
    for descriptor in descriptors {
        state.register_control(descriptor)?;
    }

    log::info!("Built toolbar with {} controls", controls.len());
    Ok(Toolbar { state, controls })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_catalog() -> PropertyCatalog {
        PropertyCatalog::from_entries(
            PropertyKey::ALL
                .iter()
                .map(|k| (*k, format!("{}.value", k.as_str().to_lowercase()))),
        )
    }

    #[test]
    fn test_initial_flags_match_rules() {
        use crate::models::document::DocumentState;
        for d in standard_controls() {
            assert_eq!(
                !d.initially_disabled,
                d.rule.is_enabled(DocumentState::NoDocument),
                "{}",
                d.id
            );
        }
    }

    #[test]
    fn test_build_resolves_every_control() {
        let toolbar = build_toolbar(&complete_catalog(), Path::new("images")).unwrap();
        assert_eq!(toolbar.controls.len(), toolbar.state.len());

        let new = &toolbar.controls[0];
        assert_eq!(new.id.as_str(), ids::NEW);
        assert_eq!(new.face, ControlFace::Icon(PathBuf::from("images/new_icon.value")));
        assert_eq!(new.tooltip, "new_tooltip.value");

        let zoom = toolbar
            .controls
            .iter()
            .find(|c| c.id.as_str() == ids::ZOOM)
            .unwrap();
        assert_eq!(zoom.face, ControlFace::Caption("zoom_tooltip.value".to_string()));
    }

    #[test]
    fn test_play_has_pause_face() {
        let toolbar = build_toolbar(&complete_catalog(), Path::new("img")).unwrap();
        let play = toolbar
            .controls
            .iter()
            .find(|c| c.id.as_str() == ids::PLAY)
            .unwrap();
        assert_eq!(
            play.toggled,
            Some((
                ControlFace::Icon(PathBuf::from("img/pause_icon.value")),
                "pause_tooltip.value".to_string()
            ))
        );
    }

    #[test]
    fn test_missing_key_blocks_build() {
        let catalog = PropertyCatalog::from_entries(
            PropertyKey::ALL
                .iter()
                .filter(|k| **k != PropertyKey::ReassignColorTooltip)
                .map(|k| (*k, "x")),
        );
        let err = build_toolbar(&catalog, Path::new("images")).err().unwrap();
        assert!(matches!(
            err,
            ToolbarBuildError::MissingKey(MissingKeyError(PropertyKey::ReassignColorTooltip))
        ));
    }

    #[test]
    fn test_shipped_properties_build_the_toolbar() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/app_properties.yaml");
        let catalog = PropertyCatalog::load(&path).unwrap();

        let toolbar = build_toolbar(&catalog, Path::new("images")).unwrap();
        assert_eq!(toolbar.controls.len(), standard_controls().len());
        assert!(crate::ui::dialogs::DialogText::resolve(&catalog).is_ok());
        assert!(crate::ui::dialogs::Notice::properties_load_error(&catalog).is_ok());
        assert!(catalog.missing_keys(PropertyKey::ALL).is_empty());
        assert!(catalog.resolve(PropertyKey::AppTitle).is_ok());
        assert!(catalog.resolve(PropertyKey::AppLogo).is_ok());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for d in standard_controls() {
            assert!(seen.insert(d.id.clone()), "duplicate id {}", d.id);
        }
    }
}
