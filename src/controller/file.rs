// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! File-related actions of the toolbar.
//!
//! The [`FileController`] performs the I/O behind new, load, save and
//! export, and reports the outcome to the [`ToolbarStateController`] as a
//! lifecycle signal. Failures are returned to the caller for display; they
//! never change the document state.

use super::toolbar::{EnablementMap, ToolbarStateController};
use crate::io::work_file;
use crate::models::document::DocumentState;
use crate::models::workspace::WorkspaceValues;
use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

/// What to do when the user asks to exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitDecision {
    Exit,
    /// Unsaved changes: ask whether to save first.
    PromptToSave,
}

#[derive(Debug, Default)]
pub struct FileController {
    current_file: Option<PathBuf>,
}

impl FileController {
    pub fn new() -> Self {
        Self::default()
    }

    /// File the open document was last loaded from or saved to.
    pub fn current_file(&self) -> Option<&Path> {
        self.current_file.as_deref()
    }

    /// Start a fresh document.
    pub fn handle_new(
        &mut self,
        toolbar: &mut ToolbarStateController,
    ) -> Result<(WorkspaceValues, EnablementMap)> {
        let map = toolbar.on_new()?;
        self.current_file = None;
        log::info!("Created new work");
        Ok((WorkspaceValues::default(), map))
    }

    /// Load a work file. On failure the toolbar is told and the error returned.
    pub fn handle_load(
        &mut self,
        path: &Path,
        toolbar: &mut ToolbarStateController,
    ) -> Result<(WorkspaceValues, EnablementMap)> {
        match work_file::load_json(path) {
            Ok(values) => {
                let map = toolbar.on_load_succeeded()?;
                self.current_file = Some(path.to_path_buf());
                log::info!("Loaded work from {}", path.display());
                Ok((values, map))
            }
            Err(e) => {
                log::warn!("Failed to load work from {}: {:#}", path.display(), e);
                toolbar.on_load_failed()?;
                Err(e)
            }
        }
    }

    /// Save to `path`, or to the current file when `path` is `None`.
    pub fn handle_save(
        &mut self,
        path: Option<&Path>,
        values: &WorkspaceValues,
        toolbar: &mut ToolbarStateController,
    ) -> Result<EnablementMap> {
        let Some(target) = path.map(Path::to_path_buf).or_else(|| self.current_file.clone()) else {
            bail!("no file chosen to save to");
        };

        match work_file::save_json(values, &target) {
            Ok(()) => {
                let map = toolbar.on_save_succeeded()?;
                log::info!("Saved work to {}", target.display());
                self.current_file = Some(target);
                Ok(map)
            }
            Err(e) => {
                log::warn!("Failed to save work to {}: {:#}", target.display(), e);
                toolbar.on_save_failed()?;
                Err(e)
            }
        }
    }

    /// Export to YAML. Export does not count as saving.
    pub fn handle_export(&self, path: &Path, values: &WorkspaceValues) -> Result<()> {
        work_file::export_yaml(values, path)?;
        log::info!("Exported work to {}", path.display());
        Ok(())
    }

    /// Whether a save target must be chosen before saving.
    pub fn needs_save_target(&self) -> bool {
        self.current_file.is_none()
    }

    pub fn exit_decision(&self, state: DocumentState) -> ExitDecision {
        if state.is_dirty() {
            ExitDecision::PromptToSave
        } else {
            ExitDecision::Exit
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::layout::{ids, standard_controls};
    use crate::models::control::ControlId;

    fn toolbar() -> ToolbarStateController {
        let mut toolbar = ToolbarStateController::new();
        for d in standard_controls() {
            toolbar.register_control(d).unwrap();
        }
        toolbar
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("work.json");
        let mut toolbar = toolbar();
        let mut files = FileController::new();

        let (mut values, _) = files.handle_new(&mut toolbar).unwrap();
        assert!(files.needs_save_target());
        values.name = "Europe".to_string();
        values.add_image("flag.png".to_string());
        toolbar.on_edit().unwrap();

        let map = files.handle_save(Some(&path), &values, &mut toolbar).unwrap();
        assert!(!map[&ControlId::from(ids::SAVE)]);
        assert_eq!(files.current_file(), Some(path.as_path()));

        let mut other = FileController::new();
        let mut fresh = self::toolbar();
        let (loaded, map) = other.handle_load(&path, &mut fresh).unwrap();
        assert_eq!(loaded, values);
        assert_eq!(fresh.current_state(), DocumentState::DocumentClean);
        assert!(map[&ControlId::from(ids::EXPORT)]);
    }

    #[test]
    fn test_failed_load_keeps_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let mut toolbar = toolbar();
        let before = toolbar.enablement();
        let mut files = FileController::new();

        assert!(files.handle_load(&path, &mut toolbar).is_err());
        assert_eq!(toolbar.current_state(), DocumentState::NoDocument);
        assert_eq!(toolbar.enablement(), before);
        assert_eq!(files.current_file(), None);
    }

    #[test]
    fn test_save_without_target_fails() {
        let mut toolbar = toolbar();
        let mut files = FileController::new();
        let (values, _) = files.handle_new(&mut toolbar).unwrap();
        toolbar.on_edit().unwrap();

        assert!(files.handle_save(None, &values, &mut toolbar).is_err());
        assert_eq!(toolbar.current_state(), DocumentState::DocumentDirty);
    }

    #[test]
    fn test_failed_save_keeps_dirty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("work.json");
        let mut toolbar = toolbar();
        let mut files = FileController::new();
        let (values, _) = files.handle_new(&mut toolbar).unwrap();
        toolbar.on_edit().unwrap();

        assert!(files.handle_save(Some(&path), &values, &mut toolbar).is_err());
        assert_eq!(toolbar.current_state(), DocumentState::DocumentDirty);
        assert_eq!(files.current_file(), None);
    }

    #[test]
    fn test_export_writes_yaml_without_saving() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("work.yaml");
        let mut toolbar = toolbar();
        let mut files = FileController::new();
        let (values, _) = files.handle_new(&mut toolbar).unwrap();
        toolbar.on_edit().unwrap();

        files.handle_export(&path, &values).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("name: Untitled"));
        assert_eq!(toolbar.current_state(), DocumentState::DocumentDirty);
    }

    #[test]
    fn test_exit_decision() {
        let files = FileController::new();
        assert_eq!(files.exit_decision(DocumentState::NoDocument), ExitDecision::Exit);
        assert_eq!(files.exit_decision(DocumentState::DocumentClean), ExitDecision::Exit);
        assert_eq!(
            files.exit_decision(DocumentState::DocumentDirty),
            ExitDecision::PromptToSave
        );
    }
}
