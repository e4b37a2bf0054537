// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Native file and message dialogs.
//!
//! Every title and message comes from the properties catalog; they are
//! resolved once at startup into [`DialogText`] so a missing key stops the
//! application before the window opens.

use crate::io::catalog::{MissingKeyError, PropertyCatalog};
use crate::settings::property_type::PropertyKey;
use std::path::PathBuf;

/// A dialog title with its message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    /// The notice for startup failures that happen after the catalog loaded.
    pub fn properties_load_error(catalog: &PropertyCatalog) -> Result<Self, MissingKeyError> {
        Self::resolve(
            catalog,
            PropertyKey::PropertiesLoadErrorTitle,
            PropertyKey::PropertiesLoadErrorMessage,
        )
    }

    fn resolve(
        catalog: &PropertyCatalog,
        title: PropertyKey,
        message: PropertyKey,
    ) -> Result<Self, MissingKeyError> {
        Ok(Self {
            title: catalog.resolve(title)?.to_string(),
            message: catalog.resolve(message)?.to_string(),
        })
    }
}

/// Catalog strings used by the shell's dialogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogText {
    pub new_error: Notice,
    pub load_error: Notice,
    pub save_error: Notice,
    pub export_error: Notice,
    pub new_completed: Notice,
    pub load_completed: Notice,
    pub save_completed: Notice,
    pub unsaved_work: Notice,
    pub save_work_title: String,
    pub load_work_title: String,
    pub rename_title: String,
    pub ok_label: String,
    pub cancel_label: String,
    pub work_file_ext: String,
    pub work_file_desc: String,
}

impl DialogText {
    pub fn resolve(catalog: &PropertyCatalog) -> Result<Self, MissingKeyError> {
        use PropertyKey::*;
        Ok(Self {
            new_error: Notice::resolve(catalog, NewErrorTitle, NewErrorMessage)?,
            load_error: Notice::resolve(catalog, LoadErrorTitle, LoadErrorMessage)?,
            save_error: Notice::resolve(catalog, SaveErrorTitle, SaveErrorMessage)?,
            export_error: Notice::resolve(catalog, ExportErrorTitle, ExportErrorMessage)?,
            new_completed: Notice::resolve(catalog, NewCompletedTitle, NewCompletedMessage)?,
            load_completed: Notice::resolve(catalog, LoadCompletedTitle, LoadCompletedMessage)?,
            save_completed: Notice::resolve(catalog, SaveCompletedTitle, SaveCompletedMessage)?,
            unsaved_work: Notice::resolve(catalog, SaveUnsavedWorkTitle, SaveUnsavedWorkMessage)?,
            save_work_title: catalog.resolve(SaveWorkTitle)?.to_string(),
            load_work_title: catalog.resolve(LoadWorkTitle)?.to_string(),
            rename_title: catalog.resolve(ChangeTooltip)?.to_string(),
            ok_label: catalog.resolve(DialogOkLabel)?.to_string(),
            cancel_label: catalog.resolve(DialogCancelLabel)?.to_string(),
            work_file_ext: catalog.resolve(WorkFileExt)?.to_string(),
            work_file_desc: catalog.resolve(WorkFileExtDesc)?.to_string(),
        })
    }
}

/// Answer to the unsaved-work prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsavedChoice {
    Save,
    Discard,
    Cancel,
}

/// Show an error with the failure's details appended.
pub fn show_error(notice: &Notice, error: &anyhow::Error) {
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title(notice.title.as_str())
        .set_description(format!("{}\n\n{:#}", notice.message, error))
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

/// Error dialog for when the catalog itself could not be loaded, or lacks
/// the properties-load notice, so no catalog text is available.
pub fn show_startup_error(error: &anyhow::Error) {
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title("Startup Error")
        .set_description(format!("{:#}", error))
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

pub fn confirm_unsaved(text: &DialogText) -> UnsavedChoice {
    let result = rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Warning)
        .set_title(text.unsaved_work.title.as_str())
        .set_description(text.unsaved_work.message.as_str())
        .set_buttons(rfd::MessageButtons::YesNoCancel)
        .show();

    match result {
        rfd::MessageDialogResult::Yes => UnsavedChoice::Save,
        rfd::MessageDialogResult::No => UnsavedChoice::Discard,
        _ => UnsavedChoice::Cancel,
    }
}

fn work_file_dialog(text: &DialogText, title: &str) -> rfd::FileDialog {
    rfd::FileDialog::new()
        .set_title(title)
        .add_filter(text.work_file_desc.as_str(), &[text.work_file_ext.as_str()])
}

pub fn pick_work_file(text: &DialogText) -> Option<PathBuf> {
    work_file_dialog(text, &text.load_work_title).pick_file()
}

pub fn pick_save_target(text: &DialogText) -> Option<PathBuf> {
    work_file_dialog(text, &text.save_work_title)
        .set_file_name(format!("untitled.{}", text.work_file_ext))
        .save_file()
}

pub fn pick_export_target() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("YAML", &["yaml", "yml"])
        .set_file_name("export.yaml")
        .save_file()
}

pub fn pick_image() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("Images", &["jpg", "jpeg", "png", "bmp", "tiff", "tif"])
        .pick_file()
}
