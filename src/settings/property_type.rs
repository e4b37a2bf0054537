// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Symbolic keys for every externally-loaded string.
//!
//! Code never spells out icon file names, tooltips or messages. It names a
//! [`PropertyKey`] and resolves it against the loaded
//! [`PropertyCatalog`](crate::io::catalog::PropertyCatalog).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declares the key enum together with its properties-file names so the
/// variants, the `ALL` list and the serde names stay in lockstep.
macro_rules! property_keys {
    ($( $(#[$meta:meta])* $variant:ident => $name:literal, )*) => {
        /// A key into the application's properties file.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum PropertyKey {
            $(
                $(#[$meta])*
                #[serde(rename = $name)]
                $variant,
            )*
        }

        impl PropertyKey {
            /// Every key, in declaration order.
            pub const ALL: &'static [PropertyKey] = &[$(PropertyKey::$variant,)*];

            /// The name used for this key in the properties file.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(PropertyKey::$variant => $name,)*
                }
            }
        }
    };
}

property_keys! {
    // Application
    AppTitle => "APP_TITLE",
    AppLogo => "APP_LOGO",
    AppCss => "APP_CSS",
    AppPathCss => "APP_PATH_CSS",

    // Toolbar icons and edit-control captions
    NewIcon => "NEW_ICON",
    LoadIcon => "LOAD_ICON",
    SaveIcon => "SAVE_ICON",
    SaveAsIcon => "SAVE_AS_ICON",
    ExportIcon => "EXPORT_ICON",
    ExitIcon => "EXIT_ICON",
    ChangeName => "CHANGE_NAME",
    AddIcon => "ADD_ICON",
    Remove => "REMOVE",
    ChangeColor => "CHANGE_COLOR",
    BorderColor => "BORDER_COLOR",
    ReassignIcon => "REASSIGN_ICON",
    PlayIcon => "PLAY_ICON",
    PauseIcon => "PAUSE_ICON",
    ResizeIcon => "RESIZE_ICON",
    LeaderPath => "LEADER_PATH",
    FlagPath => "FLAG_PATH",
    ImageTest => "IMAGE_TEST",

    // Tooltips
    NewTooltip => "NEW_TOOLTIP",
    LoadTooltip => "LOAD_TOOLTIP",
    SaveTooltip => "SAVE_TOOLTIP",
    SaveAsTooltip => "SAVE_AS_TOOLTIP",
    ExportTooltip => "EXPORT_TOOLTIP",
    ExitTooltip => "EXIT_TOOLTIP",
    ChangeTooltip => "CHANGE_TOOLTIP",
    AddTooltip => "ADD_TOOLTIP",
    RemoveTooltip => "REMOVE_TOOLTIP",
    ChangeColorTooltip => "CHANGE_COLOR_TOOLTIP",
    BorderColorTooltip => "BORDER_COLOR_TOOLTIP",
    ReassignColorTooltip => "REASSIGN_COLOR_TOOLTIP",
    /// Also the caption of the border thickness slider.
    ThicknessTooltip => "THICKNESS_TOOLTIP",
    /// Also the caption of the zoom slider.
    ZoomTooltip => "ZOOM_TOOLTIP",
    PlayTooltip => "PLAY_TOOLTIP",
    PauseTooltip => "PAUSE_TOOLTIP",
    ResizeTooltip => "RESIZE_TOOLTIP",

    // Error messages and titles
    NewErrorMessage => "NEW_ERROR_MESSAGE",
    LoadErrorMessage => "LOAD_ERROR_MESSAGE",
    SaveErrorMessage => "SAVE_ERROR_MESSAGE",
    ExportErrorMessage => "EXPORT_ERROR_MESSAGE",
    PropertiesLoadErrorMessage => "PROPERTIES_LOAD_ERROR_MESSAGE",
    NewErrorTitle => "NEW_ERROR_TITLE",
    LoadErrorTitle => "LOAD_ERROR_TITLE",
    SaveErrorTitle => "SAVE_ERROR_TITLE",
    ExportErrorTitle => "EXPORT_ERROR_TITLE",
    PropertiesLoadErrorTitle => "PROPERTIES_LOAD_ERROR_TITLE",

    // Verification messages and titles
    NewCompletedMessage => "NEW_COMPLETED_MESSAGE",
    NewCompletedTitle => "NEW_COMPLETED_TITLE",
    LoadCompletedMessage => "LOAD_COMPLETED_MESSAGE",
    LoadCompletedTitle => "LOAD_COMPLETED_TITLE",
    SaveCompletedMessage => "SAVE_COMPLETED_MESSAGE",
    SaveCompletedTitle => "SAVE_COMPLETED_TITLE",
    SaveUnsavedWorkTitle => "SAVE_UNSAVED_WORK_TITLE",
    SaveUnsavedWorkMessage => "SAVE_UNSAVED_WORK_MESSAGE",
    SaveWorkTitle => "SAVE_WORK_TITLE",
    LoadWorkTitle => "LOAD_WORK_TITLE",

    // Dialog buttons
    DialogOkLabel => "DIALOG_OK_LABEL",
    DialogCancelLabel => "DIALOG_CANCEL_LABEL",

    // Work files
    WorkFileExt => "WORK_FILE_EXT",
    WorkFileExtDesc => "WORK_FILE_EXT_DESC",
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<&str> = PropertyKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(names.len(), PropertyKey::ALL.len());
    }

    #[test]
    fn test_serde_name_matches_display() {
        for key in PropertyKey::ALL {
            let json = serde_json::to_string(key).unwrap();
            assert_eq!(json, format!("\"{}\"", key));
        }
    }

    #[test]
    fn test_keys_are_ordered_by_declaration() {
        assert!(PropertyKey::AppTitle < PropertyKey::NewIcon);
        assert!(PropertyKey::NewIcon < PropertyKey::WorkFileExtDesc);
    }
}
