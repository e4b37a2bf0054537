// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Document lifecycle state and the signals that move it.

use std::fmt;

/// Whether a document is open, and whether it has unsaved changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentState {
    #[default]
    NoDocument,
    DocumentClean,
    DocumentDirty,
}

impl DocumentState {
    pub fn has_document(self) -> bool {
        !matches!(self, Self::NoDocument)
    }

    pub fn is_dirty(self) -> bool {
        matches!(self, Self::DocumentDirty)
    }
}

/// Lifecycle events reported by the file controller or the edit controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleSignal {
    New,
    LoadSucceeded,
    LoadFailed,
    /// Any mutating action on the open document.
    Edit,
    SaveSucceeded,
    SaveFailed,
}

impl fmt::Display for LifecycleSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::New => "new",
            Self::LoadSucceeded => "load succeeded",
            Self::LoadFailed => "load failed",
            Self::Edit => "edit",
            Self::SaveSucceeded => "save succeeded",
            Self::SaveFailed => "save failed",
        };
        f.write_str(name)
    }
}
