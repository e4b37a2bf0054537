// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Toolbar control descriptors.
//!
//! A descriptor says what a control is and which property keys present it.
//! It carries no widget and no live state; the enabled flag lives in the
//! [`ToolbarStateController`](crate::controller::toolbar::ToolbarStateController).

use super::document::DocumentState;
use crate::settings::property_type::PropertyKey;
use std::fmt;

/// Stable identity of a toolbar control.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ControlId(String);

impl ControlId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ControlId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which toolbar a control belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCategory {
    File,
    Edit,
}

/// The widget a binding layer should create for the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Button,
    ColorPicker,
    Slider,
}

/// When a control may be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnablementRule {
    /// Usable in every state (new, load, exit).
    Always,
    /// Needs an open document (export and all edit controls).
    WhenDocument,
    /// Needs unsaved changes (save).
    WhenDirty,
}

impl EnablementRule {
    /// Whether a control under this rule is enabled in `state`.
    pub fn is_enabled(self, state: DocumentState) -> bool {
        match self {
            Self::Always => true,
            Self::WhenDocument => state.has_document(),
            Self::WhenDirty => state.is_dirty(),
        }
    }
}

impl From<ControlCategory> for EnablementRule {
    fn from(category: ControlCategory) -> Self {
        match category {
            ControlCategory::File => Self::Always,
            ControlCategory::Edit => Self::WhenDocument,
        }
    }
}

/// Everything needed to build and govern one toolbar control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlDescriptor {
    pub id: ControlId,
    pub category: ControlCategory,
    pub kind: ControlKind,
    pub initially_disabled: bool,
    /// Icon file for buttons, caption text for pickers and sliders.
    pub face: PropertyKey,
    pub tooltip: PropertyKey,
    pub rule: EnablementRule,
}

impl ControlDescriptor {
    /// A button whose enablement rule follows its category.
    pub fn button(
        id: &str,
        category: ControlCategory,
        icon: PropertyKey,
        tooltip: PropertyKey,
        initially_disabled: bool,
    ) -> Self {
        Self {
            id: ControlId::from(id),
            category,
            kind: ControlKind::Button,
            initially_disabled,
            face: icon,
            tooltip,
            rule: category.into(),
        }
    }

    /// An edit-toolbar widget other than a button.
    pub fn edit_widget(id: &str, kind: ControlKind, caption: PropertyKey, tooltip: PropertyKey) -> Self {
        Self {
            id: ControlId::from(id),
            category: ControlCategory::Edit,
            kind,
            initially_disabled: true,
            face: caption,
            tooltip,
            rule: EnablementRule::WhenDocument,
        }
    }

    /// Override the category default rule.
    pub fn with_rule(mut self, rule: EnablementRule) -> Self {
        self.rule = rule;
        self
    }
}
