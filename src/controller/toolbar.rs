// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Toolbar enablement state machine.
//!
//! The [`ToolbarStateController`] is the single source of truth for which
//! toolbar controls may be used. It tracks the [`DocumentState`], moves it
//! in response to [`LifecycleSignal`]s and, after every transition, emits
//! the complete `{control id -> enabled}` map for the binding layer to
//! apply. Nothing else toggles a control's enabled flag.
//!
//! | Rule           | NoDocument | DocumentClean | DocumentDirty |
//! |----------------|------------|---------------|---------------|
//! | `Always`       | enabled    | enabled       | enabled       |
//! | `WhenDirty`    | disabled   | disabled      | enabled       |
//! | `WhenDocument` | disabled   | enabled       | enabled       |

use crate::models::control::{ControlDescriptor, ControlId};
use crate::models::document::{DocumentState, LifecycleSignal};
use std::collections::BTreeMap;
use thiserror::Error;

/// Enabled flag of every registered control, keyed by id.
pub type EnablementMap = BTreeMap<ControlId, bool>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolbarError {
    #[error("control '{0}' is already registered")]
    DuplicateControl(ControlId),

    #[error("cannot apply '{signal}' in state {state:?}: no document is open")]
    InvalidTransition {
        signal: LifecycleSignal,
        state: DocumentState,
    },
}

#[derive(Debug)]
struct RegisteredControl {
    descriptor: ControlDescriptor,
    enabled: bool,
}

/// Owns the document state and the live enabled flag of each control.
#[derive(Debug, Default)]
pub struct ToolbarStateController {
    controls: Vec<RegisteredControl>,
    state: DocumentState,
    /// Set once a signal has recomputed enablement from the rules.
    started: bool,
}

impl ToolbarStateController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a control.
    ///
    /// Before the first signal a control starts from its descriptor's initial
    /// flag; afterwards its rule decides, so late controls match the table.
    pub fn register_control(&mut self, descriptor: ControlDescriptor) -> Result<(), ToolbarError> {
        if self.descriptor(descriptor.id.as_str()).is_some() {
            return Err(ToolbarError::DuplicateControl(descriptor.id));
        }

        let by_rule = descriptor.rule.is_enabled(self.state);
        let enabled = if self.started {
            by_rule
        } else {
            !descriptor.initially_disabled
        };
        if enabled != by_rule {
            log::warn!(
                "Control '{}' starts {} but its {:?} rule disagrees in {:?}",
                descriptor.id,
                if enabled { "enabled" } else { "disabled" },
                descriptor.rule,
                self.state
            );
        }

        log::debug!("Registered {:?} control '{}'", descriptor.category, descriptor.id);
        self.controls.push(RegisteredControl { descriptor, enabled });
        Ok(())
    }

    /// Run one lifecycle transition and return the recomputed enablement.
    ///
    /// On error the controller is left exactly as it was.
    pub fn apply_signal(&mut self, signal: LifecycleSignal) -> Result<EnablementMap, ToolbarError> {
        let next = transition(self.state, signal)?;

        if matches!(signal, LifecycleSignal::LoadFailed | LifecycleSignal::SaveFailed) {
            log::debug!("Signal '{}' leaves toolbar unchanged", signal);
            return Ok(self.enablement());
        }

        if next != self.state {
            log::debug!("Document state {:?} -> {:?} on '{}'", self.state, next, signal);
        }
        self.state = next;
        self.started = true;
        for control in &mut self.controls {
            control.enabled = control.descriptor.rule.is_enabled(next);
        }
        Ok(self.enablement())
    }

    pub fn on_new(&mut self) -> Result<EnablementMap, ToolbarError> {
        self.apply_signal(LifecycleSignal::New)
    }

    pub fn on_load_succeeded(&mut self) -> Result<EnablementMap, ToolbarError> {
        self.apply_signal(LifecycleSignal::LoadSucceeded)
    }

    pub fn on_load_failed(&mut self) -> Result<EnablementMap, ToolbarError> {
        self.apply_signal(LifecycleSignal::LoadFailed)
    }

    pub fn on_edit(&mut self) -> Result<EnablementMap, ToolbarError> {
        self.apply_signal(LifecycleSignal::Edit)
    }

    pub fn on_save_succeeded(&mut self) -> Result<EnablementMap, ToolbarError> {
        self.apply_signal(LifecycleSignal::SaveSucceeded)
    }

    pub fn on_save_failed(&mut self) -> Result<EnablementMap, ToolbarError> {
        self.apply_signal(LifecycleSignal::SaveFailed)
    }

    pub fn current_state(&self) -> DocumentState {
        self.state
    }

    /// Snapshot of every control's enabled flag.
    pub fn enablement(&self) -> EnablementMap {
        self.controls
            .iter()
            .map(|c| (c.descriptor.id.clone(), c.enabled))
            .collect()
    }

    pub fn is_enabled(&self, id: &str) -> Option<bool> {
        self.controls
            .iter()
            .find(|c| c.descriptor.id.as_str() == id)
            .map(|c| c.enabled)
    }

    pub fn descriptor(&self, id: &str) -> Option<&ControlDescriptor> {
        self.controls
            .iter()
            .map(|c| &c.descriptor)
            .find(|d| d.id.as_str() == id)
    }

    /// Registered descriptors, in registration order.
    pub fn descriptors(&self) -> impl Iterator<Item = &ControlDescriptor> {
        self.controls.iter().map(|c| &c.descriptor)
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}

fn transition(state: DocumentState, signal: LifecycleSignal) -> Result<DocumentState, ToolbarError> {
    use DocumentState::*;
    use LifecycleSignal::*;

    match (state, signal) {
        (_, New | LoadSucceeded) => Ok(DocumentClean),
        (_, LoadFailed | SaveFailed) => Ok(state),
        (NoDocument, Edit | SaveSucceeded) => Err(ToolbarError::InvalidTransition { signal, state }),
        (_, Edit) => Ok(DocumentDirty),
        (_, SaveSucceeded) => Ok(DocumentClean),
    }
}
