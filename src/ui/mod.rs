// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! egui binding layer: toolbar construction, rendering and dialogs.

pub mod dialogs;
pub mod layout;
pub mod toolbar;
