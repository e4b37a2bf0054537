// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! safshell - Simple Application Framework shell
//!
//! Toolbars built from an external properties file, with controls enabled
//! according to the state of the open document.
//!
//! The [`controller`], [`models`], [`settings`] and [`io::catalog`] modules
//! are toolkit-independent. [`app`] and [`ui`] bind them to egui.

pub mod app;
pub mod controller;
pub mod io;
pub mod models;
pub mod settings;
pub mod ui;
