// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model for the application shell.

pub mod control;
pub mod document;
pub mod workspace;
