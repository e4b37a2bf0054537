// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Controllers driving toolbar state and file actions.

pub mod file;
pub mod toolbar;
