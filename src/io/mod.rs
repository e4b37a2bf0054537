// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for properties, icons and work files.

pub mod catalog;
pub mod icons;
pub mod work_file;
