// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Property keys and startup configuration.

pub mod property_type;
pub mod startup;
