// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Courier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Courier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Manifest loading.
//!
//! The store module reads the JSON manifest describing a form session (list
//! content plus the transcript document to display).

mod manifest;

pub use manifest::{Manifest, StoreError};
