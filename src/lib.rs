// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Courier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Courier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Courier — keyboard-driven terminal submission form.
//!
//! The `form` module holds the focus/cursor state machine; `tui` is the ratatui shell
//! that drives it; `store` loads form manifests; `fetch` is the one-shot downloader.

pub mod fetch;
pub mod form;
pub mod store;
pub mod tui;
