// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Courier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Courier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Form state machine.
//!
//! Everything with real logic lives here: the region registry, the list/scroll
//! cursor models, the selection record, the modal overlay, and the focus
//! controller that ties them together. Rendering and raw key input stay behind
//! the [`Screen`] seam so the whole module runs headless in tests.

mod controller;
mod cursor;
mod options;
mod overlay;
mod region;
mod screen;

pub use controller::{Controller, Key, Signal, INTRO_BANNER, SUBMIT_BANNER};
pub use cursor::{FreeCursor, ListCursor, Scroll, SCROLL_PAGE};
pub use options::Options;
pub use overlay::Overlay;
pub use region::Region;
pub use screen::{FormScreen, Screen, ScreenError};
