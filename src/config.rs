// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Window presets
//!
//! Each binary runs one of these. Toolkit configuration (fonts, themes,
//! shortcuts) is not set here; `kas` reads it from its own environment
//! options (see `KAS_CONFIG`).

use crate::label::{FontWeight, LabelDesc, LabelStyle};
use crate::window::{FixedSize, WindowDesc};
use kas::draw::color::Rgba8Srgb;

/// Size shared by both presets
pub const SIZE: FixedSize = FixedSize::new(600, 400);

/// Title of the [`plain`] window
pub const PLAIN_TITLE: &str = "Minimal KAS Window";

/// Title of the [`greeting`] window
pub const GREETING_TITLE: &str = "Minimal KAS Window - Label";

/// Text of the [`greeting`] label
pub const GREETING_TEXT: &str = "Hello, World!";

/// Style of the [`greeting`] label
pub fn greeting_style() -> LabelStyle {
    LabelStyle::new(24.0, FontWeight::Bold, Rgba8Srgb::rgb(0x1e, 0x5a, 0xa0))
}

/// An empty window
pub fn plain() -> WindowDesc {
    WindowDesc::new(PLAIN_TITLE, SIZE)
}

/// A window with a centred greeting
pub fn greeting() -> WindowDesc {
    let label = LabelDesc::new(GREETING_TEXT, greeting_style());
    WindowDesc::new(GREETING_TITLE, SIZE).with_label(label)
}
