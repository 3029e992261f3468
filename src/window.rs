// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Fixed-size window description

use crate::label::LabelDesc;
use crate::{Error, Result};
use kas::prelude::*;
use kas::widgets::Filler;

/// Window dimensions, in logical pixels
///
/// Unsigned, thus never negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FixedSize {
    pub width: u32,
    pub height: u32,
}

impl FixedSize {
    /// Construct
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        FixedSize { width, height }
    }

    /// Convert to the toolkit's pixel type
    ///
    /// Fails with [`Error::Dimension`] when either value exceeds `i32::MAX`.
    pub fn to_px(self) -> Result<(i32, i32)> {
        let conv = |x: u32| i32::try_from(x).map_err(|_| Error::Dimension(x));
        Ok((conv(self.width)?, conv(self.height)?))
    }
}

/// Description of a single window
///
/// The window has a fixed size, a title and optionally a centred label
/// filling its content area. It is never resizable.
#[derive(Clone, Debug, PartialEq)]
pub struct WindowDesc {
    title: String,
    size: FixedSize,
    label: Option<LabelDesc>,
}

impl WindowDesc {
    /// Construct without content
    #[inline]
    pub fn new(title: impl ToString, size: FixedSize) -> Self {
        WindowDesc {
            title: title.to_string(),
            size,
            label: None,
        }
    }

    /// Set the label (inline)
    #[inline]
    #[must_use]
    pub fn with_label(mut self, label: LabelDesc) -> Self {
        self.label = Some(label);
        self
    }

    /// Get the title
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the size
    #[inline]
    pub fn size(&self) -> FixedSize {
        self.size
    }

    /// Get the label, if any
    #[inline]
    pub fn label(&self) -> Option<&LabelDesc> {
        self.label.as_ref()
    }

    /// Size reserved for the root widget, in toolkit pixels
    ///
    /// This is exactly [`Self::size`]; the toolkit applies the display's
    /// scale factor.
    pub fn reserved_px(&self) -> Result<(i32, i32)> {
        self.size.to_px()
    }

    /// Build a toolkit window
    ///
    /// Exactly [`Self::size`] is reserved for the root widget. Window
    /// dimensions are restricted to both the minimum and the ideal size of
    /// the root, thus the window takes the configured size and cannot be
    /// resized.
    pub fn build(&self) -> Result<Window<()>> {
        let (w, h) = self.reserved_px()?;

        let window = match self.label {
            Some(ref label) => {
                let ui = label.build()?.with_min_size_px(w, h);
                Window::new(ui, &self.title)
            }
            None => Window::new(Filler::new().with_min_size_px(w, h), &self.title),
        };

        Ok(window.with_restrictions(true, true))
    }

    /// Build the window and pass it to `show`
    ///
    /// Usually `show` adds the window to a runner, which makes it visible
    /// once the event loop starts.
    pub fn display<R>(&self, show: impl FnOnce(Window<()>) -> R) -> Result<R> {
        let window = self.build()?;
        log::info!(
            "WindowDesc::display: {:?} ({}x{})",
            self.title,
            self.size.width,
            self.size.height
        );
        Ok(show(window))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::label::{FontWeight, LabelStyle};
    use kas::draw::color::Rgba8Srgb;

    #[test]
    fn size_to_px() {
        assert_eq!(FixedSize::new(600, 400).to_px().unwrap(), (600, 400));
        assert_eq!(FixedSize::new(0, 0).to_px().unwrap(), (0, 0));
    }

    #[test]
    fn size_out_of_range() {
        let big = i32::MAX as u32 + 1;
        match FixedSize::new(10, big).to_px() {
            Err(Error::Dimension(x)) => assert_eq!(x, big),
            r => panic!("unexpected: {r:?}"),
        }
        assert!(WindowDesc::new("big", FixedSize::new(big, 1)).build().is_err());
    }

    #[test]
    fn accessors() {
        let style = LabelStyle::new(12.0, FontWeight::Normal, Rgba8Srgb::grey(0));
        let desc = WindowDesc::new("Title", FixedSize::new(320, 240))
            .with_label(LabelDesc::new("text", style));

        assert_eq!(desc.title(), "Title");
        assert_eq!(desc.size(), FixedSize::new(320, 240));
        assert_eq!(desc.label().map(|l| l.text()), Some("text"));
    }

    #[test]
    fn not_resizable() {
        let style = LabelStyle::new(12.0, FontWeight::Bold, Rgba8Srgb::grey(0));
        let plain = WindowDesc::new("Plain", FixedSize::new(600, 400));
        let labelled = plain.clone().with_label(LabelDesc::new("text", style));

        for desc in [plain, labelled] {
            let window = desc.build().unwrap();
            assert_eq!(window.restrictions(), (true, true));
        }
    }

    #[test]
    fn reserves_configured_size() {
        let desc = WindowDesc::new("Reserve", FixedSize::new(640, 480));
        assert_eq!(desc.reserved_px().unwrap(), (640, 480));
        let desc = WindowDesc::new("Reserve", FixedSize::new(1, 0));
        assert_eq!(desc.reserved_px().unwrap(), (1, 0));
    }

    #[test]
    fn display_passes_window() {
        let desc = WindowDesc::new("Shown", FixedSize::new(100, 50));
        let mut shown = 0;
        desc.display(|_window| shown += 1).unwrap();
        assert_eq!(shown, 1);
    }
}
