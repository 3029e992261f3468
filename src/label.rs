// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Styled text label
//!
//! A [`LabelDesc`] always occupies the whole content area of its window and
//! always centres its text on both axes. Only the text and [`LabelStyle`]
//! vary.

use crate::{Error, Result};
use kas::config::Config;
use kas::draw::color::Rgba8Srgb;
use kas::prelude::*;
use kas::text::format::Markdown;
use kas::theme::ColorsSrgb;
use kas::widgets::Label;

/// Name of the colour scheme installed by [`LabelStyle::apply`]
pub const SCHEME: &str = "label";

/// Font weight of label text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Visual style of a label
#[derive(Clone, Debug, PartialEq)]
pub struct LabelStyle {
    /// Font size (toolkit font units)
    pub font_size: f32,
    pub weight: FontWeight,
    /// Text colour
    pub color: Rgba8Srgb,
}

impl LabelStyle {
    /// Construct
    #[inline]
    pub fn new(font_size: f32, weight: FontWeight, color: Rgba8Srgb) -> Self {
        LabelStyle {
            font_size,
            weight,
            color,
        }
    }

    /// Convert plain `text` to Markdown source carrying this style's weight
    ///
    /// Markdown punctuation is escaped, so the text always renders literally.
    /// Line breaks (`\n` or `\r\n`) are kept as hard breaks. Surrounding
    /// white-space is trimmed since emphasis markers may not be followed by
    /// white-space.
    pub fn markup(&self, text: &str) -> String {
        let text = text.replace("\r\n", "\n");
        let text = text.trim();
        let mut out = String::with_capacity(text.len() + 4);
        let emphasis = match self.weight {
            FontWeight::Bold if !text.is_empty() => "**",
            _ => "",
        };

        out.push_str(emphasis);
        for c in text.chars() {
            match c {
                '\n' => out.push_str("\\\n"),
                c if c.is_ascii_punctuation() => {
                    out.push('\\');
                    out.push(c);
                }
                c => out.push(c),
            }
        }
        out.push_str(emphasis);
        out
    }

    /// Apply font size and text colour to the toolkit `config`
    ///
    /// KAS has no per-widget text colour, so both settings are global: they
    /// affect all text drawn by the theme, in every window. This installs
    /// (or replaces) the colour scheme [`SCHEME`] and makes it active.
    /// Colours other than text are those of [`ColorsSrgb::LIGHT`].
    ///
    /// Call before any window is added to the runner. Windows added later
    /// are configured from the updated config, so no update action is sent.
    pub fn apply(&self, config: &mut Config) {
        config.font.set_size(self.font_size);

        let colors = ColorsSrgb {
            text: self.color,
            ..ColorsSrgb::LIGHT
        };
        config.theme.add_scheme(SCHEME, colors);
        config.theme.set_active_scheme(SCHEME);

        log::debug!(
            "LabelStyle::apply: size {}, colour scheme {SCHEME:?}",
            self.font_size
        );
    }
}

/// A centred text label
#[derive(Clone, Debug, PartialEq)]
pub struct LabelDesc {
    text: String,
    style: LabelStyle,
}

impl LabelDesc {
    /// Construct
    #[inline]
    pub fn new(text: impl ToString, style: LabelStyle) -> Self {
        LabelDesc {
            text: text.to_string(),
            style,
        }
    }

    /// Get the text content
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the style
    #[inline]
    pub fn style(&self) -> &LabelStyle {
        &self.style
    }

    /// Get the alignment
    ///
    /// This is always centred on both axes.
    #[inline]
    pub fn align(&self) -> AlignHints {
        AlignHints::CENTER
    }

    /// Build the label widget
    ///
    /// The result stretches to fill whatever area it is given and draws its
    /// text in the centre of that area.
    pub fn build(&self) -> Result<impl Widget<Data = ()> + use<>> {
        let source = self.style.markup(&self.text);
        let text = Markdown::new(&source).map_err(|err| Error::Markup(err.to_string()))?;
        Ok(Label::new(text).align(self.align()))
    }
}
