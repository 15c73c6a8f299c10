// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Series color resolution.

extern crate alloc;

use alloc::format;
use alloc::string::String;

use peniko::Color;

/// A fixed, ordered list of series colors.
///
/// Series pick colors by index, wrapping around once the index runs past the end, so the
/// color assigned to a given index never depends on how long the series is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    colors: [Color; 6],
}

impl Palette {
    /// The default six-color palette.
    pub const DEFAULT: Self = Self::new([
        Color::from_rgb8(0x25, 0x63, 0xeb),
        Color::from_rgb8(0x10, 0xb9, 0x81),
        Color::from_rgb8(0xf5, 0x9e, 0x0b),
        Color::from_rgb8(0xef, 0x44, 0x44),
        Color::from_rgb8(0x8b, 0x5c, 0xf6),
        Color::from_rgb8(0x06, 0xb6, 0xd4),
    ]);

    /// Creates a palette from six colors.
    pub const fn new(colors: [Color; 6]) -> Self {
        Self { colors }
    }

    /// Number of distinct colors before the palette repeats.
    pub const fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; palettes have a fixed, non-zero length.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns the palette color for `index`, cycling through the palette.
    pub fn get(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }

    /// Resolves the displayed color for the series item at `index`.
    ///
    /// A non-empty `explicit` color is returned unchanged. Otherwise the palette color
    /// for `index` is returned as a `#rrggbb` string.
    ///
    /// ```
    /// use iochart_geometry::{Palette, color_to_hex};
    ///
    /// let palette = Palette::DEFAULT;
    /// assert_eq!(palette.resolve(0, Some("tomato")), "tomato");
    /// assert_eq!(palette.resolve(7, None), color_to_hex(palette.get(1)));
    /// ```
    pub fn resolve(&self, index: usize, explicit: Option<&str>) -> String {
        match explicit {
            Some(color) if !color.is_empty() => String::from(color),
            _ => color_to_hex(self.get(index)),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Formats a color as a lowercase `#rrggbb` string, ignoring alpha.
pub fn color_to_hex(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}
