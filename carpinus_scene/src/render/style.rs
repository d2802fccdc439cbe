// Copyright 2025 the Carpinus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-category figure styling.

use carpinus_layout::Category;
use hashbrown::HashMap;

use super::Color;
use crate::RenderError;

/// How one category of node is painted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FigureStyle {
    /// Text drawn in the header band.
    pub title: String,
    /// Body fill.
    pub primary: Color,
    /// Header band fill.
    pub secondary: Color,
    /// Color of the title and label text.
    pub text: Color,
}

impl FigureStyle {
    /// A style with white text.
    pub fn new(title: impl Into<String>, primary: Color, secondary: Color) -> Self {
        Self {
            title: title.into(),
            primary,
            secondary,
            text: Color::WHITE,
        }
    }
}

/// Category to [`FigureStyle`] lookup.
///
/// [`StyleTable::default`] holds a style for every [`Category`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleTable {
    styles: HashMap<Category, FigureStyle>,
}

impl Default for StyleTable {
    fn default() -> Self {
        let teal = (Color::from_rgb_u32(0x0c917c), Color::from_rgb_u32(0x086658));
        let mut table = Self::empty();
        table.register(Category::Root, FigureStyle::new("R O O T", teal.0, teal.1));
        table.register(
            Category::Context,
            FigureStyle::new(
                "C O N T E X T",
                Color::from_rgb_u32(0xf6584c),
                Color::from_rgb_u32(0xa74037),
            ),
        );
        table.register(
            Category::Subcontext,
            FigureStyle::new(
                "S U B - C O N T E X T",
                Color::from_rgb_u32(0xfdb018),
                Color::from_rgb_u32(0xb17b12),
            ),
        );
        table.register(Category::Feature, FigureStyle::new("F E A T U R E", teal.0, teal.1));
        table
    }
}

impl StyleTable {
    /// A table with no styles.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            styles: HashMap::new(),
        }
    }

    /// Set the style for `category`, returning the one it replaced.
    pub fn register(&mut self, category: Category, style: FigureStyle) -> Option<FigureStyle> {
        self.styles.insert(category, style)
    }

    /// The style for `category`.
    pub fn get(&self, category: Category) -> Result<&FigureStyle, RenderError> {
        self.styles
            .get(&category)
            .ok_or(RenderError::UnregisteredCategory(category))
    }
}
