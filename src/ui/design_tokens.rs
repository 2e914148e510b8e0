// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_folio::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create a backdrop color
let backdrop = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```

## Modification

⚠️ Tokens are designed to be consistent. Before modifying:
1. Check the impact on all components
2. Maintain ratios (e.g., MD = XS * 2)
3. Run validation tests
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale (zinc-leaning, matching the showcase surfaces)
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.09, 0.09, 0.11);
    pub const GRAY_700: Color = Color::from_rgb(0.25, 0.25, 0.28);
    pub const GRAY_400: Color = Color::from_rgb(0.45, 0.45, 0.5);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.78);
    pub const GRAY_100: Color = Color::from_rgb(0.88, 0.88, 0.9);
    pub const GRAY_50: Color = Color::from_rgb(0.96, 0.96, 0.97);

    // Brand colors (amber scale)
    pub const BRAND_100: Color = Color::from_rgb(0.996, 0.976, 0.765); // Pale amber
    pub const BRAND_400: Color = Color::from_rgb(0.98, 0.8, 0.082); // Light amber
    pub const BRAND_500: Color = Color::from_rgb(0.918, 0.702, 0.031); // Primary amber
    pub const BRAND_600: Color = Color::from_rgb(0.792, 0.541, 0.016); // Dark amber

    // Accent colors for card surfaces
    pub const ACCENT_BLUE: Color = Color::from_rgb(0.231, 0.51, 0.965);
    pub const ACCENT_PURPLE: Color = Color::from_rgb(0.659, 0.333, 0.969);
    pub const ACCENT_GREEN: Color = Color::from_rgb(0.133, 0.773, 0.369);
    pub const ACCENT_PINK: Color = Color::from_rgb(0.925, 0.282, 0.6);
    pub const ACCENT_ORANGE: Color = Color::from_rgb(0.976, 0.451, 0.086);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Accent tint behind icon tiles and card headers.
    pub const TINT: f32 = 0.12;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - Semi-transparent panels and containers
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;

    // Icon tile on service and process cards
    pub const ICON_TILE: f32 = 56.0;

    // Project card image placeholder height
    pub const CARD_IMAGE_HEIGHT: f32 = 160.0;

    // Detail overlay dimensions
    pub const DETAIL_WIDTH: f32 = 760.0;
    pub const DETAIL_MAX_HEIGHT: f32 = 560.0;

    // Toast width
    pub const TOAST_WIDTH: f32 = 320.0;

    // Landing content column width
    pub const CONTENT_WIDTH: f32 = 960.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale providing semantic sizes for consistent hierarchy.

    /// Extra large title - Section headings on the landing page
    pub const TITLE_XL: f32 = 34.0;

    /// Large title - Screen headings (Settings, About)
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - Card titles, overlay title
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - Section headers inside panels
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Section intro text
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Small body - Hints, secondary labels
    pub const BODY_SM: f32 = 13.0;

    /// Caption - Badges, tags, small info
    pub const CAPTION: f32 = 12.0;

    /// Oversized ordinal numbers on process cards
    pub const ORDINAL: f32 = 44.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Subtle separators, card outlines
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Emphasis borders, toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const XL: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Sizing validation
    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::ICON_MD > sizing::ICON_SM);
    assert!(sizing::DETAIL_WIDTH < sizing::CONTENT_WIDTH);

    // Typography validation
    assert!(typography::TITLE_XL > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Color validation
    assert!(palette::BRAND_500.r >= 0.0 && palette::BRAND_500.r <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn brand_scale_darkens_with_weight() {
        assert!(palette::BRAND_400.b < palette::BRAND_100.b);
        assert!(palette::BRAND_600.r < palette::BRAND_500.r);
    }
}
