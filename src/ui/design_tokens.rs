// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the showcase page.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_showcase::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::BLACK
};
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale (zinc)
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const ZINC_900: Color = Color::from_rgb(0.094, 0.094, 0.106);
    pub const ZINC_400: Color = Color::from_rgb(0.631, 0.631, 0.667);

    // Semantic colors
    pub const ERROR_400: Color = Color::from_rgb(0.973, 0.443, 0.443);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Dimmed page behind the contact modal.
    pub const BACKDROP: f32 = 0.75;
    /// Disabled controls (submit while sending).
    pub const DISABLED: f32 = 0.85;
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
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const SLIDESHOW_HEIGHT: f32 = 320.0;
    pub const CONTACT_FORM_MAX_WIDTH: f32 = 500.0;
    pub const MESSAGE_EDITOR_HEIGHT: f32 = 128.0;
    pub const CONTENT_MAX_WIDTH: f32 = 960.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page heading
    pub const TITLE_LG: f32 = 30.0;

    /// Entry titles, modal title
    pub const TITLE_MD: f32 = 20.0;

    /// Standard body - labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - slide counter, pause badge
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

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
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);

    assert!(opacity::BACKDROP > 0.0 && opacity::BACKDROP < 1.0);
    assert!(opacity::DISABLED > opacity::OVERLAY_MEDIUM);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::BODY > typography::CAPTION);

    assert!(sizing::CONTACT_FORM_MAX_WIDTH < sizing::CONTENT_MAX_WIDTH);
};
