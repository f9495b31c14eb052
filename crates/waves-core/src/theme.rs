// File: crates/waves-core/src/theme.rs
// Summary: Dark/Light theming for the static chart chrome (grid, ticks, labels, tooltip).

use crate::types::Rgba;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub grid: Rgba,
    pub tick: Rgba,
    pub axis_title: Rgba,
    pub point_label: Rgba,
    pub tooltip_background: Rgba,
    pub tooltip_title: Rgba,
    pub tooltip_body: Rgba,
    pub tooltip_border: Rgba,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::opaque(0x1a, 0x1a, 0x1a),
            grid: Rgba::with_alpha(80, 80, 80, 0.3),
            tick: Rgba::opaque(0x90, 0x90, 0x90),
            axis_title: Rgba::opaque(0x90, 0x90, 0x90),
            point_label: Rgba::opaque(0xc0, 0xc0, 0xc0),
            tooltip_background: Rgba::with_alpha(30, 30, 30, 0.95),
            tooltip_title: Rgba::opaque(0xe0, 0xe0, 0xe0),
            tooltip_body: Rgba::opaque(0xb0, 0xb0, 0xb0),
            tooltip_border: Rgba::opaque(0x40, 0x40, 0x40),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::opaque(250, 250, 252),
            grid: Rgba::with_alpha(120, 120, 130, 0.25),
            tick: Rgba::opaque(100, 100, 110),
            axis_title: Rgba::opaque(60, 60, 70),
            point_label: Rgba::opaque(40, 40, 50),
            tooltip_background: Rgba::with_alpha(255, 255, 255, 0.95),
            tooltip_title: Rgba::opaque(20, 20, 30),
            tooltip_body: Rgba::opaque(60, 60, 70),
            tooltip_border: Rgba::opaque(200, 200, 205),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::dark() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::dark)
}
