//! Style constants and pillar display colors.
//!
//! Centralized theme definitions. Pure data — consumed by the rendering
//! layer for visual consistency.
//!
//! Color semantics:
//! - Per-pillar colors: activated pillar markers on the main menu
//! - Yellow: the currently selected option on a choice screen
//! - Cyan: interactive elements (keybinding hints)
//! - Dim: de-emphasized (footers, inactive pillars)
//! - Bold: screen titles, counts

use ratatui::style::{Color, Modifier, Style};

use crate::types::Pillar;

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Screen title — bold white.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// The highlighted option on a choice screen — yellow.
pub const STYLE_SELECTED: Style = Style::new().fg(Color::Yellow);

/// Interactive element / keybinding hint — cyan.
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

/// De-emphasized text — dark gray.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

/// Instructional body text.
pub const STYLE_BODY: Style = Style::new().fg(Color::White);

/// The breathing circle — soft blue.
pub const STYLE_BREATH: Style = Style::new().fg(Color::Rgb(100, 150, 255));

/// Tree trunk — brown.
pub const STYLE_TRUNK: Style = Style::new().fg(Color::Rgb(101, 67, 33));

/// Tree foliage — forest green.
pub const STYLE_FOLIAGE: Style = Style::new().fg(Color::Rgb(34, 139, 34));

/// Meditation silhouette — dark gray figure.
pub const STYLE_SILHOUETTE: Style = Style::new().fg(Color::Rgb(80, 80, 80));

// ============================================================================
// PILLAR COLORS
// ============================================================================

/// Display color for an activated pillar marker.
pub fn pillar_color(pillar: Pillar) -> Color {
    match pillar {
        Pillar::Emotional => Color::Rgb(255, 100, 100),     // red
        Pillar::Purpose => Color::Rgb(255, 200, 100),       // orange
        Pillar::Financial => Color::Rgb(100, 255, 100),     // green
        Pillar::Physical => Color::Rgb(100, 200, 255),      // blue
        Pillar::Mental => Color::Rgb(200, 100, 255),        // purple
        Pillar::Environmental => Color::Rgb(150, 255, 150), // light green
        Pillar::Spiritual => Color::Rgb(255, 255, 150),     // yellow
    }
}

/// Scale an RGB color by a glow alpha in [0, 255].
///
/// Terminal cells have no alpha channel, so the glow oscillator dims the
/// color toward black instead. Non-RGB colors pass through unchanged.
pub fn glow_color(base: Color, alpha: f32) -> Color {
    let factor = (alpha / 255.0).clamp(0.0, 1.0);
    match base {
        Color::Rgb(r, g, b) => Color::Rgb(
            (f32::from(r) * factor) as u8,
            (f32::from(g) * factor) as u8,
            (f32::from(b) * factor) as u8,
        ),
        other => other,
    }
}

// ============================================================================
// TESTS
// ============================================================================
