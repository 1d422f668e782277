//! Static text content: pillar names, prompts, and option tables.
//!
//! Pure data — consumed by the rendering layer and by the choice screens.

use crate::types::{ChoicePillar, Pillar};

// ============================================================================
// TITLES
// ============================================================================

/// Application title, shown on the welcome screen and title bar.
pub const APP_TITLE: &str = "The 7 Pillars of Self";

/// Welcome screen copy, top to bottom.
pub const WELCOME_LINES: [&str; 2] = [
    "A Journey of Self-Discovery and Growth",
    "Based on Indigenous Wisdom and Emotional Fitness",
];

/// Completion screen copy, top to bottom.
pub const COMPLETION_LINES: [&str; 4] = [
    "You have activated all 7 Pillars of Self!",
    "Your foundation is now strong and balanced.",
    "Remember: True transformation comes from within.",
    "Your innate wisdom is your greatest tool.",
];

// ============================================================================
// PILLAR TABLES
// ============================================================================

/// Display name for a pillar.
pub fn pillar_name(pillar: Pillar) -> &'static str {
    match pillar {
        Pillar::Emotional => "Emotional",
        Pillar::Purpose => "Purpose",
        Pillar::Financial => "Financial",
        Pillar::Physical => "Physical",
        Pillar::Mental => "Mental",
        Pillar::Environmental => "Environmental",
        Pillar::Spiritual => "Spiritual",
    }
}

const EMOTIONAL_OPTIONS: [&str; 4] = [
    "I feel energized and want to share positivity",
    "I feel calm and want to reflect quietly",
    "I feel challenged and want to grow stronger",
    "I feel grateful and want to appreciate life",
];

const PURPOSE_QUOTES: [&str; 4] = [
    "\"Your purpose is to make a difference in the world\" - Unknown",
    "\"Success is not final, failure is not fatal\" - Churchill",
    "\"The best way to find yourself is to lose yourself in service\" - Gandhi",
    "\"Life is what happens when you're busy making plans\" - Lennon",
];

const FINANCIAL_OPTIONS: [&str; 3] = [
    "Save money for future goals",
    "Invest in personal development",
    "Share resources with others in need",
];

const MENTAL_OPTIONS: [&str; 4] = [
    "\"I can learn from this challenge and grow stronger\"",
    "\"This difficult moment will pass, and I will adapt\"",
    "\"I have the inner wisdom to navigate this situation\"",
    "\"Every experience teaches me something valuable\"",
];

/// The selectable options for a choice pillar.
pub fn options(pillar: ChoicePillar) -> &'static [&'static str] {
    match pillar {
        ChoicePillar::Emotional => &EMOTIONAL_OPTIONS,
        ChoicePillar::Purpose => &PURPOSE_QUOTES,
        ChoicePillar::Financial => &FINANCIAL_OPTIONS,
        ChoicePillar::Mental => &MENTAL_OPTIONS,
    }
}

/// The question shown above a choice pillar's options.
pub fn prompt(pillar: ChoicePillar) -> &'static str {
    match pillar {
        ChoicePillar::Emotional => {
            "How do you feel today and what do you want to do with that emotion?"
        }
        ChoicePillar::Purpose => "Which quote inspires you the most?",
        ChoicePillar::Financial => "Choose a wise financial action:",
        ChoicePillar::Mental => "Choose the most helpful thought:",
    }
}

// ============================================================================
// TESTS
// ============================================================================
