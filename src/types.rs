//! Domain types for seven-pillars.
//!
//! Pure data — the pillar taxonomy, the activation set, and the shared
//! journey state that outlives any single screen. No I/O, no rendering.

use crate::content;

// ============================================================================
// PILLARS
// ============================================================================

/// Number of pillars in the journey.
pub const PILLAR_COUNT: usize = 7;

/// One of the seven thematic self-reflection activities.
///
/// Variant order defines the canonical pillar index (Emotional=0 …
/// Spiritual=6), which is also the digit binding on the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pillar {
    Emotional,
    Purpose,
    Financial,
    Physical,
    Mental,
    Environmental,
    Spiritual,
}

impl Pillar {
    /// All pillars in canonical order.
    pub const ALL: [Pillar; PILLAR_COUNT] = [
        Pillar::Emotional,
        Pillar::Purpose,
        Pillar::Financial,
        Pillar::Physical,
        Pillar::Mental,
        Pillar::Environmental,
        Pillar::Spiritual,
    ];

    /// Canonical index, 0..7.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`Pillar::index`]. Returns `None` for indices >= 7.
    pub fn from_index(index: usize) -> Option<Pillar> {
        Pillar::ALL.get(index).copied()
    }

    /// Display name for menus and screen titles.
    pub fn name(self) -> &'static str {
        content::pillar_name(self)
    }
}

/// The four pillars whose activity is a numbered-choice menu.
///
/// A dedicated sub-enum so a choice screen over a non-choice pillar
/// (Physical, Environmental, Spiritual) is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoicePillar {
    Emotional,
    Purpose,
    Financial,
    Mental,
}

impl ChoicePillar {
    /// The underlying pillar.
    pub fn pillar(self) -> Pillar {
        match self {
            ChoicePillar::Emotional => Pillar::Emotional,
            ChoicePillar::Purpose => Pillar::Purpose,
            ChoicePillar::Financial => Pillar::Financial,
            ChoicePillar::Mental => Pillar::Mental,
        }
    }

    /// The choice activity for a pillar, if it has one.
    pub fn for_pillar(pillar: Pillar) -> Option<ChoicePillar> {
        match pillar {
            Pillar::Emotional => Some(ChoicePillar::Emotional),
            Pillar::Purpose => Some(ChoicePillar::Purpose),
            Pillar::Financial => Some(ChoicePillar::Financial),
            Pillar::Mental => Some(ChoicePillar::Mental),
            _ => None,
        }
    }

    /// The selectable options (4, 4, 3, 4 entries respectively).
    pub fn options(self) -> &'static [&'static str] {
        content::options(self)
    }

    /// The question shown above the options.
    pub fn prompt(self) -> &'static str {
        content::prompt(self)
    }
}

// ============================================================================
// ACTIVATION SET
// ============================================================================

/// The seven per-pillar activation flags, indexed by [`Pillar::index`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PillarSet([bool; PILLAR_COUNT]);

impl PillarSet {
    /// Mark a pillar as activated.
    pub fn activate(&mut self, pillar: Pillar) {
        self.0[pillar.index()] = true;
    }

    /// Whether a pillar has been activated.
    pub fn is_active(&self, pillar: Pillar) -> bool {
        self.0[pillar.index()]
    }

    /// Whether every pillar is activated.
    pub fn all_active(&self) -> bool {
        self.0.iter().all(|&a| a)
    }

    /// How many pillars are activated (for the "n/7" progress line).
    pub fn active_count(&self) -> usize {
        self.0.iter().filter(|&&a| a).count()
    }

    /// Clear every flag.
    pub fn clear(&mut self) {
        self.0 = [false; PILLAR_COUNT];
    }
}

// ============================================================================
// JOURNEY
// ============================================================================

/// Growth added per action-key press on the tree screen.
pub const TREE_KEY_STEP: f32 = 0.1;

/// Growth added per pointer click on the tree screen.
pub const TREE_CLICK_STEP: f32 = 0.2;

/// Foliage appears on the tree once growth passes this fraction.
pub const TREE_FOLIAGE_THRESHOLD: f32 = 0.3;

/// State shared across screens: activation flags, tree growth, and the
/// single-fire completion event.
///
/// Tree growth lives here (not in the tree screen variant) because it must
/// survive leaving and re-entering the screen; only [`Journey::reset`]
/// returns it to zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Journey {
    /// Per-pillar activation flags.
    pub activated: PillarSet,
    /// Environmental tree growth in [0, 1].
    pub tree_growth: f32,
    /// Raised exactly once, when the last pillar flips the set to
    /// all-active. Consumed by the next tick.
    completion_pending: bool,
}

impl Journey {
    pub fn new() -> Self {
        Journey::default()
    }

    /// Mark a pillar activated.
    ///
    /// Raises the completion event iff this call transitions the set from
    /// not-all-active to all-active. Re-activating a pillar is harmless and
    /// never re-raises the event.
    pub fn complete(&mut self, pillar: Pillar) {
        let was_all = self.activated.all_active();
        self.activated.activate(pillar);
        if !was_all && self.activated.all_active() {
            self.completion_pending = true;
        }
    }

    /// Advance tree growth by `step`, clamped to 1.0.
    ///
    /// Returns true when growth has reached full — the caller completes the
    /// Environmental pillar at exactly that step.
    pub fn tend_tree(&mut self, step: f32) -> bool {
        self.tree_growth = (self.tree_growth + step).min(1.0);
        self.tree_growth >= 1.0
    }

    /// Consume the pending completion event, if raised.
    pub fn take_completion_event(&mut self) -> bool {
        std::mem::take(&mut self.completion_pending)
    }

    /// Clear all activation flags, tree growth, and any pending event.
    pub fn reset(&mut self) {
        self.activated.clear();
        self.tree_growth = 0.0;
        self.completion_pending = false;
    }
}

// ============================================================================
// HIT REGION
// ============================================================================

/// An inclusive rectangular click region in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitRegion {
    pub left: u16,
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
}

impl HitRegion {
    /// Whether a cell falls inside the region.
    pub const fn contains(self, column: u16, row: u16) -> bool {
        column >= self.left && column <= self.right && row >= self.top && row <= self.bottom
    }
}

/// The clickable tree area on the Environmental screen.
///
/// Fixed in absolute cells, matching where the view draws the tree.
pub const TREE_HIT_REGION: HitRegion = HitRegion {
    left: 20,
    top: 6,
    right: 60,
    bottom: 18,
};

// ============================================================================
// TESTS
// ============================================================================
