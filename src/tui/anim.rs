//! Triangle-wave oscillators for the breathing circle and the glow.
//!
//! Pure arithmetic — advanced from measured wall-clock Δt, so animation
//! speed is frame-rate independent. Both oscillators live on the App and
//! run on every tick regardless of the active screen (cheap, and invisible
//! screens simply don't read them).

// ============================================================================
// TUNING
// ============================================================================

/// Breathing-circle radius bounds and sweep rate (units per second).
pub const BREATH_MIN: f32 = 30.0;
pub const BREATH_MAX: f32 = 80.0;
pub const BREATH_RATE: f32 = 30.0;
const BREATH_START: f32 = 50.0;

/// Glow alpha bounds and sweep rate (units per second).
pub const GLOW_MIN: f32 = 50.0;
pub const GLOW_MAX: f32 = 150.0;
pub const GLOW_RATE: f32 = 50.0;
const GLOW_START: f32 = 100.0;

// ============================================================================
// OSCILLATOR
// ============================================================================

/// A value sweeping linearly between two bounds, reversing at each bound.
#[derive(Debug, Clone, PartialEq)]
pub struct Oscillator {
    value: f32,
    direction: f32, // +1.0 or -1.0
    min: f32,
    max: f32,
    rate: f32,
}

impl Oscillator {
    /// A rising oscillator starting at `start`.
    pub fn new(min: f32, max: f32, rate: f32, start: f32) -> Self {
        Oscillator {
            value: start.clamp(min, max),
            direction: 1.0,
            min,
            max,
            rate,
        }
    }

    /// Advance by elapsed seconds, clamping and reflecting at the bounds.
    ///
    /// A single large Δt lands exactly on a bound rather than overshooting,
    /// so the value never leaves [min, max].
    pub fn advance(&mut self, dt: f32) {
        self.value += self.direction * self.rate * dt;
        if self.value > self.max {
            self.value = self.max;
            self.direction = -1.0;
        } else if self.value < self.min {
            self.value = self.min;
            self.direction = 1.0;
        }
    }

    /// Current value, always within [min, max].
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Current position normalized to [0, 1].
    pub fn phase(&self) -> f32 {
        (self.value - self.min) / (self.max - self.min)
    }

    /// Whether the value is currently rising.
    pub fn rising(&self) -> bool {
        self.direction > 0.0
    }
}

// ============================================================================
// ANIMATIONS
// ============================================================================

/// The two oscillators the screens read.
#[derive(Debug, Clone, PartialEq)]
pub struct Animations {
    /// Breathing-circle radius, [30, 80].
    pub breath: Oscillator,
    /// Glow alpha, [50, 150].
    pub glow: Oscillator,
}

impl Animations {
    pub fn new() -> Self {
        Animations {
            breath: Oscillator::new(BREATH_MIN, BREATH_MAX, BREATH_RATE, BREATH_START),
            glow: Oscillator::new(GLOW_MIN, GLOW_MAX, GLOW_RATE, GLOW_START),
        }
    }

    /// Advance both oscillators by elapsed seconds.
    pub fn advance(&mut self, dt: f32) {
        self.breath.advance(dt);
        self.glow.advance(dt);
    }
}

impl Default for Animations {
    fn default() -> Self {
        Animations::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
