//! TUI state algebra: pure types, zero effects.
//!
//! These types define the entire state space of the journey. Illegal states
//! should be unrepresentable: each screen variant carries only the
//! transient state that screen needs (a choice cursor), while state that
//! outlives a screen (activation flags, tree growth) lives in the shared
//! [`Journey`] on the App. The transition function and the rendering layer
//! both program against these types.

use crossterm::event::{KeyEvent, MouseEvent};

use crate::types::{ChoicePillar, Journey, Pillar};

use super::anim::Animations;

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
///
/// Two producers feed a single mpsc channel:
/// - An input reader thread sends `Key` and `Mouse` variants
/// - A ticker thread sends `Tick` at the frame interval
///
/// The event loop dispatches: input events go through `map_key`/`map_mouse`
/// into `update`, ticks go through the per-tick step with measured Δt.
#[derive(Debug)]
pub enum AppEvent {
    /// A terminal key event from the crossterm reader thread.
    Key(KeyEvent),
    /// A terminal mouse event (used for the tree click region).
    Mouse(MouseEvent),
    /// Frame tick. Elapsed time is measured in the loop, not carried here.
    Tick,
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
///
/// Owns the shared journey state, the animation oscillators, and the
/// current screen. The effects layer reads this to know what to render.
#[derive(Debug)]
pub struct App {
    /// Current screen — carries per-screen transient state.
    pub screen: Screen,

    /// Activation flags, tree growth, pending completion event.
    pub journey: Journey,

    /// Breathing-circle and glow oscillators, advanced every tick.
    pub anim: Animations,

    /// Set to true when the app should exit on the next iteration.
    pub should_quit: bool,
}

impl App {
    /// A fresh App on the welcome screen, nothing activated.
    pub fn new() -> Self {
        App {
            screen: Screen::Welcome,
            journey: Journey::new(),
            anim: Animations::new(),
            should_quit: false,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        App::new()
    }
}

// ============================================================================
// SCREENS
// ============================================================================

/// The current screen.
///
/// Each variant is a state in the navigation state machine. The four
/// choice pillars share one variant parameterized by [`ChoicePillar`];
/// the three micro-interaction pillars get their own variants. None of
/// them carries journey state — that lives in [`App::journey`].
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    /// Title screen. Confirm to begin.
    Welcome,

    /// Pillar picker. Digits 1-7 enter a pillar.
    MainMenu,

    /// A numbered-choice activity (Emotional, Purpose, Financial, Mental).
    Choice {
        pillar: ChoicePillar,
        /// Highlighted option, 0..N. None until the first digit press.
        selected: Option<usize>,
    },

    /// Physical: guided breathing with the pulsing circle.
    Breathing,

    /// Environmental: grow the tree by key press or click.
    TreeGrowing,

    /// Spiritual: quiet reflection with the glowing aura.
    Meditation,

    /// All seven pillars activated. Confirm restarts the journey.
    Completion,
}

/// Default is Welcome (also used as placeholder during transitions).
impl Default for Screen {
    fn default() -> Self {
        Screen::Welcome
    }
}

impl Screen {
    /// A fresh choice screen with nothing selected yet.
    pub fn choice(pillar: ChoicePillar) -> Self {
        Screen::Choice { pillar, selected: None }
    }

    /// The screen a pillar opens into from the main menu.
    pub fn for_pillar(pillar: Pillar) -> Self {
        match pillar {
            Pillar::Emotional => Screen::choice(ChoicePillar::Emotional),
            Pillar::Purpose => Screen::choice(ChoicePillar::Purpose),
            Pillar::Financial => Screen::choice(ChoicePillar::Financial),
            Pillar::Mental => Screen::choice(ChoicePillar::Mental),
            Pillar::Physical => Screen::Breathing,
            Pillar::Environmental => Screen::TreeGrowing,
            Pillar::Spiritual => Screen::Meditation,
        }
    }

    /// The pillar this screen belongs to, if it is a pillar screen.
    pub fn pillar(&self) -> Option<Pillar> {
        match self {
            Screen::Choice { pillar, .. } => Some(pillar.pillar()),
            Screen::Breathing => Some(Pillar::Physical),
            Screen::TreeGrowing => Some(Pillar::Environmental),
            Screen::Meditation => Some(Pillar::Spiritual),
            _ => None,
        }
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw terminal events.
///
/// The effects layer maps key presses and clicks to Actions.
/// The transition function decides what each Action means per Screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Confirm / advance (Enter).
    Confirm,
    /// Cancel back to the main menu (Esc).
    Back,
    /// The per-screen action key (Space).
    Advance,
    /// Digit 1-7: pillar choice on the menu, option choice on a pillar.
    NumberKey(u8),
    /// Pointer click at a terminal cell.
    Click { column: u16, row: u16 },
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
///
/// The update function returns this; the event loop inspects it to decide
/// what to do. Journey mutations (activations, tree growth) happen inside
/// `update` on the borrowed Journey — there are no other side effects to
/// describe.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// Show this screen (may be the same or a different screen).
    Screen(Screen),
    /// Quit the application.
    Quit,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_app_starts_on_welcome() {
        let app = App::new();
        assert_eq!(app.screen, Screen::Welcome);
        assert_eq!(app.journey.activated.active_count(), 0);
        assert!(!app.should_quit);
    }

    #[test]
    fn screen_default_is_welcome() {
        assert_eq!(Screen::default(), Screen::Welcome);
    }

    #[test]
    fn choice_screen_starts_unselected() {
        let screen = Screen::choice(ChoicePillar::Emotional);
        assert_eq!(
            screen,
            Screen::Choice { pillar: ChoicePillar::Emotional, selected: None }
        );
    }

    #[test]
    fn every_pillar_opens_into_a_screen() {
        assert_eq!(
            Screen::for_pillar(Pillar::Emotional),
            Screen::choice(ChoicePillar::Emotional)
        );
        assert_eq!(
            Screen::for_pillar(Pillar::Financial),
            Screen::choice(ChoicePillar::Financial)
        );
        assert_eq!(Screen::for_pillar(Pillar::Physical), Screen::Breathing);
        assert_eq!(Screen::for_pillar(Pillar::Environmental), Screen::TreeGrowing);
        assert_eq!(Screen::for_pillar(Pillar::Spiritual), Screen::Meditation);
    }

    #[test]
    fn screen_pillar_is_inverse_of_for_pillar() {
        for pillar in Pillar::ALL {
            assert_eq!(Screen::for_pillar(pillar).pillar(), Some(pillar));
        }
        assert_eq!(Screen::Welcome.pillar(), None);
        assert_eq!(Screen::MainMenu.pillar(), None);
        assert_eq!(Screen::Completion.pillar(), None);
    }

    #[test]
    fn action_equality_for_matching() {
        // Actions need Eq for the transition function to pattern-match
        assert_eq!(Action::NumberKey(1), Action::NumberKey(1));
        assert_ne!(Action::NumberKey(1), Action::NumberKey(2));
        assert_ne!(Action::Confirm, Action::Advance);
    }
}
