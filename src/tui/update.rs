//! Pure state transitions: (Screen, Action, Journey) → Transition.
//!
//! This is the core logic of the application. Fully testable without a
//! terminal. Each screen defines which actions it accepts; unhandled
//! actions return the current screen unchanged (no-op). Journey mutations
//! (activations, tree growth) happen here, on the borrowed Journey.

use crate::types::{
    ChoicePillar, Journey, Pillar, TREE_CLICK_STEP, TREE_HIT_REGION, TREE_KEY_STEP,
};

use super::state::{Action, Screen, Transition};

/// Pure state transition function.
///
/// Quit and cancel are handled before per-screen dispatch: cancel returns
/// to the main menu from anywhere except Welcome and Completion,
/// overriding whatever the screen would do with Esc. On Completion the
/// journey is finished and only confirm (restart) is meaningful — cancel
/// there would strand the user on an all-lit menu with no way back.
pub fn update(screen: Screen, action: &Action, journey: &mut Journey) -> Transition {
    match action {
        Action::Quit => return Transition::Quit,
        Action::Back if !matches!(screen, Screen::Welcome | Screen::Completion) => {
            return Transition::Screen(Screen::MainMenu);
        }
        _ => {}
    }

    match screen {
        Screen::Welcome => update_welcome(action),
        Screen::MainMenu => update_main_menu(action),
        Screen::Choice { pillar, selected } => update_choice(pillar, selected, action, journey),
        Screen::Breathing => update_action_screen(Screen::Breathing, Pillar::Physical, action, journey),
        Screen::TreeGrowing => update_tree(action, journey),
        Screen::Meditation => update_action_screen(Screen::Meditation, Pillar::Spiritual, action, journey),
        Screen::Completion => update_completion(action, journey),
    }
}

/// Per-tick step: consume the pending completion event.
///
/// Entering Completion happens here, on the tick after the seventh
/// activation, never inside `update` itself. Entry is single-fire: the
/// event is consumed, so later ticks (and ticks while already on
/// Completion) change nothing.
pub fn tick(screen: Screen, journey: &mut Journey) -> Screen {
    if journey.take_completion_event() && screen != Screen::Completion {
        Screen::Completion
    } else {
        screen
    }
}

// ============================================================================
// PER-SCREEN HANDLERS
// ============================================================================

/// Welcome: confirm begins the journey. Cancel is meaningless here.
fn update_welcome(action: &Action) -> Transition {
    match action {
        Action::Confirm => Transition::Screen(Screen::MainMenu),
        _ => Transition::Screen(Screen::Welcome),
    }
}

/// MainMenu: digits 1-7 open the corresponding pillar with fresh
/// selection state. Tree growth is untouched by navigation.
fn update_main_menu(action: &Action) -> Transition {
    match action {
        Action::NumberKey(n @ 1..=7) => match Pillar::from_index(usize::from(n - 1)) {
            Some(pillar) => Transition::Screen(Screen::for_pillar(pillar)),
            None => Transition::Screen(Screen::MainMenu),
        },
        _ => Transition::Screen(Screen::MainMenu),
    }
}

/// Choice screens: digits select an option, confirm activates the pillar
/// once something is selected. Confirm with no selection is a no-op, as is
/// a digit beyond the option count.
fn update_choice(
    pillar: ChoicePillar,
    selected: Option<usize>,
    action: &Action,
    journey: &mut Journey,
) -> Transition {
    let len = pillar.options().len();

    match action {
        Action::NumberKey(n) => {
            let index = usize::from(n.saturating_sub(1));
            if (1..=len as u8).contains(n) {
                Transition::Screen(Screen::Choice { pillar, selected: Some(index) })
            } else {
                Transition::Screen(Screen::Choice { pillar, selected })
            }
        }
        Action::Confirm if selected.is_some() => complete_pillar(pillar.pillar(), journey),
        _ => Transition::Screen(Screen::Choice { pillar, selected }),
    }
}

/// Breathing and Meditation: the action key completes the pillar, no
/// choice required.
fn update_action_screen(
    screen: Screen,
    pillar: Pillar,
    action: &Action,
    journey: &mut Journey,
) -> Transition {
    match action {
        Action::Advance => complete_pillar(pillar, journey),
        _ => Transition::Screen(screen),
    }
}

/// TreeGrowing: the action key and clicks inside the tree region grow the
/// tree; the pillar completes at the step where growth first reaches full.
fn update_tree(action: &Action, journey: &mut Journey) -> Transition {
    let step = match action {
        Action::Advance => Some(TREE_KEY_STEP),
        Action::Click { column, row } if TREE_HIT_REGION.contains(*column, *row) => {
            Some(TREE_CLICK_STEP)
        }
        _ => None,
    };

    match step {
        Some(step) if journey.tend_tree(step) => {
            complete_pillar(Pillar::Environmental, journey)
        }
        _ => Transition::Screen(Screen::TreeGrowing),
    }
}

/// Completion: confirm resets the journey and returns to the menu.
fn update_completion(action: &Action, journey: &mut Journey) -> Transition {
    match action {
        Action::Confirm => {
            journey.reset();
            Transition::Screen(Screen::MainMenu)
        }
        _ => Transition::Screen(Screen::Completion),
    }
}

// ============================================================================
// SHARED TRANSITIONS
// ============================================================================

/// Activate a pillar and return to the menu, unconditionally.
///
/// The journey raises its single-fire completion event if this was the
/// seventh activation; the next tick turns that into the Completion screen.
fn complete_pillar(pillar: Pillar, journey: &mut Journey) -> Transition {
    journey.complete(pillar);
    Transition::Screen(Screen::MainMenu)
}

// ============================================================================
// TESTS
// ============================================================================
