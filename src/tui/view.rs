//! Pure rendering: map App state to ratatui widget trees.
//!
//! Each screen has a dedicated render function. The main `render()`
//! dispatches based on the current Screen variant. Widget-building
//! functions are pure (state in, widgets out); the only effect is
//! Frame::render_widget() which writes to the terminal buffer.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::content;
use crate::types::{ChoicePillar, Journey, Pillar, TREE_FOLIAGE_THRESHOLD, TREE_HIT_REGION};

use super::anim::Animations;
use super::state::{App, Screen};
use super::theme;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current screen to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    // Common layout: title bar at top, content in middle, help at bottom
    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Min(0),    // content
        Constraint::Length(1), // help
    ])
    .split(area);

    let title = render_title(&app.screen);
    frame.render_widget(title, chunks[0]);

    let help = render_help(&app.screen);
    frame.render_widget(help, chunks[2]);

    let content_area = chunks[1];

    match &app.screen {
        Screen::Welcome => render_welcome(frame, content_area),
        Screen::MainMenu => render_main_menu(&app.journey, &app.anim, frame, content_area),
        Screen::Choice { pillar, selected } => {
            render_choice(*pillar, *selected, frame, content_area);
        }
        Screen::Breathing => render_breathing(&app.anim, frame, content_area),
        Screen::TreeGrowing => render_tree(&app.journey, frame, content_area),
        Screen::Meditation => render_meditation(&app.anim, frame, content_area),
        Screen::Completion => render_completion(frame, content_area),
    }
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

/// Title bar showing the app name or the active pillar.
fn render_title(screen: &Screen) -> Paragraph<'static> {
    let title_text = match screen.pillar() {
        Some(pillar) => format!("{} Pillar", pillar.name()),
        None => content::APP_TITLE.to_string(),
    };

    Paragraph::new(Line::from(Span::styled(title_text, theme::STYLE_TITLE)))
}

/// Help line showing available keybindings for the current screen.
fn render_help(screen: &Screen) -> Paragraph<'static> {
    let help_text = match screen {
        Screen::Welcome => "[Enter] begin  [q] quit",
        Screen::MainMenu => "[1-7] explore a pillar  [q] quit",
        Screen::Choice { .. } => "[1-N] choose  [Enter] activate  [Esc] back",
        Screen::Breathing => "[Space] when you feel centered  [Esc] back",
        Screen::TreeGrowing => "[Space] or click the tree to help it grow  [Esc] back",
        Screen::Meditation => "[Space] when you feel a sense of calm  [Esc] back",
        Screen::Completion => "[Enter] start a new journey  [q] quit",
    };

    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

// ============================================================================
// SCREEN: WELCOME
// ============================================================================

fn render_welcome(frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(content::APP_TITLE, theme::STYLE_TITLE)),
        Line::from(""),
    ];
    for text in content::WELCOME_LINES {
        lines.push(Line::from(Span::styled(text, theme::STYLE_BODY)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press ENTER to begin your journey",
        theme::STYLE_INTERACTIVE,
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Emotional Fitness Academy",
        theme::STYLE_DIM,
    )));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

// ============================================================================
// SCREEN: MAIN MENU
// ============================================================================

fn render_main_menu(journey: &Journey, anim: &Animations, frame: &mut Frame, area: Rect) {
    let glow = anim.glow.value();

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("  Choose a Pillar to Explore", theme::STYLE_TITLE)),
        Line::from(""),
    ];

    for (i, pillar) in Pillar::ALL.into_iter().enumerate() {
        let active = journey.activated.is_active(pillar);
        // Activated markers pulse with the glow oscillator.
        let marker = if active {
            let pulse = theme::glow_color(theme::pillar_color(pillar), glow + 105.0);
            Span::styled("●", Style::new().fg(pulse))
        } else {
            Span::styled("○", theme::STYLE_DIM)
        };
        let label_style = if active { theme::STYLE_BODY } else { theme::STYLE_DIM };
        lines.push(Line::from(vec![
            Span::raw("    "),
            marker,
            Span::raw(" "),
            Span::styled(format!("{}. {}", i + 1, pillar.name()), label_style),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            "  Progress: {}/{} pillars activated",
            journey.activated.active_count(),
            Pillar::ALL.len()
        ),
        theme::STYLE_BODY,
    )));

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

// ============================================================================
// SCREEN: CHOICE PILLARS
// ============================================================================

fn render_choice(pillar: ChoicePillar, selected: Option<usize>, frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}", pillar.prompt()), theme::STYLE_BODY)),
        Line::from(""),
    ];

    for (i, option) in pillar.options().iter().enumerate() {
        let style = if selected == Some(i) {
            theme::STYLE_SELECTED
        } else {
            theme::STYLE_BODY
        };
        lines.push(Line::from(Span::styled(
            format!("  {}. {}", i + 1, option),
            style,
        )));
    }

    if selected.is_some() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  Press ENTER to activate the {} Pillar", pillar.pillar().name()),
            theme::STYLE_INTERACTIVE,
        )));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

// ============================================================================
// SCREEN: BREATHING (Physical)
// ============================================================================

fn render_breathing(anim: &Animations, frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from("Follow the guided breathing exercise"),
        Line::from("Breathe in as the circle grows, breathe out as it shrinks"),
        Line::from(""),
    ];
    lines.extend(circle_lines(anim.breath.value()));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Build the breathing circle as centered rows of block characters.
///
/// The oscillator radius [30, 80] maps to a column half-width of 5..=13;
/// rows are halved against columns for the terminal cell aspect ratio.
fn circle_lines(radius: f32) -> Vec<Line<'static>> {
    let rx = (radius / 6.0).round().max(1.0);
    let ry = (rx / 2.0).round().max(1.0) as i32;

    let mut lines = Vec::new();
    for dy in -ry..=ry {
        let span = 1.0 - (dy as f32 / ry as f32).powi(2);
        let half = (span.max(0.0).sqrt() * rx).round() as usize;
        let row = "█".repeat(half * 2);
        lines.push(Line::from(Span::styled(row, theme::STYLE_BREATH)));
    }
    lines
}

// ============================================================================
// SCREEN: TREE GROWING (Environmental)
// ============================================================================

fn render_tree(journey: &Journey, frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Plant a tree to connect with Mother Earth",
            theme::STYLE_BODY,
        )),
        Line::from(Span::styled(
            format!("  Growth: {:.0}%", journey.tree_growth * 100.0),
            theme::STYLE_BODY,
        )),
    ]);
    frame.render_widget(header, area);

    // The tree is drawn inside the fixed click region so that pointer hits
    // and pixels agree.
    let region = Rect::new(
        TREE_HIT_REGION.left,
        TREE_HIT_REGION.top,
        TREE_HIT_REGION.right - TREE_HIT_REGION.left + 1,
        TREE_HIT_REGION.bottom - TREE_HIT_REGION.top + 1,
    );
    let tree_area = region.intersection(frame.area());
    if tree_area.height == 0 {
        return;
    }

    let tree = Paragraph::new(tree_lines(journey.tree_growth, tree_area.height as usize))
        .alignment(Alignment::Center);
    frame.render_widget(tree, tree_area);

    if journey.tree_growth >= 1.0 {
        let done = Paragraph::new(Line::from(Span::styled(
            "  Beautiful! The Environmental Pillar is activated!",
            theme::STYLE_INTERACTIVE,
        )));
        let bottom = Rect::new(area.x, area.bottom().saturating_sub(1), area.width, 1);
        frame.render_widget(done, bottom);
    }
}

/// Build the tree, bottom-anchored in `height` rows: a trunk whose height
/// tracks growth, with foliage once growth passes the threshold.
fn tree_lines(growth: f32, height: usize) -> Vec<Line<'static>> {
    let trunk_rows = ((growth * 8.0).round() as usize).min(height);
    let foliage_rows = if growth > TREE_FOLIAGE_THRESHOLD {
        (((growth - TREE_FOLIAGE_THRESHOLD) * 6.0).ceil() as usize).min(4)
    } else {
        0
    };

    let mut lines = Vec::with_capacity(height);
    let pad = height.saturating_sub(trunk_rows + foliage_rows);
    for _ in 0..pad {
        lines.push(Line::from(""));
    }
    for i in 0..foliage_rows {
        // Widening rows of leaves.
        let width = 3 + i * 4;
        lines.push(Line::from(Span::styled(
            "▓".repeat(width),
            theme::STYLE_FOLIAGE,
        )));
    }
    for _ in 0..trunk_rows {
        lines.push(Line::from(Span::styled("███", theme::STYLE_TRUNK)));
    }
    lines
}

// ============================================================================
// SCREEN: MEDITATION (Spiritual)
// ============================================================================

fn render_meditation(anim: &Animations, frame: &mut Frame, area: Rect) {
    let aura_style = Style::new().fg(theme::glow_color(
        Color::Rgb(255, 255, 255),
        anim.glow.value(),
    ));

    let silhouette = ["▄████▄", "██████", " ████ ", "▄██████▄", "██████████", "██████████"];

    let mut lines = vec![
        Line::from(""),
        Line::from("Take a moment for quiet reflection"),
        Line::from("Listen to the silence within"),
        Line::from(""),
        Line::from(Span::styled("·  ·  ·  ·  ·  ·  ·", aura_style)),
    ];
    for row in silhouette {
        lines.push(Line::from(Span::styled(row, theme::STYLE_SILHOUETTE)));
    }
    lines.push(Line::from(Span::styled("·  ·  ·  ·  ·  ·  ·", aura_style)));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

// ============================================================================
// SCREEN: COMPLETION
// ============================================================================

fn render_completion(frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled("Congratulations!", theme::STYLE_TITLE)),
        Line::from(""),
    ];
    for text in content::COMPLETION_LINES {
        lines.push(Line::from(Span::styled(text, theme::STYLE_BODY)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press ENTER to start a new journey",
        theme::STYLE_INTERACTIVE,
    )));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn make_terminal() -> Terminal<TestBackend> {
        // Tall and wide enough to contain the tree click region.
        let backend = TestBackend::new(80, 24);
        Terminal::new(backend).unwrap()
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect()
    }

    #[test]
    fn all_screens_render_without_panic() {
        let mut terminal = make_terminal();
        let screens = vec![
            Screen::Welcome,
            Screen::MainMenu,
            Screen::choice(ChoicePillar::Emotional),
            Screen::Choice { pillar: ChoicePillar::Financial, selected: Some(2) },
            Screen::Breathing,
            Screen::TreeGrowing,
            Screen::Meditation,
            Screen::Completion,
        ];
        for screen in screens {
            let mut app = App::new();
            app.screen = screen;
            terminal
                .draw(|frame| render(&app, frame))
                .expect("every screen should render without panic");
        }
    }

    #[test]
    fn welcome_screen_shows_title_and_hint() {
        let mut terminal = make_terminal();
        let app = App::new();
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_text(&terminal);
        assert!(content.contains("The 7 Pillars of Self"));
        assert!(content.contains("Press ENTER to begin your journey"));
    }

    #[test]
    fn main_menu_lists_all_pillars_and_progress() {
        let mut terminal = make_terminal();
        let mut app = App::new();
        app.screen = Screen::MainMenu;
        app.journey.complete(Pillar::Physical);
        app.journey.complete(Pillar::Mental);
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_text(&terminal);
        for pillar in Pillar::ALL {
            assert!(content.contains(pillar.name()), "missing {}", pillar.name());
        }
        assert!(content.contains("Progress: 2/7 pillars activated"));
    }

    #[test]
    fn choice_screen_shows_prompt_and_numbered_options() {
        let mut terminal = make_terminal();
        let mut app = App::new();
        app.screen = Screen::choice(ChoicePillar::Financial);
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_text(&terminal);
        assert!(content.contains("Choose a wise financial action:"));
        assert!(content.contains("1. Save money for future goals"));
        assert!(content.contains("3. Share resources with others in need"));
    }

    #[test]
    fn choice_screen_shows_activate_hint_only_after_selection() {
        let mut terminal = make_terminal();
        let mut app = App::new();

        app.screen = Screen::choice(ChoicePillar::Mental);
        terminal.draw(|frame| render(&app, frame)).unwrap();
        assert!(!buffer_text(&terminal).contains("Press ENTER to activate"));

        app.screen = Screen::Choice { pillar: ChoicePillar::Mental, selected: Some(1) };
        terminal.draw(|frame| render(&app, frame)).unwrap();
        assert!(buffer_text(&terminal).contains("Press ENTER to activate the Mental Pillar"));
    }

    #[test]
    fn breathing_screen_draws_the_circle() {
        let mut terminal = make_terminal();
        let mut app = App::new();
        app.screen = Screen::Breathing;
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_text(&terminal);
        assert!(content.contains("breathing exercise"));
        assert!(content.contains("█"), "circle rows should be drawn");
    }

    #[test]
    fn circle_grows_with_the_oscillator() {
        let small: usize = circle_lines(30.0).iter().map(|l| l.width()).sum();
        let large: usize = circle_lines(80.0).iter().map(|l| l.width()).sum();
        assert!(large > small);
    }

    #[test]
    fn tree_screen_shows_growth_percent() {
        let mut terminal = make_terminal();
        let mut app = App::new();
        app.screen = Screen::TreeGrowing;
        app.journey.tree_growth = 0.4;
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_text(&terminal);
        assert!(content.contains("Growth: 40%"));
        assert!(!content.contains("Environmental Pillar is activated"));
    }

    #[test]
    fn full_tree_shows_the_activation_line() {
        let mut terminal = make_terminal();
        let mut app = App::new();
        app.screen = Screen::TreeGrowing;
        app.journey.tree_growth = 1.0;
        terminal.draw(|frame| render(&app, frame)).unwrap();

        assert!(buffer_text(&terminal).contains("Environmental Pillar is activated"));
    }

    #[test]
    fn seedling_has_no_foliage() {
        fn flatten(lines: &[Line]) -> String {
            lines
                .iter()
                .flat_map(|l| l.spans.iter())
                .map(|s| s.content.as_ref())
                .collect()
        }

        let text = flatten(&tree_lines(0.2, 13));
        assert!(!text.contains('▓'), "foliage appears only above the threshold");

        let text = flatten(&tree_lines(0.8, 13));
        assert!(text.contains('▓'));
    }

    #[test]
    fn meditation_screen_shows_reflection_copy() {
        let mut terminal = make_terminal();
        let mut app = App::new();
        app.screen = Screen::Meditation;
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_text(&terminal);
        assert!(content.contains("quiet reflection"));
        assert!(content.contains("silence within"));
    }

    #[test]
    fn completion_screen_shows_congratulations() {
        let mut terminal = make_terminal();
        let mut app = App::new();
        app.screen = Screen::Completion;
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_text(&terminal);
        assert!(content.contains("Congratulations!"));
        assert!(content.contains("Press ENTER to start a new journey"));
    }

    #[test]
    fn title_names_the_active_pillar() {
        let mut terminal = make_terminal();
        let mut app = App::new();
        app.screen = Screen::Meditation;
        terminal.draw(|frame| render(&app, frame)).unwrap();
        assert!(buffer_text(&terminal).contains("Spiritual Pillar"));
    }

    #[test]
    fn tiny_terminal_renders_without_panic() {
        let backend = TestBackend::new(10, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = App::new();
        for screen in [Screen::TreeGrowing, Screen::Breathing, Screen::MainMenu] {
            app.screen = screen;
            terminal
                .draw(|frame| render(&app, frame))
                .expect("small frames must not panic");
        }
    }
}
