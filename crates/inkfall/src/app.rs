//! Interactive terminal front end.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, Event,
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent,
};
use crossterm::execute;
use inkfall_config::Config;
use inkfall_core::{ColorTheme, Phase};
use inkfall_fonts::Font;
use inkfall_particles::{Animator, ParticleCanvas};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Rect},
    style::Stylize,
    text::Line,
};

/// Split the screen into the particle canvas and the help line.
pub fn layout(area: Rect) -> [Rect; 2] {
    Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area)
}

/// Centre of terminal cell `(column, row)` in canvas pixels, if it is inside `canvas`.
pub fn cell_to_pixel(
    canvas: Rect,
    column: u16,
    row: u16,
    cell_width: f32,
    cell_height: f32,
) -> Option<(f32, f32)> {
    if !canvas.contains((column, row).into()) {
        return None;
    }
    Some((
        ((column - canvas.x) as f32 + 0.5) * cell_width,
        ((row - canvas.y) as f32 + 0.5) * cell_height,
    ))
}

/// Load the configured font, warning about characters it cannot draw.
pub fn load_font(config: &Config) -> Font {
    let font = Font::load_or_fallback(config.font.as_deref());
    let missing = font.missing_glyphs(&config.text);
    if !missing.is_empty() {
        tracing::warn!(font = font.name(), ?missing, "font has no glyphs for some characters");
    }
    font
}

/// Mouse and focus reporting, switched off again when dropped.
struct PointerReporting;

impl PointerReporting {
    fn enable() -> io::Result<Self> {
        execute!(io::stdout(), EnableMouseCapture, EnableFocusChange)?;
        Ok(Self)
    }
}

impl Drop for PointerReporting {
    fn drop(&mut self) {
        if let Err(err) = execute!(io::stdout(), DisableFocusChange, DisableMouseCapture) {
            tracing::warn!(%err, "failed to disable mouse capture");
        }
    }
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    config: Config,
    font: Font,
    animator: Animator,
    /// Current color theme.
    theme: ColorTheme,
    /// Canvas area the particle field was last generated for.
    canvas: Rect,
    /// Whether the pointer is currently over the canvas.
    pointer_inside: bool,
    /// Start of the current animator's lifetime.
    started_at: Instant,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        let font = load_font(&config);
        let animator = Animator::new(config.animator_settings(), font.clone());
        Self {
            running: false,
            theme: config.color_theme,
            config,
            font,
            animator,
            canvas: Rect::default(),
            pointer_inside: false,
            started_at: Instant::now(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let _reporting = PointerReporting::enable()?;
        let interval = Duration::from_millis(self.config.frame_interval_ms);

        self.running = true;
        while self.running {
            let deadline = Instant::now() + interval;
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events(deadline)?;
            self.animator.update(self.elapsed_ms());
        }
        Ok(())
    }

    fn elapsed_ms(&self) -> u64 {
        self.started_at.elapsed().as_millis() as u64
    }

    /// Regenerate the field if the canvas changed size.
    fn resize_canvas(&mut self, canvas: Rect) {
        if canvas == self.canvas {
            return;
        }
        self.canvas = canvas;
        self.animator.resize(
            canvas.width as f32 * self.config.cell_width as f32,
            canvas.height as f32 * self.config.cell_height as f32,
        );
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let [canvas, help_area] = layout(frame.area());
        self.resize_canvas(canvas);

        let particles = ParticleCanvas::new(
            self.animator.particles(),
            self.config.cell_width as f32,
            self.config.cell_height as f32,
        )
        .theme(self.theme)
        .layout_offset(self.animator.layout_offset());
        frame.render_widget(particles, canvas);

        let color = self.theme.color();
        let phase = self.animator.phase();
        let mut help = vec![
            "q".bold().fg(color),
            " quit  ".dark_gray(),
            "c".bold().fg(color),
            format!(" color ({})  ", self.theme.name()).dark_gray(),
            "r".bold().fg(color),
            " replay  ".dark_gray(),
        ];
        if phase == Phase::Idle {
            help.push("space".bold().fg(color));
            help.push(" or hover to begin".dark_gray());
        } else {
            help.push(phase.name().italic().fg(color));
        }
        frame.render_widget(Line::from(help).centered(), help_area);
    }

    /// Reads crossterm events until `deadline` and updates the state of [`App`].
    fn handle_crossterm_events(&mut self, deadline: Instant) -> color_eyre::Result<()> {
        while self.running {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::FocusLost => self.on_pointer_leave(),
                Event::Resize(width, height) => {
                    self.resize_canvas(layout(Rect::new(0, 0, width, height))[0])
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('c')) => self.cycle_color_theme(),
            (_, KeyCode::Char(' ')) => {
                self.animator.start();
            }
            (_, KeyCode::Char('r')) => self.replay(),
            _ => {}
        }
    }

    /// Track the pointer: entering the canvas starts the sequence, leaving it
    /// switches repulsion off.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        let pixel = cell_to_pixel(
            self.canvas,
            mouse.column,
            mouse.row,
            self.config.cell_width as f32,
            self.config.cell_height as f32,
        );
        match pixel {
            Some((x, y)) if self.pointer_inside => self.animator.pointer_move(x, y),
            Some((x, y)) => {
                self.pointer_inside = true;
                self.animator.pointer_enter(x, y);
            }
            None => self.on_pointer_leave(),
        }
    }

    fn on_pointer_leave(&mut self) {
        if self.pointer_inside {
            self.pointer_inside = false;
            self.animator.pointer_leave();
        }
    }

    /// Cycle through available color themes.
    fn cycle_color_theme(&mut self) {
        self.theme = self.theme.next();
    }

    /// Throw the animator away and start a fresh one on the same canvas.
    fn replay(&mut self) {
        tracing::info!("replaying animation");
        self.animator = Animator::new(self.config.animator_settings(), self.font.clone());
        self.started_at = Instant::now();
        self.pointer_inside = false;
        let canvas = std::mem::take(&mut self.canvas);
        self.resize_canvas(canvas);
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEventKind};

    fn app() -> App {
        let config = Config {
            text: "INK".into(),
            ..Config::default()
        };
        let mut app = App::new(config);
        app.resize_canvas(Rect::new(0, 0, 60, 20));
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn mouse_at(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Moved,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_layout_reserves_help_line() {
        let [canvas, help] = layout(Rect::new(0, 0, 80, 24));
        assert_eq!(canvas, Rect::new(0, 0, 80, 23));
        assert_eq!(help, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn test_cell_to_pixel() {
        let canvas = Rect::new(2, 1, 10, 5);
        assert_eq!(cell_to_pixel(canvas, 2, 1, 8.0, 16.0), Some((4.0, 8.0)));
        assert_eq!(cell_to_pixel(canvas, 5, 3, 8.0, 16.0), Some((28.0, 40.0)));
        assert_eq!(cell_to_pixel(canvas, 12, 3, 8.0, 16.0), None);
        assert_eq!(cell_to_pixel(canvas, 0, 0, 8.0, 16.0), None);
    }

    #[test]
    fn test_resize_regenerates_field() {
        let app = app();
        assert_eq!(app.animator.size(), (480.0, 320.0));
        assert!(!app.animator.particles().is_empty());
    }

    #[test]
    fn test_pointer_enter_move_leave() {
        let mut app = app();
        assert_eq!(app.animator.phase(), Phase::Idle);

        app.on_mouse_event(mouse_at(3, 4));
        assert_eq!(app.animator.phase(), Phase::Falling);
        assert_eq!(app.animator.pointer(), Some((28.0, 72.0)));

        app.on_mouse_event(mouse_at(4, 4));
        assert_eq!(app.animator.pointer(), Some((36.0, 72.0)));

        // The help line is outside the canvas
        app.on_mouse_event(mouse_at(4, 20));
        assert_eq!(app.animator.pointer(), None);
        assert_eq!(app.animator.phase(), Phase::Falling);
    }

    #[test]
    fn test_keys() {
        let mut app = app();
        app.running = true;

        app.on_key_event(key(KeyCode::Char('c')));
        assert_eq!(app.theme, ColorTheme::Cyan);

        app.on_key_event(key(KeyCode::Char(' ')));
        assert_eq!(app.animator.phase(), Phase::Falling);

        app.on_key_event(key(KeyCode::Char('r')));
        assert_eq!(app.animator.phase(), Phase::Idle);
        assert!(!app.animator.particles().is_empty());

        app.on_key_event(key(KeyCode::Char('q')));
        assert!(!app.running);
    }
}
