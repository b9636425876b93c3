#![forbid(unsafe_code)]

//! The event loop.
//!
//! A small Elm-shaped runtime: the model consumes canonical events and
//! answers with a [`Cmd`]; the loop owns the terminal session, the
//! double buffer, and the frame clock. Animation runs on a fixed tick
//! interval; input is drained between ticks so a burst of mouse events
//! costs one redraw, not one per event.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use termfolio_core::event::Event;
use termfolio_core::terminal_session::{SessionOptions, TerminalSession};
use termfolio_render::{Buffer, BufferDiff, Presenter};

/// What the model wants the runtime to do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cmd {
    /// Keep running.
    #[default]
    None,
    /// Tear down the terminal and exit the loop.
    Quit,
}

/// The application model driven by the runtime.
pub trait Model {
    /// Apply one event. Called for input, resize, focus, and ticks.
    fn update(&mut self, event: Event) -> Cmd;

    /// Render the full frame into `buffer`. The buffer arrives cleared.
    fn view(&self, buffer: &mut Buffer);
}

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct ProgramConfig {
    /// Animation tick interval.
    pub tick_interval: Duration,
    /// Capture mouse events.
    pub mouse: bool,
    /// Exit after this long, for scripted runs. `None` runs until quit.
    pub exit_after: Option<Duration>,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(50),
            mouse: true,
            exit_after: None,
        }
    }
}

/// The terminal event loop.
pub struct Program {
    config: ProgramConfig,
}

impl Program {
    /// Create a program with the given configuration.
    pub fn new(config: ProgramConfig) -> Self {
        Self { config }
    }

    /// Run the model until it quits, the exit deadline passes, or the
    /// terminal fails.
    ///
    /// Enters the alternate screen and raw mode for the duration; the
    /// session guard restores the terminal on every exit path.
    pub fn run(&mut self, model: &mut impl Model) -> io::Result<()> {
        let session = TerminalSession::new(SessionOptions {
            alternate_screen: true,
            mouse_capture: self.config.mouse,
            focus_events: true,
        })?;
        session.hide_cursor()?;

        let (width, height) = session.size()?;
        let (width, height) = (width.max(1), height.max(1));
        let mut front = Buffer::new(width, height);
        let mut back = Buffer::new(width, height);

        let mut presenter: Presenter<Stdout> = Presenter::new(io::stdout());
        presenter.clear_screen()?;
        presenter.flush()?;

        // Let the model lay itself out before the first frame.
        if model.update(Event::Resize { width, height }) == Cmd::Quit {
            return Ok(());
        }

        let started = Instant::now();
        let mut next_tick = Instant::now() + self.config.tick_interval;

        'frames: loop {
            back.clear();
            model.view(&mut back);
            let diff = BufferDiff::compute(&front, &back);
            if !diff.is_empty() {
                presenter.present(&back, &diff)?;
            }
            std::mem::swap(&mut front, &mut back);

            // Wait for the next tick or a batch of input, whichever
            // comes first, then loop around for a redraw.
            loop {
                let now = Instant::now();
                if let Some(limit) = self.config.exit_after
                    && now.duration_since(started) >= limit
                {
                    break 'frames;
                }

                if now >= next_tick {
                    next_tick += self.config.tick_interval;
                    if next_tick < now {
                        // Fell behind (suspended terminal); don't burst.
                        next_tick = now + self.config.tick_interval;
                    }
                    if model.update(Event::Tick) == Cmd::Quit {
                        break 'frames;
                    }
                    break;
                }

                let mut timeout = next_tick - now;
                if let Some(limit) = self.config.exit_after {
                    let remaining = limit.saturating_sub(now.duration_since(started));
                    timeout = timeout.min(remaining);
                }

                if !session.poll_event(timeout)? {
                    continue;
                }

                let mut dirty = false;
                loop {
                    if let Some(event) = session.read_event()? {
                        if let Event::Resize { width, height } = event {
                            let (w, h) = (width.max(1), height.max(1));
                            front = Buffer::new(w, h);
                            back = Buffer::new(w, h);
                            presenter.clear_screen()?;
                        }
                        if model.update(event) == Cmd::Quit {
                            break 'frames;
                        }
                        dirty = true;
                    }
                    if !session.poll_event(Duration::ZERO)? {
                        break;
                    }
                }
                if dirty {
                    break;
                }
            }
        }

        presenter.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termfolio_core::event::{KeyCode, KeyEvent};

    #[test]
    fn default_config_ticks_at_animation_rate() {
        let config = ProgramConfig::default();
        assert_eq!(config.tick_interval, Duration::from_millis(50));
        assert!(config.mouse);
        assert_eq!(config.exit_after, None);
    }

    // The loop itself needs a live terminal; the model contract is
    // exercised here with a hand-driven sequence instead.
    struct Countdown(u32);

    impl Model for Countdown {
        fn update(&mut self, event: Event) -> Cmd {
            match event {
                Event::Tick => {
                    self.0 = self.0.saturating_sub(1);
                    if self.0 == 0 { Cmd::Quit } else { Cmd::None }
                }
                Event::Key(k) if k.is_char('q') => Cmd::Quit,
                _ => Cmd::None,
            }
        }

        fn view(&self, buffer: &mut Buffer) {
            buffer.draw_str(
                0,
                0,
                &self.0.to_string(),
                termfolio_render::Rgb::WHITE,
                termfolio_render::StyleFlags::empty(),
            );
        }
    }

    #[test]
    fn model_quits_on_command() {
        let mut model = Countdown(2);
        assert_eq!(model.update(Event::Tick), Cmd::None);
        assert_eq!(model.update(Event::Tick), Cmd::Quit);
    }

    #[test]
    fn model_quits_on_key() {
        let mut model = Countdown(10);
        let quit = Event::Key(KeyEvent::new(KeyCode::Char('q')));
        assert_eq!(model.update(quit), Cmd::Quit);
    }
}
