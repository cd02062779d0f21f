//! Frame scheduler and session driver.
//!
//! The driver owns timing, input capture, focus policy and session
//! bracketing. It is an explicit session object — created with
//! [`Driver::new`], torn down by [`Driver::destroy`] (or drop) — and is
//! passed the tree for every operation; there is no process-wide state.
//!
//! Everything is single-threaded and cooperative: timer deadlines, key
//! events and resize notifications are discrete turns of one loop, so the
//! tree is only ever mutated from that loop and a frame can never be torn by
//! concurrent drawing. Overlapping re-entry into `render` is a defect the
//! driver guards against (the frame is skipped and logged), not tolerated.

use std::io::{self, Write};
use std::time::Instant;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::style::{Attribute, Print, ResetColor, SetAttribute};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use log::{debug, warn};

use crate::config::DriverConfig;
use crate::core::component::{KeyInput, KeyName, UiEvent};
use crate::core::layout::Layout;
use crate::core::surface::Surface;
use crate::core::tree::Tree;
use crate::error::{Error, Result};
use crate::logger::{self, MemoryLog};
use crate::timer::FrameTimer;

type KeyHook = Box<dyn FnMut(&KeyInput) -> bool>;
type EventSink = Box<dyn FnMut(&UiEvent)>;

pub struct Driver {
    config: DriverConfig,
    timer: FrameTimer,
    surface: Surface,
    out: io::Stdout,
    memory_log: MemoryLog,
    on_key_press: Option<KeyHook>,
    on_event: Option<EventSink>,
    last_size: (u16, u16),
    running: bool,
    paused: bool,
    in_frame: bool,
    initialized: bool,
}

impl Driver {
    pub fn new(config: DriverConfig) -> Result<Self> {
        config.validate().map_err(|e| Error::Config(e.to_string()))?;
        Ok(Self {
            config,
            timer: FrameTimer::new(),
            surface: Surface::new(),
            out: io::stdout(),
            memory_log: MemoryLog::new(),
            on_key_press: None,
            on_event: None,
            last_size: (0, 0),
            // Live from construction until exit() is requested.
            running: true,
            paused: false,
            in_frame: false,
            initialized: false,
        })
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// The retained log sink for this session.
    pub fn memory_log(&self) -> &MemoryLog {
        &self.memory_log
    }

    /// Total session time accumulated by the frame timer.
    pub fn elapsed(&self) -> std::time::Duration {
        self.timer.elapsed()
    }

    /// Register a global pre-hook fired before any other key handling.
    /// Returning `false` short-circuits the keystroke entirely.
    pub fn on_key_press(&mut self, hook: impl FnMut(&KeyInput) -> bool + 'static) {
        self.on_key_press = Some(Box::new(hook));
    }

    /// Register the sink that receives widget events (button presses, list
    /// selections, input submissions).
    pub fn on_event(&mut self, sink: impl FnMut(&UiEvent) + 'static) {
        self.on_event = Some(Box::new(sink));
    }

    /// Switch the terminal to raw per-keystroke input on the alternate
    /// screen and install the logger when configured. Idempotent.
    pub fn initialize(&mut self) -> Result<()> {
        if self.initialized {
            return Ok(());
        }
        if self.config.logging.enabled {
            if let Some(level) = self.config.level_filter() {
                logger::init(self.memory_log.clone(), level, self.config.logging.file.clone())
                    .map_err(|e| Error::Config(format!("logger init failed: {e}")))?;
            }
        }
        enable_raw_mode()?;
        execute!(self.out, EnterAlternateScreen, Hide)?;
        self.initialized = true;
        Ok(())
    }

    /// Run the session loop until [`Driver::exit`] (or ctrl-c / escape per
    /// configuration) ends it. Terminal state is restored on the way out.
    pub fn run(&mut self, tree: &mut Tree) -> Result<()> {
        self.initialize()?;
        let result = self.run_loop(tree);
        self.destroy();
        result
    }

    fn run_loop(&mut self, tree: &mut Tree) -> Result<()> {
        self.running = true;
        let frame = self.config.frame_duration();
        let mut next_frame = Instant::now() + frame;

        self.render(tree, true)?;

        while self.running {
            let timeout = next_frame.saturating_duration_since(Instant::now());
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => match map_key(&key) {
                        Some(input) => self.handle_key(tree, &input)?,
                        // Malformed or unrecognized input never stops the loop.
                        None => debug!("ignoring unrecognized key event: {key:?}"),
                    },
                    Event::Resize(_, _) => {
                        // Geometry invalidation is global.
                        self.render(tree, true)?;
                    }
                    _ => {}
                }
            } else {
                next_frame += frame;
                if self.config.frame.auto_update {
                    self.render(tree, false)?;
                }
            }
        }
        Ok(())
    }

    /// Route one keystroke: global pre-hook, hard interrupt, focus advance,
    /// escape policy, then the focused widget with ancestor bubbling.
    pub fn handle_key(&mut self, tree: &mut Tree, input: &KeyInput) -> Result<()> {
        if let Some(hook) = self.on_key_press.as_mut() {
            if !hook(input) {
                return Ok(());
            }
        }

        if input.ctrl && input.text == Some('c') {
            self.exit();
            return Ok(());
        }

        match input.name {
            KeyName::Tab => {
                // Shift-tab is not delivered on every terminal, so only
                // forward cycling is offered.
                if let Err(err) = tree.focus_next() {
                    warn!("focus advance failed: {err}");
                }
            }
            KeyName::Escape
                if self.config.input.exit_on_escape
                    && tree.focused_depth().is_some()
                    && tree.focused_depth() == tree.top_focusable_depth() =>
            {
                self.exit();
                return Ok(());
            }
            _ => {
                let events = tree.dispatch_key(input);
                if let Some(sink) = self.on_event.as_mut() {
                    for event in &events {
                        sink(event);
                    }
                }
            }
        }

        if self.config.frame.auto_update && self.running {
            self.render(tree, false)?;
        }
        Ok(())
    }

    /// Advance one frame: compute, draw, atomic flush, focus validation.
    /// Returns whether anything was drawn. Skipped while paused.
    pub fn render(&mut self, tree: &mut Tree, force: bool) -> Result<bool> {
        if self.paused {
            return Ok(false);
        }
        if self.in_frame {
            warn!("render tick overlapped an in-flight frame; skipping");
            return Ok(false);
        }
        self.in_frame = true;
        let result = self.render_frame(tree, force);
        self.in_frame = false;
        result
    }

    fn render_frame(&mut self, tree: &mut Tree, force: bool) -> Result<bool> {
        let _delta = self.timer.tick();

        let size = terminal::size()?;
        let force = force || size != self.last_size;
        self.last_size = size;
        let (columns, rows) = size;

        tree.begin_frame(force);
        tree.compute(Layout::root(columns, rows));

        if force {
            self.surface.clear_all()?;
        }
        let drew = tree.draw(&mut self.surface);

        if matches!(drew, Ok(true)) {
            // Focus may have become invalid without its node being redrawn
            // this frame; re-validate and re-fire the hook so cursor
            // placement stays correct.
            if !tree.has_valid_focus() {
                if let Err(err) = tree.focus_first() {
                    warn!("focus fallback failed: {err}");
                }
            }
            tree.refresh_focus();
            match tree.focus_cursor() {
                Some((x, y)) => {
                    self.surface.move_to(x, y)?;
                    self.surface.show_cursor()?;
                }
                None => self.surface.hide_cursor()?,
            }
        }

        // A fault during the draw pass must not corrupt the flush
        // discipline: release everything buffered up to the fault point
        // before surfacing it.
        self.surface.flush_to(&mut self.out)?;
        drew
    }

    /// Skip frames until [`Driver::resume`]; checked at the top of `render`.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// False once [`Driver::exit`] has been requested.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Pause the session and dump the retained log to the terminal.
    pub fn show_log(&mut self) -> Result<()> {
        self.paused = true;
        execute!(
            self.out,
            SetAttribute(Attribute::Reset),
            ResetColor,
            MoveTo(0, 0),
            Clear(ClearType::All)
        )?;
        for entry in self.memory_log.entries() {
            execute!(self.out, Print(format!("{entry}\r\n")))?;
        }
        Ok(())
    }

    /// Resume after [`Driver::show_log`] and force a full redraw.
    pub fn hide_log(&mut self, tree: &mut Tree) -> Result<()> {
        self.paused = false;
        self.render(tree, true)?;
        Ok(())
    }

    /// Request the session loop to end after the current turn.
    pub fn exit(&mut self) {
        self.running = false;
    }

    /// Restore cooked input and the main screen, flush pending output.
    /// Idempotent; also invoked on drop.
    pub fn destroy(&mut self) {
        if !self.initialized {
            return;
        }
        let _ = disable_raw_mode();
        let _ = execute!(self.out, LeaveAlternateScreen, Show);
        let _ = self.out.flush();
        self.initialized = false;
    }
}

impl Drop for Driver {
    fn drop(&mut self) {
        self.destroy();
    }
}

/// Decode a terminal key event into the core's (text, key-descriptor) pair.
/// Events the core does not recognize map to `None` and are ignored.
pub fn map_key(event: &KeyEvent) -> Option<KeyInput> {
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let input = match event.code {
        KeyCode::Char(c) => KeyInput {
            text: Some(c),
            name: KeyName::Char,
            ctrl,
        },
        KeyCode::Up => KeyInput { text: None, name: KeyName::Up, ctrl },
        KeyCode::Down => KeyInput { text: None, name: KeyName::Down, ctrl },
        KeyCode::Left => KeyInput { text: None, name: KeyName::Left, ctrl },
        KeyCode::Right => KeyInput { text: None, name: KeyName::Right, ctrl },
        KeyCode::Enter => KeyInput { text: None, name: KeyName::Return, ctrl },
        KeyCode::Tab => KeyInput { text: None, name: KeyName::Tab, ctrl },
        KeyCode::Esc => KeyInput { text: None, name: KeyName::Escape, ctrl },
        KeyCode::Backspace => KeyInput { text: None, name: KeyName::Backspace, ctrl },
        KeyCode::Delete => KeyInput { text: None, name: KeyName::Delete, ctrl },
        KeyCode::Home => KeyInput { text: None, name: KeyName::Home, ctrl },
        KeyCode::End => KeyInput { text: None, name: KeyName::End, ctrl },
        _ => return None,
    };
    Some(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn maps_printable_characters() {
        let input = map_key(&key(KeyCode::Char('a'), KeyModifiers::NONE)).unwrap();
        assert_eq!(input.text, Some('a'));
        assert_eq!(input.name, KeyName::Char);
        assert!(!input.ctrl);
    }

    #[test]
    fn maps_ctrl_modifier() {
        let input = map_key(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)).unwrap();
        assert!(input.ctrl);
        assert_eq!(input.text, Some('c'));
    }

    #[test]
    fn maps_logical_names() {
        assert_eq!(map_key(&key(KeyCode::Enter, KeyModifiers::NONE)).unwrap().name, KeyName::Return);
        assert_eq!(map_key(&key(KeyCode::Esc, KeyModifiers::NONE)).unwrap().name, KeyName::Escape);
        assert_eq!(map_key(&key(KeyCode::Tab, KeyModifiers::NONE)).unwrap().name, KeyName::Tab);
    }

    #[test]
    fn unrecognized_keys_are_dropped() {
        assert!(map_key(&key(KeyCode::F(5), KeyModifiers::NONE)).is_none());
    }
}
