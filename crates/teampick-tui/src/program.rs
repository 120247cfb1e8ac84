//! Program lifecycle and event loop.
//!
//! [`Program`] owns terminal setup, input translation, message dispatch and
//! rendering. Terminal modes are held by an RAII guard: raw mode, the
//! alternate screen, mouse capture and focus reporting are acquired
//! together before the loop starts and released on drop, including on
//! error and panic unwind paths. Input events have exactly one reader for
//! the guard's lifetime.

use std::io::{self, Write};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use tracing::debug;

use crate::command::Cmd;
use crate::key::from_crossterm_key;
use crate::message::{
    BatchMsg, BlurMsg, FocusMsg, InterruptMsg, Message, QuitMsg, SequenceMsg, WindowSizeMsg,
};
use crate::mouse::from_crossterm_mouse;
use crate::KeyType;

/// Errors that can occur when running a program.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O error during terminal operations.
    #[error("terminal io error: {0}")]
    Io(#[from] io::Error),

    /// Failed to enable or disable raw mode.
    #[error("failed to {action} raw mode: {source}")]
    RawMode {
        /// Whether we were trying to enable or disable raw mode.
        action: &'static str,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to poll for terminal events.
    #[error("failed to poll terminal events: {0}")]
    EventPoll(#[source] io::Error),

    /// Failed to render the view to the terminal.
    #[error("failed to render view: {0}")]
    Render(#[source] io::Error),
}

/// A specialized [`Result`] type for program operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The application model in the Elm Architecture.
pub trait Model: Send + 'static {
    /// Initialize the model and return an optional startup command.
    fn init(&self) -> Option<Cmd>;

    /// Process a message and return a follow-up command.
    fn update(&mut self, msg: Message) -> Option<Cmd>;

    /// Render the model as a string for display.
    fn view(&self) -> String;
}

/// Program options.
#[derive(Debug, Clone)]
pub struct ProgramOptions {
    /// Use the alternate screen buffer.
    pub alt_screen: bool,
    /// Enable mouse capture (clicks, wheel, motion).
    pub mouse: bool,
    /// Enable focus reporting ([`FocusMsg`]/[`BlurMsg`]).
    pub report_focus: bool,
    /// Target frames per second.
    pub fps: u32,
}

impl Default for ProgramOptions {
    fn default() -> Self {
        Self {
            alt_screen: false,
            mouse: false,
            report_focus: false,
            fps: 60,
        }
    }
}

/// RAII holder for terminal modes.
///
/// Acquiring puts the terminal into raw mode and enables the requested
/// features; dropping restores everything in reverse order. Errors during
/// release are ignored, the terminal is already being torn down.
struct TermGuard {
    opts: ProgramOptions,
}

impl TermGuard {
    fn acquire(opts: ProgramOptions) -> Result<Self> {
        enable_raw_mode().map_err(|source| Error::RawMode {
            action: "enable",
            source,
        })?;

        let mut out = io::stdout();
        if opts.alt_screen {
            execute!(out, EnterAlternateScreen)?;
        }
        execute!(out, Hide)?;
        if opts.mouse {
            execute!(out, EnableMouseCapture)?;
        }
        if opts.report_focus {
            execute!(out, event::EnableFocusChange)?;
        }

        Ok(Self { opts })
    }
}

impl Drop for TermGuard {
    fn drop(&mut self) {
        let mut out = io::stdout();
        if self.opts.report_focus {
            let _ = execute!(out, event::DisableFocusChange);
        }
        if self.opts.mouse {
            let _ = execute!(out, DisableMouseCapture);
        }
        let _ = execute!(out, Show);
        if self.opts.alt_screen {
            let _ = execute!(out, LeaveAlternateScreen);
        }
        let _ = disable_raw_mode();
    }
}

/// The main program runner.
///
/// # Example
///
/// ```rust,ignore
/// use teampick_tui::Program;
///
/// let final_model = Program::new(model)
///     .with_alt_screen()
///     .with_mouse()
///     .with_report_focus()
///     .run()?;
/// ```
pub struct Program<M: Model> {
    model: M,
    options: ProgramOptions,
}

impl<M: Model> Program<M> {
    /// Create a new program with the given model.
    pub fn new(model: M) -> Self {
        Self {
            model,
            options: ProgramOptions::default(),
        }
    }

    /// Use the alternate screen buffer (full-screen mode).
    #[must_use]
    pub fn with_alt_screen(mut self) -> Self {
        self.options.alt_screen = true;
        self
    }

    /// Enable mouse capture.
    #[must_use]
    pub fn with_mouse(mut self) -> Self {
        self.options.mouse = true;
        self
    }

    /// Enable focus reporting.
    #[must_use]
    pub fn with_report_focus(mut self) -> Self {
        self.options.report_focus = true;
        self
    }

    /// Set the target frames per second. Clamped to 1..=120.
    #[must_use]
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.options.fps = fps.clamp(1, 120);
        self
    }

    /// Returns the configured options.
    #[must_use]
    pub fn options(&self) -> &ProgramOptions {
        &self.options
    }

    /// Run the program and return the final model state.
    ///
    /// # Errors
    ///
    /// Fails when the terminal cannot be put into raw mode or polled, or
    /// when rendering to it fails.
    pub fn run(self) -> Result<M> {
        let _guard = TermGuard::acquire(self.options.clone())?;
        self.event_loop()
    }

    fn event_loop(mut self) -> Result<M> {
        let (tx, rx): (Sender<Message>, Receiver<Message>) = mpsc::channel();
        let mut out = io::stdout();

        if let Ok((width, height)) = terminal::size() {
            let _ = tx.send(Message::new(WindowSizeMsg { width, height }));
        }

        if let Some(cmd) = self.model.init() {
            handle_command(cmd, tx.clone());
        }

        let mut last_view = String::new();
        self.render(&mut out, &mut last_view)?;

        let frame = Duration::from_secs_f64(1.0 / f64::from(self.options.fps));

        loop {
            if event::poll(frame).map_err(Error::EventPoll)? {
                match event::read().map_err(Error::EventPoll)? {
                    Event::Key(key_event) => {
                        if key_event.kind != KeyEventKind::Press {
                            continue;
                        }
                        let key_msg = from_crossterm_key(key_event.code, key_event.modifiers);
                        if key_msg.key_type == KeyType::CtrlC {
                            let _ = tx.send(Message::new(InterruptMsg));
                        } else {
                            let _ = tx.send(Message::new(key_msg));
                        }
                    }
                    Event::Mouse(mouse_event) => {
                        let _ = tx.send(Message::new(from_crossterm_mouse(mouse_event)));
                    }
                    Event::Resize(width, height) => {
                        let _ = tx.send(Message::new(WindowSizeMsg { width, height }));
                    }
                    Event::FocusGained => {
                        let _ = tx.send(Message::new(FocusMsg));
                    }
                    Event::FocusLost => {
                        let _ = tx.send(Message::new(BlurMsg));
                    }
                    Event::Paste(_) => {}
                }
            }

            let mut needs_render = false;
            while let Ok(msg) = rx.try_recv() {
                if msg.is::<QuitMsg>() || msg.is::<InterruptMsg>() {
                    debug!("event loop exiting");
                    return Ok(self.model);
                }

                if let Some(cmd) = self.model.update(msg) {
                    handle_command(cmd, tx.clone());
                }
                needs_render = true;
            }

            if needs_render {
                self.render(&mut out, &mut last_view)?;
            }
        }
    }

    fn render<W: Write>(&self, writer: &mut W, last_view: &mut String) -> Result<()> {
        let view = self.model.view();
        if view == *last_view {
            return Ok(());
        }

        execute!(writer, MoveTo(0, 0), Clear(ClearType::All)).map_err(Error::Render)?;
        // Raw mode: LF alone does not return the carriage.
        write!(writer, "{}", view.replace('\n', "\r\n")).map_err(Error::Render)?;
        writer.flush().map_err(Error::Render)?;

        *last_view = view;
        Ok(())
    }
}

/// Execute a command on its own thread, unpacking batch/sequence envelopes.
///
/// Batched commands each get their own thread: they complete in whatever
/// order they finish, with no ordering guarantee. Sequenced commands run
/// in order on a single thread.
fn handle_command(cmd: Cmd, tx: Sender<Message>) {
    thread::spawn(move || {
        let Some(msg) = cmd.execute() else { return };

        if msg.is::<BatchMsg>() {
            if let Some(batch) = msg.downcast::<BatchMsg>() {
                for cmd in batch.0 {
                    let tx = tx.clone();
                    thread::spawn(move || {
                        if let Some(msg) = cmd.execute() {
                            let _ = tx.send(msg);
                        }
                    });
                }
            }
        } else if msg.is::<SequenceMsg>() {
            if let Some(seq) = msg.downcast::<SequenceMsg>() {
                for cmd in seq.0 {
                    if let Some(msg) = cmd.execute() {
                        let _ = tx.send(msg);
                    }
                }
            }
        } else {
            let _ = tx.send(msg);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::batch;

    struct Recorder(Vec<String>);

    impl Model for Recorder {
        fn init(&self) -> Option<Cmd> {
            None
        }

        fn update(&mut self, msg: Message) -> Option<Cmd> {
            if let Some(s) = msg.downcast_ref::<&str>() {
                self.0.push((*s).to_string());
            }
            None
        }

        fn view(&self) -> String {
            self.0.join(",")
        }
    }

    #[test]
    fn options_default() {
        let opts = ProgramOptions::default();
        assert!(!opts.alt_screen);
        assert!(!opts.mouse);
        assert!(!opts.report_focus);
        assert_eq!(opts.fps, 60);
    }

    #[test]
    fn builder_sets_options() {
        let p = Program::new(Recorder(Vec::new()))
            .with_alt_screen()
            .with_mouse()
            .with_report_focus()
            .with_fps(30);
        assert!(p.options().alt_screen);
        assert!(p.options().mouse);
        assert!(p.options().report_focus);
        assert_eq!(p.options().fps, 30);
    }

    #[test]
    fn fps_is_clamped() {
        let p = Program::new(Recorder(Vec::new())).with_fps(500);
        assert_eq!(p.options().fps, 120);
        let p = Program::new(Recorder(Vec::new())).with_fps(0);
        assert_eq!(p.options().fps, 1);
    }

    #[test]
    fn handle_command_delivers_message() {
        let (tx, rx) = mpsc::channel();
        handle_command(Cmd::new(|| Message::new("done")), tx);
        let msg = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert_eq!(msg.downcast::<&str>().unwrap(), "done");
    }

    #[test]
    fn handle_command_unpacks_batches_concurrently() {
        let (tx, rx) = mpsc::channel();
        let cmd = batch(vec![
            Some(Cmd::new(|| Message::new("a"))),
            Some(Cmd::new(|| Message::new("b"))),
            Some(Cmd::new(|| Message::new("c"))),
        ])
        .unwrap();
        handle_command(cmd, tx);

        let mut got: Vec<&str> = (0..3)
            .map(|_| {
                rx.recv_timeout(Duration::from_secs(2))
                    .unwrap()
                    .downcast::<&str>()
                    .unwrap()
            })
            .collect();
        got.sort_unstable();
        assert_eq!(got, vec!["a", "b", "c"]);
    }

    #[test]
    fn handle_command_runs_sequences_in_order() {
        let (tx, rx) = mpsc::channel();
        let cmd = crate::command::sequence(vec![
            Some(Cmd::new(|| Message::new("first"))),
            Some(Cmd::new(|| Message::new("second"))),
        ])
        .unwrap();
        handle_command(cmd, tx);

        let a = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        let b = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert_eq!(a.downcast::<&str>().unwrap(), "first");
        assert_eq!(b.downcast::<&str>().unwrap(), "second");
    }

    #[test]
    fn error_display() {
        let err = Error::RawMode {
            action: "enable",
            source: io::Error::other("nope"),
        };
        assert_eq!(err.to_string(), "failed to enable raw mode: nope");
    }
}
