//! Commands for side effects.
//!
//! Commands are lazy IO operations that produce messages; they run on
//! spawned threads so the update function stays pure and non-blocking.
//! [`batch`] runs commands concurrently with no ordering guarantee;
//! [`sequence`] runs them one after another.

use std::time::{Duration, Instant};

use crate::message::{BatchMsg, Message, QuitMsg, SequenceMsg};

/// A command that produces a message when executed.
///
/// Commands do not execute until the program runs them, which keeps
/// update functions free of side effects.
///
/// # Example
///
/// ```rust
/// use teampick_tui::{Cmd, Message};
///
/// struct Loaded(Vec<String>);
///
/// fn load() -> Cmd {
///     Cmd::new(|| Message::new(Loaded(vec!["bulbasaur".into()])))
/// }
/// ```
pub struct Cmd(Box<dyn FnOnce() -> Option<Message> + Send + 'static>);

impl Cmd {
    /// Create a new command from a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce() -> Message + Send + 'static,
    {
        Self(Box::new(move || Some(f())))
    }

    /// Create a command that may not produce a message.
    pub fn new_optional<F>(f: F) -> Self
    where
        F: FnOnce() -> Option<Message> + Send + 'static,
    {
        Self(Box::new(f))
    }

    /// Create an empty command that does nothing.
    #[must_use]
    pub fn none() -> Option<Self> {
        None
    }

    /// Execute the command and return the resulting message.
    pub fn execute(self) -> Option<Message> {
        (self.0)()
    }
}

/// Batch multiple commands to run concurrently.
///
/// Commands in a batch run in parallel with no ordering guarantee between
/// them. `None` entries are dropped.
pub fn batch(cmds: Vec<Option<Cmd>>) -> Option<Cmd> {
    let valid: Vec<Cmd> = cmds.into_iter().flatten().collect();

    match valid.len() {
        0 => None,
        1 => valid.into_iter().next(),
        _ => Some(Cmd::new_optional(move || Some(Message::new(BatchMsg(valid))))),
    }
}

/// Sequence commands to run one at a time, in order.
pub fn sequence(cmds: Vec<Option<Cmd>>) -> Option<Cmd> {
    let valid: Vec<Cmd> = cmds.into_iter().flatten().collect();

    match valid.len() {
        0 => None,
        1 => valid.into_iter().next(),
        _ => Some(Cmd::new_optional(move || {
            Some(Message::new(SequenceMsg(valid)))
        })),
    }
}

/// Command that signals the program to quit.
#[must_use]
pub fn quit() -> Cmd {
    Cmd::new(|| Message::new(QuitMsg))
}

/// Command that produces a message after a delay.
///
/// The timer runs for the full duration from when the command is executed.
pub fn tick<F>(duration: Duration, f: F) -> Cmd
where
    F: FnOnce(Instant) -> Message + Send + 'static,
{
    Cmd::new(move || {
        std::thread::sleep(duration);
        f(Instant::now())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cmd_produces_message() {
        let cmd = Cmd::new(|| Message::new(42i32));
        assert_eq!(cmd.execute().unwrap().downcast::<i32>().unwrap(), 42);
    }

    #[test]
    fn cmd_optional_can_be_silent() {
        let cmd = Cmd::new_optional(|| None);
        assert!(cmd.execute().is_none());
    }

    #[test]
    fn cmd_none_is_none() {
        assert!(Cmd::none().is_none());
    }

    #[test]
    fn batch_empty_is_none() {
        assert!(batch(vec![]).is_none());
        assert!(batch(vec![None, None]).is_none());
    }

    #[test]
    fn batch_single_unwraps_to_inner() {
        let cmd = batch(vec![Some(Cmd::new(|| Message::new("only")))]).unwrap();
        assert_eq!(cmd.execute().unwrap().downcast::<&str>().unwrap(), "only");
    }

    #[test]
    fn batch_many_wraps_in_envelope() {
        let cmd = batch(vec![
            Some(Cmd::new(|| Message::new(1i32))),
            Some(Cmd::new(|| Message::new(2i32))),
        ])
        .unwrap();
        assert!(cmd.execute().unwrap().is::<crate::message::BatchMsg>());
    }

    #[test]
    fn sequence_many_wraps_in_envelope() {
        let cmd = sequence(vec![
            Some(Cmd::new(|| Message::new(1i32))),
            Some(Cmd::new(|| Message::new(2i32))),
        ])
        .unwrap();
        assert!(cmd.execute().unwrap().is::<crate::message::SequenceMsg>());
    }

    #[test]
    fn quit_produces_quit_msg() {
        assert!(quit().execute().unwrap().is::<QuitMsg>());
    }
}
