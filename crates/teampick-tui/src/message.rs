//! Message types for the Elm Architecture.
//!
//! All user input, timer events, and custom events reach the model as
//! messages; they are the only way state changes.

use std::any::Any;
use std::fmt;

/// A type-erased message container.
///
/// Any `Send + 'static` type can be a message. Wrap with [`Message::new`]
/// and recover the original type with [`Message::downcast`] or
/// [`Message::downcast_ref`].
///
/// # Example
///
/// ```rust
/// use teampick_tui::Message;
///
/// struct Picked(usize);
///
/// let msg = Message::new(Picked(2));
/// assert_eq!(msg.downcast::<Picked>().unwrap().0, 2);
/// ```
pub struct Message(Box<dyn Any + Send>);

impl Message {
    /// Create a new message from any sendable type.
    pub fn new<M: Any + Send + 'static>(msg: M) -> Self {
        Self(Box::new(msg))
    }

    /// Try to downcast to a specific message type, consuming the message.
    pub fn downcast<M: Any + Send + 'static>(self) -> Option<M> {
        self.0.downcast::<M>().ok().map(|b| *b)
    }

    /// Try to get a reference to the message as a specific type.
    pub fn downcast_ref<M: Any + Send + 'static>(&self) -> Option<&M> {
        self.0.downcast_ref::<M>()
    }

    /// Check if the message is of a specific type.
    pub fn is<M: Any + Send + 'static>(&self) -> bool {
        self.0.is::<M>()
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Message").finish_non_exhaustive()
    }
}

/// Message to quit the program gracefully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuitMsg;

/// Message for Ctrl+C interrupt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterruptMsg;

/// Message containing the terminal window size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSizeMsg {
    /// Terminal width in columns.
    pub width: u16,
    /// Terminal height in rows.
    pub height: u16,
}

/// Message when the terminal gains focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusMsg;

/// Message when the terminal loses focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlurMsg;

/// Internal envelope for concurrent command execution.
pub(crate) struct BatchMsg(pub Vec<super::Cmd>);

/// Internal envelope for ordered command execution.
pub(crate) struct SequenceMsg(pub Vec<super::Cmd>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downcast_roundtrip() {
        struct Marker(i32);

        let msg = Message::new(Marker(7));
        assert!(msg.is::<Marker>());
        assert_eq!(msg.downcast::<Marker>().unwrap().0, 7);
    }

    #[test]
    fn downcast_wrong_type() {
        struct A;
        struct B;

        let msg = Message::new(A);
        assert!(!msg.is::<B>());
        assert!(msg.downcast::<B>().is_none());
    }

    #[test]
    fn downcast_ref_leaves_message_usable() {
        let msg = Message::new(WindowSizeMsg {
            width: 80,
            height: 24,
        });
        assert_eq!(msg.downcast_ref::<WindowSizeMsg>().unwrap().width, 80);
        assert!(msg.is::<WindowSizeMsg>());
    }
}
