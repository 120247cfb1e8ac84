#![forbid(unsafe_code)]

//! # teampick-tui
//!
//! A small Elm-architecture runtime for the teampick terminal application.
//!
//! The pieces:
//! - [`Model`]: `init`/`update`/`view` over a type-erased [`Message`]
//! - [`Cmd`]: lazy side effects that produce messages, with [`batch`] for
//!   concurrent execution and [`sequence`] for ordered execution
//! - [`KeyMsg`] / [`MouseMsg`]: input events translated from crossterm
//! - [`bind::Binding`]: user-configurable key bindings
//! - [`style::Style`]: a compact ANSI style builder for view rendering
//! - [`Program`]: terminal setup/teardown (RAII) and the event loop
//!
//! ## Example
//!
//! ```rust,ignore
//! use teampick_tui::{Cmd, Message, Model, Program};
//!
//! struct Counter(u32);
//!
//! impl Model for Counter {
//!     fn init(&self) -> Option<Cmd> {
//!         None
//!     }
//!
//!     fn update(&mut self, _msg: Message) -> Option<Cmd> {
//!         self.0 += 1;
//!         None
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("{} events", self.0)
//!     }
//! }
//!
//! let final_model = Program::new(Counter(0)).with_alt_screen().run()?;
//! ```

pub mod bind;
pub mod command;
pub mod key;
pub mod message;
pub mod mouse;
pub mod program;
pub mod style;

pub use command::{Cmd, batch, quit, sequence, tick};
pub use key::{KeyMsg, KeyType, from_crossterm_key};
pub use message::{BlurMsg, FocusMsg, InterruptMsg, Message, QuitMsg, WindowSizeMsg};
pub use mouse::{MouseAction, MouseButton, MouseMsg, from_crossterm_mouse};
pub use program::{Error, Model, Program, ProgramOptions, Result};
pub use style::{Color, Style};
