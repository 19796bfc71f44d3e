#![no_std]

extern crate alloc;

pub use celebration::*;
pub use controller::*;
pub use dispatch::*;
pub use error::*;
pub use input::*;
pub use session::*;
pub use types::*;

pub use guessing_protocol::GameStatus;

mod celebration;
mod controller;
mod dispatch;
mod error;
mod input;
mod session;
mod types;
