//! The presentation session state machine

mod controller;

pub use controller::SessionController;
