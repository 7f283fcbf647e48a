//! Engine for a button-driven pocket calculator.
//!
//! The UI layer owns rendering and the button grid; it maps each tap to a
//! [`Key`], hands it to [`Calculator::handle_key`] and displays the returned
//! string. The engine never errors: bad numeric input falls back to zero and
//! division by zero shows "0".

pub mod config;
pub mod engine;
pub mod key;

pub use config::Config;
pub use engine::Calculator;
pub use key::{Key, Operator};
