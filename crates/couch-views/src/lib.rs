//! Couch View Selection
//!
//! One screen is presented at a time: the home screen, the anime gallery,
//! or the embedded browser. Switching is unconditional; any lifecycle
//! work tied to entering or leaving a view belongs to the shell.

mod navigator;
mod state;

pub use navigator::ViewNavigator;
pub use state::ViewState;
