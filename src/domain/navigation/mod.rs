//! Navigation state machines.

mod controller;
mod route;

pub use controller::{Frame, NavController, NavOptions, NavOutcome, PopTarget, PopUpTo};
pub use route::{AppRoute, Destination, TabRoute};
