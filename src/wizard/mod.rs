//! The wizard controller.
//!
//! A [`Wizard`] holds the current step index and the draft, moves between
//! steps, and runs the record builder when the last step is completed.
//!
//! # State machine
//!
//! ```text
//! Step_0 --advance--> Step_1 --advance--> ... Step_N --advance--> Completed
//!    ^                  |
//!    +-----retreat------+        any Step_i --cancel--> Cancelled
//! ```
//!
//! Guards gate every forward move. A refused guard leaves the wizard
//! untouched and reports [`Advance::Blocked`]; it is never an error.
//! Calling any navigation method after `Completed` or `Cancelled` returns
//! [`WizardError::Finished`].

mod builder;
mod controller;
mod error;

pub use builder::WizardBuilder;
pub use controller::{Advance, FinalizePolicy, Finalizer, Wizard};
pub use error::{BuildError, WizardError};
