//! Document Wizard
//!
//! Drives the two-step flow from document type selection to a saved file:
//! a [`Wizard`] owns the active template choice and a [`FormController`]
//! holding the field values, which are re-validated on every change and
//! cleared whenever a different template becomes active.

mod error;
mod form;
mod wizard;

pub use error::{WizardError, WizardResult};
pub use form::{FieldView, FormController};
pub use wizard::{Wizard, WizardStep};
