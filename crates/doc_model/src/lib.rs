//! Document Model - the structure handed from template rendering to export
//!
//! A [`Document`] is an ordered list of [`Paragraph`]s, each holding styled
//! [`Run`]s. Page-level directives (forced page breaks, centered title pages,
//! heading styles) are expressed as paragraph properties so a document can be
//! serialized in a single pass.

mod document;
mod error;
mod paragraph;
mod run;
pub mod style;

pub use document::*;
pub use error::*;
pub use paragraph::*;
pub use run::*;
pub use style::*;
