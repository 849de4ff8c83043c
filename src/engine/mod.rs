//! Boilerplate resolution.
//!
//! [`Expander`] turns a stored boilerplate into final text by rewriting the
//! first reference token until none remain. Stored bodies come from a
//! [`TemplateStore`](crate::store::TemplateStore); values for `{{...}}`
//! tokens come from an [`Interaction`].

pub mod expander;
pub mod token;

pub use expander::Expander;
pub use token::{find_first, is_template_identifier, PromptSpec, Reference, Token};

use crate::error::Result;

/// Source of user-supplied values during expansion.
///
/// Implementations report a dismissed prompt as
/// [`EzbpError::Cancelled`](crate::error::EzbpError::Cancelled).
pub trait Interaction {
    /// Pick one of `choices`. The returned string must be one of them.
    fn select_one(&mut self, label: &str, choices: &[String]) -> Result<String>;

    /// Read free-form text. The reply is returned untrimmed.
    fn prompt_text(&mut self, label: &str) -> Result<String>;
}

impl<T: Interaction + ?Sized> Interaction for &mut T {
    fn select_one(&mut self, label: &str, choices: &[String]) -> Result<String> {
        (**self).select_one(label, choices)
    }

    fn prompt_text(&mut self, label: &str) -> Result<String> {
        (**self).prompt_text(label)
    }
}

impl<T: Interaction + ?Sized> Interaction for Box<T> {
    fn select_one(&mut self, label: &str, choices: &[String]) -> Result<String> {
        (**self).select_one(label, choices)
    }

    fn prompt_text(&mut self, label: &str) -> Result<String> {
        (**self).prompt_text(label)
    }
}
