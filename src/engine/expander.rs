//! Fixed-point expansion of boilerplates.

use crate::error::{EzbpError, Result};
use crate::store::TemplateStore;

use super::token::{self, PromptSpec, Reference};
use super::Interaction;

/// Result of rewriting the first token of a text.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    /// No token left.
    Done,
    /// One token was replaced.
    Rewritten { text: String, inclusion: bool },
}

/// Expands stored boilerplates.
///
/// Each round finds the first `[[name]]` or `{{...}}` token, replaces just
/// that span and scans again from the start. The text is final when no token
/// is left or a round leaves it unchanged. Inclusions are capped at
/// [`max_inclusions`](Self::with_max_inclusions); going past the cap is
/// reported as [`EzbpError::CyclicReference`].
///
/// # Example
///
/// ```
/// use ezbp::engine::Expander;
/// use ezbp::store::MemoryStore;
/// use ezbp::ui::MockUI;
///
/// let store = MemoryStore::from_pairs([
///     ("sig", "-- {{name}}"),
///     ("mail", "Thanks!\n[[sig]]"),
/// ]);
/// let mut ui = MockUI::new();
/// ui.set_text("name", "Ada");
///
/// let mut expander = Expander::new(store);
/// assert_eq!(expander.expand("mail", &mut ui).unwrap(), "Thanks!\n-- Ada");
/// ```
#[derive(Debug)]
pub struct Expander<S> {
    store: S,
    max_inclusions: usize,
}

impl<S: TemplateStore> Expander<S> {
    /// Default inclusion cap.
    pub const DEFAULT_MAX_INCLUSIONS: usize = 1000;

    /// Create an expander over `store`.
    pub fn new(store: S) -> Self {
        Self {
            store,
            max_inclusions: Self::DEFAULT_MAX_INCLUSIONS,
        }
    }

    /// Set the inclusion cap.
    pub fn with_max_inclusions(mut self, max_inclusions: usize) -> Self {
        self.max_inclusions = max_inclusions;
        self
    }

    /// The inclusion cap.
    pub fn max_inclusions(&self) -> usize {
        self.max_inclusions
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Expand the boilerplate called `name`.
    ///
    /// On success the usage count of `name` is bumped once. A failure to
    /// record usage is logged and does not fail the expansion. Any other
    /// failure aborts without partial output.
    pub fn expand<I: Interaction + ?Sized>(&mut self, name: &str, ui: &mut I) -> Result<String> {
        let body = self
            .store
            .lookup(name)
            .ok_or_else(|| EzbpError::TemplateNotFound {
                name: name.to_string(),
            })?;

        tracing::debug!("Expanding '{}'", name);
        let text = self.resolve(name, body, ui)?;

        if let Err(e) = self.store.increment_usage(name) {
            tracing::warn!("Could not record usage of '{}': {}", name, e);
        }

        Ok(text)
    }

    /// Rewrite the first token of `text`, or return it unchanged if it has none.
    pub fn expand_once<I: Interaction + ?Sized>(&self, text: &str, ui: &mut I) -> Result<String> {
        match self.step(text, ui)? {
            Step::Done => Ok(text.to_string()),
            Step::Rewritten { text, .. } => Ok(text),
        }
    }

    fn resolve<I: Interaction + ?Sized>(
        &self,
        name: &str,
        body: String,
        ui: &mut I,
    ) -> Result<String> {
        let mut current = body;
        let mut inclusions = 0usize;

        loop {
            let (next, inclusion) = match self.step(&current, ui)? {
                Step::Done => return Ok(current),
                Step::Rewritten { text, inclusion } => (text, inclusion),
            };

            if inclusion {
                inclusions += 1;
                if inclusions > self.max_inclusions {
                    return Err(EzbpError::CyclicReference {
                        name: name.to_string(),
                        inclusions,
                    });
                }
            }

            if next == current {
                tracing::debug!("Substitution left '{}' unchanged, stopping", name);
                return Ok(current);
            }
            current = next;
        }
    }

    fn step<I: Interaction + ?Sized>(&self, text: &str, ui: &mut I) -> Result<Step> {
        let Some(found) = token::find_first(text) else {
            return Ok(Step::Done);
        };

        let (replacement, inclusion) = match &found.reference {
            Reference::Include { name } => {
                let body =
                    self.store
                        .lookup(name)
                        .ok_or_else(|| EzbpError::ReferencedTemplateNotFound {
                            name: name.to_string(),
                        })?;
                tracing::debug!("Including '{}'", name);
                (body, true)
            }
            Reference::Prompt(PromptSpec::Text { label }) => (ui.prompt_text(label)?, false),
            Reference::Prompt(PromptSpec::Choice { label, choices }) => {
                let choices: Vec<String> = choices.iter().map(|c| c.to_string()).collect();
                (ui.select_one(label, &choices)?, false)
            }
        };

        Ok(Step::Rewritten {
            text: token::substitute(text, found.span, &replacement),
            inclusion,
        })
    }
}
