//! Prompt Loader
//!
//! Loads prompt templates from an override directory or falls back to the
//! embedded defaults.

use std::path::{Path, PathBuf};

use eyre::{Result, eyre};
use handlebars::Handlebars;
use serde::Serialize;
use tracing::debug;

use super::{build_context, embedded};
use crate::state::DomainState;

/// Name of the assistant persona template
pub const PERSONA_TEMPLATE: &str = "nexus-core";

/// Context for rendering prompt templates
#[derive(Debug, Clone, Serialize)]
pub struct PromptContext {
    /// Output of [`build_context`]
    pub state_summary: String,
    /// Whether a user is signed in
    pub has_user: bool,
}

impl PromptContext {
    pub fn from_state(state: &DomainState) -> Self {
        Self {
            state_summary: build_context(state),
            has_user: state.current_user.is_some(),
        }
    }
}

/// Loads and renders prompt templates
pub struct PromptLoader {
    hbs: Handlebars<'static>,
    /// Override directory (e.g., `.nexus/prompts/`)
    override_dir: Option<PathBuf>,
}

impl PromptLoader {
    /// Create a loader that looks for overrides under `{root}/.nexus/prompts/`
    pub fn new(root: impl AsRef<Path>) -> Self {
        let override_dir = root.as_ref().join(".nexus/prompts");
        Self {
            hbs: Self::engine(),
            override_dir: if override_dir.exists() { Some(override_dir) } else { None },
        }
    }

    /// Create a loader that only uses embedded prompts
    pub fn embedded_only() -> Self {
        Self {
            hbs: Self::engine(),
            override_dir: None,
        }
    }

    fn engine() -> Handlebars<'static> {
        let mut hbs = Handlebars::new();
        // Plain-text output, no HTML escaping
        hbs.register_escape_fn(handlebars::no_escape);
        hbs
    }

    /// Load a template by name
    ///
    /// Checks `{override_dir}/{name}.pmt` first, then the embedded set.
    fn load_template(&self, name: &str) -> Result<String> {
        if let Some(ref dir) = self.override_dir {
            let path = dir.join(format!("{}.pmt", name));
            if path.exists() {
                debug!("Loading prompt from override: {:?}", path);
                return std::fs::read_to_string(&path)
                    .map_err(|e| eyre!("Failed to read prompt override {}: {}", path.display(), e));
            }
        }

        if let Some(content) = embedded::get_embedded(name) {
            debug!("Using embedded prompt: {}", name);
            return Ok(content.to_string());
        }

        Err(eyre!("Prompt template not found: {}", name))
    }

    /// Render a template with the given context
    pub fn render(&self, template_name: &str, context: &PromptContext) -> Result<String> {
        let template = self.load_template(template_name)?;
        debug!(%template_name, has_user = context.has_user, "render: called");

        self.hbs
            .render_template(&template, context)
            .map_err(|e| eyre!("Failed to render template {}: {}", template_name, e))
    }

    /// Render the assistant persona for a state snapshot
    pub fn system_preamble(&self, state: &DomainState) -> Result<String> {
        self.render(PERSONA_TEMPLATE, &PromptContext::from_state(state))
    }
}
