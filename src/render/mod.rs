//! HTML page rendering.
//!
//! # Data Flow
//! ```text
//! RenderContext (home / vanity / redirect)
//!     → Renderer (templates parsed once at startup)
//!     → String body, or RenderError
//! ```
//!
//! # Design Decisions
//! - Rendering is fully buffered, so a failure never yields a partial body
//! - A template that fails to parse only breaks the pages that use it
//! - Values are HTML-escaped; `/` is left alone so URLs stay readable

pub mod context;
pub mod templates;

use std::collections::HashMap;
use std::error::Error as _;
use std::fmt;

use tera::{Context, Tera};
use thiserror::Error;

pub use context::{HomeContext, RedirectContext, RenderContext, VanityContext};

/// The three pages this service can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Home,
    Vanity,
    Redirect,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 3] = [
        TemplateKind::Home,
        TemplateKind::Vanity,
        TemplateKind::Redirect,
    ];

    /// Registered template name; the `.html` suffix turns on autoescaping.
    pub fn name(&self) -> &'static str {
        match self {
            TemplateKind::Home => "home.html",
            TemplateKind::Vanity => "vanity.html",
            TemplateKind::Redirect => "redirect.html",
        }
    }

    /// Short label for logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            TemplateKind::Home => "home",
            TemplateKind::Vanity => "vanity",
            TemplateKind::Redirect => "redirect",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The template source is malformed. Nothing has been written.
    #[error("{0}")]
    Parse(String),

    /// The template could not be evaluated against its context.
    #[error("{0}")]
    Execute(String),
}

/// Source text for each template.
#[derive(Debug, Clone)]
pub struct TemplateSources {
    pub home: String,
    pub vanity: String,
    pub redirect: String,
}

impl TemplateSources {
    fn get(&self, kind: TemplateKind) -> &str {
        match kind {
            TemplateKind::Home => &self.home,
            TemplateKind::Vanity => &self.vanity,
            TemplateKind::Redirect => &self.redirect,
        }
    }
}

impl Default for TemplateSources {
    fn default() -> Self {
        Self {
            home: templates::HOME.to_string(),
            vanity: templates::VANITY.to_string(),
            redirect: templates::REDIRECT.to_string(),
        }
    }
}

/// Renders pages from parsed templates. Immutable once built.
#[derive(Debug)]
pub struct Renderer {
    tera: Tera,
    parse_errors: HashMap<TemplateKind, String>,
}

impl Renderer {
    /// Renderer over the built-in templates.
    pub fn new() -> Self {
        Self::with_sources(TemplateSources::default())
    }

    /// Parse each template independently, remembering any parse failures.
    pub fn with_sources(sources: TemplateSources) -> Self {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html"]);
        tera.set_escape_fn(escape_html);

        let mut parse_errors = HashMap::new();
        for kind in TemplateKind::ALL {
            if let Err(err) = tera.add_raw_template(kind.name(), sources.get(kind)) {
                let message = error_chain(&err);
                tracing::error!(template = %kind, error = %message, "Template failed to parse");
                parse_errors.insert(kind, message);
            }
        }

        Self { tera, parse_errors }
    }

    /// Templates that failed to parse.
    pub fn broken_templates(&self) -> Vec<TemplateKind> {
        TemplateKind::ALL
            .into_iter()
            .filter(|kind| self.parse_errors.contains_key(kind))
            .collect()
    }

    /// Render the template selected by `ctx`.
    pub fn render(&self, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
        let kind = ctx.kind();
        if let Some(message) = self.parse_errors.get(&kind) {
            return Err(RenderError::Parse(message.clone()));
        }

        let context =
            Context::from_serialize(ctx).map_err(|e| RenderError::Execute(error_chain(&e)))?;
        self.tera
            .render(kind.name(), &context)
            .map_err(|e| RenderError::Execute(error_chain(&e)))
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Tera reports the useful detail in nested sources.
fn error_chain(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}

/// HTML escaping for text and quoted attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
