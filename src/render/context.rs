//! Per-request view models fed to the templates.

use serde::Serialize;

use crate::registry::{PackageEntry, Registry, VcsKind};
use crate::render::TemplateKind;

/// Home page: every registered package.
#[derive(Debug, Clone, Serialize)]
pub struct HomeContext<'a> {
    pub domain: &'a str,
    pub packages: &'a [PackageEntry],
    pub count: usize,
}

impl<'a> HomeContext<'a> {
    pub fn new(domain: &'a str, registry: &'a Registry) -> Self {
        Self {
            domain,
            packages: registry.entries(),
            count: registry.len(),
        }
    }
}

/// `go get` discovery page for one package.
#[derive(Debug, Clone, Serialize)]
pub struct VanityContext<'a> {
    pub domain: &'a str,
    pub path: &'a str,
    pub repo: &'a str,
    pub vcs: VcsKind,
}

impl<'a> VanityContext<'a> {
    pub fn new(domain: &'a str, entry: &'a PackageEntry) -> Self {
        Self {
            domain,
            path: &entry.path,
            repo: &entry.repository_url,
            vcs: entry.vcs,
        }
    }
}

/// Browser redirect to the documentation viewer.
#[derive(Debug, Clone, Serialize)]
pub struct RedirectContext<'a> {
    pub domain: &'a str,
    pub path: &'a str,
}

impl<'a> RedirectContext<'a> {
    pub fn new(domain: &'a str, entry: &'a PackageEntry) -> Self {
        Self {
            domain,
            path: &entry.path,
        }
    }
}

/// One of the three page shapes; the variant selects the template.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RenderContext<'a> {
    Home(HomeContext<'a>),
    Vanity(VanityContext<'a>),
    Redirect(RedirectContext<'a>),
}

impl RenderContext<'_> {
    pub fn kind(&self) -> TemplateKind {
        match self {
            RenderContext::Home(_) => TemplateKind::Home,
            RenderContext::Vanity(_) => TemplateKind::Vanity,
            RenderContext::Redirect(_) => TemplateKind::Redirect,
        }
    }
}

impl<'a> From<HomeContext<'a>> for RenderContext<'a> {
    fn from(ctx: HomeContext<'a>) -> Self {
        RenderContext::Home(ctx)
    }
}

impl<'a> From<VanityContext<'a>> for RenderContext<'a> {
    fn from(ctx: VanityContext<'a>) -> Self {
        RenderContext::Vanity(ctx)
    }
}

impl<'a> From<RedirectContext<'a>> for RenderContext<'a> {
    fn from(ctx: RedirectContext<'a>) -> Self {
        RenderContext::Redirect(ctx)
    }
}
