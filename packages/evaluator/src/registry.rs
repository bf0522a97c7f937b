//! # Section Variant Registry
//!
//! Maps `(section type, variant id)` to a rendering strategy with one
//! lookup. Every section type owns a closed set of variants and a default;
//! an unknown id renders the default.
//!
//! Strategies are plain functions of a `SectionContext`. They render
//! entries in document order unless their `VariantInfo::reorders` says
//! otherwise.

use crate::context::SectionContext;
use crate::render_node::RenderNode;
use crate::variants;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;
use vitae_model::SectionType;

pub type Strategy = fn(&SectionContext<'_>) -> RenderNode;

#[derive(Debug, Clone, Copy)]
pub struct VariantInfo {
    pub id: &'static str,
    pub description: &'static str,
    /// Documented deviation from document order, if any
    pub reorders: Option<&'static str>,
    /// Renders something even when the section has no entries
    pub keeps_empty: bool,
    strategy: Strategy,
}

impl VariantInfo {
    pub fn new(id: &'static str, description: &'static str, strategy: Strategy) -> Self {
        Self {
            id,
            description,
            reorders: None,
            keeps_empty: false,
            strategy,
        }
    }

    pub fn reorders(mut self, rule: &'static str) -> Self {
        self.reorders = Some(rule);
        self
    }

    pub fn keeps_empty(mut self) -> Self {
        self.keeps_empty = true;
        self
    }

    pub fn render(&self, ctx: &SectionContext<'_>) -> RenderNode {
        (self.strategy)(ctx)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnknownVariant {
    #[error("No variants registered for section type '{0}'")]
    Section(SectionType),

    #[error("Unknown {kind} variant '{id}'")]
    Variant { kind: SectionType, id: String },
}

struct SectionVariants {
    default: &'static str,
    /// Registration order, for listings
    order: Vec<&'static str>,
    by_id: BTreeMap<&'static str, VariantInfo>,
}

pub struct VariantRegistry {
    sections: BTreeMap<SectionType, SectionVariants>,
}

impl VariantRegistry {
    pub fn empty() -> Self {
        Self {
            sections: BTreeMap::new(),
        }
    }

    /// Registry with every built-in variant
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(SectionType::Header, variants::header::DEFAULT, variants::header::variants());
        registry.register(SectionType::Summary, variants::summary::DEFAULT, variants::summary::variants());
        registry.register(SectionType::Experience, variants::experience::DEFAULT, variants::experience::variants());
        registry.register(SectionType::Education, variants::education::DEFAULT, variants::education::variants());
        registry.register(SectionType::Skills, variants::skills::DEFAULT, variants::skills::variants());
        registry.register(SectionType::Projects, variants::projects::DEFAULT, variants::projects::variants());
        registry.register(SectionType::Certifications, variants::certifications::DEFAULT, variants::certifications::variants());
        registry.register(SectionType::Languages, variants::languages::DEFAULT, variants::languages::variants());
        registry.register(SectionType::Awards, variants::awards::DEFAULT, variants::awards::variants());
        registry.register(SectionType::Achievements, variants::awards::DEFAULT, variants::awards::variants());
        registry.register(SectionType::Volunteer, variants::volunteer::DEFAULT, variants::volunteer::variants());
        registry.register(SectionType::Interests, variants::interests::DEFAULT, variants::interests::variants());
        registry.register(SectionType::References, variants::references::DEFAULT, variants::references::variants());
        registry.register(SectionType::Custom, variants::custom::DEFAULT, variants::custom::variants());
        registry
    }

    /// Register (or replace) the variant set of a section type.
    ///
    /// `default` must name one of `variants`.
    pub fn register(&mut self, kind: SectionType, default: &'static str, variants: Vec<VariantInfo>) {
        let order = variants.iter().map(|v| v.id).collect();
        let by_id = variants.into_iter().map(|v| (v.id, v)).collect();
        self.sections.insert(
            kind,
            SectionVariants {
                default,
                order,
                by_id,
            },
        );
    }

    pub fn resolve(&self, kind: SectionType, id: &str) -> Result<&VariantInfo, UnknownVariant> {
        let section = self
            .sections
            .get(&kind)
            .ok_or(UnknownVariant::Section(kind))?;
        section.by_id.get(id).ok_or_else(|| UnknownVariant::Variant {
            kind,
            id: id.to_string(),
        })
    }

    pub fn default_variant(&self, kind: SectionType) -> Option<&VariantInfo> {
        let section = self.sections.get(&kind)?;
        section.by_id.get(section.default)
    }

    /// Resolve `id`, falling back to the type's default when it is unknown
    pub fn resolve_or_default(&self, kind: SectionType, id: Option<&str>) -> Option<&VariantInfo> {
        match id {
            Some(id) => match self.resolve(kind, id) {
                Ok(info) => Some(info),
                Err(error) => {
                    debug!(error = %error, "Falling back to default variant");
                    self.default_variant(kind)
                }
            },
            None => self.default_variant(kind),
        }
    }

    /// Variants of a section type in registration order
    pub fn variants(&self, kind: SectionType) -> Vec<&VariantInfo> {
        self.sections
            .get(&kind)
            .map(|section| {
                section
                    .order
                    .iter()
                    .filter_map(|id| section.by_id.get(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn section_types(&self) -> impl Iterator<Item = SectionType> + '_ {
        self.sections.keys().copied()
    }

    /// Render one section body with the requested (or default) variant.
    ///
    /// Returns the variant id actually used next to the node.
    pub fn render(&self, kind: SectionType, variant_id: Option<&str>, ctx: &SectionContext<'_>) -> Option<(&'static str, RenderNode)> {
        let info = self.resolve_or_default(kind, variant_id)?;
        Some((info.id, info.render(ctx)))
    }
}

impl Default for VariantRegistry {
    fn default() -> Self {
        Self::new()
    }
}
