//! # Editing Pipeline
//!
//! Coordinates the edit lifecycle: Mutate → Render → Compose
//!
//! The Pipeline manages:
//! - Applying mutations through an `EditSession`
//! - Re-rendering the resume
//! - A per-section render cache
//!
//! Each cached section remembers the document data it was rendered
//! from. Because edits share every untouched subtree, a section whose
//! data is pairwise `Node::same` as last time is reused without
//! re-rendering. Changing the template, mode, hooks, overrides or style
//! options drops the whole cache.

use crate::{EditSession, EditorError, Mutation};
use std::collections::HashMap;
use tracing::debug;
use vitae_evaluator::{
    AllowAll, EditAction, EditHooks, RenderDocument, RenderMode, RenderNode, RenderScope, Renderer,
    VariantOverrides,
};
use vitae_model::{Document, EditAddress, Node, SectionDescriptor, SectionType, StyleOptions, TemplateConfig};

struct CachedSection {
    data: Vec<Node>,
    node: Option<RenderNode>,
}

/// Cache counters since the pipeline was created
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
}

/// Manages the edit → render pipeline
pub struct Pipeline {
    renderer: Renderer,
    config: TemplateConfig,
    mode: RenderMode,
    overrides: VariantOverrides,
    hooks: Box<dyn EditHooks>,
    cache: HashMap<(SectionType, String), CachedSection>,
    cache_options: Option<StyleOptions>,
    last_output: Option<RenderDocument>,
    stats: CacheStats,
}

/// One render through the pipeline
#[derive(Debug, Clone)]
pub struct RenderPass {
    pub output: RenderDocument,
    /// Sections rendered fresh this pass (cache misses that produced output), in render order
    pub rerendered: Vec<String>,
}

/// Result of pipeline execution
#[derive(Debug, Clone)]
pub struct PipelineResult {
    /// Pending mutation id in the session
    pub id: String,

    /// New session version
    pub version: u64,

    /// Field or list the mutation changed
    pub address: EditAddress,

    pub output: RenderDocument,

    pub rerendered: Vec<String>,
}

impl Pipeline {
    pub fn new(config: TemplateConfig, mode: RenderMode) -> Self {
        Self {
            renderer: Renderer::new(),
            config,
            mode,
            overrides: VariantOverrides::new(),
            hooks: Box::new(AllowAll),
            cache: HashMap::new(),
            cache_options: None,
            last_output: None,
            stats: CacheStats::default(),
        }
    }

    pub fn config(&self) -> &TemplateConfig {
        &self.config
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn set_config(&mut self, config: TemplateConfig) {
        self.config = config;
        self.clear_cache();
    }

    pub fn set_mode(&mut self, mode: RenderMode) {
        self.mode = mode;
        self.clear_cache();
    }

    pub fn set_overrides(&mut self, overrides: VariantOverrides) {
        self.overrides = overrides;
        self.clear_cache();
    }

    pub fn set_hooks(&mut self, hooks: Box<dyn EditHooks>) {
        self.hooks = hooks;
        self.clear_cache();
    }

    /// Render `document`, reusing cached sections whose data is unchanged
    pub fn render(&mut self, document: &Document, options: &StyleOptions) -> RenderPass {
        if self.cache_options.as_ref() != Some(options) {
            self.cache.clear();
            self.cache_options = Some(options.clone());
        }

        let renderer = &self.renderer;
        let cache = &mut self.cache;
        let stats = &mut self.stats;
        let config = self.config.with_custom_sections(document);
        let scope = RenderScope {
            config: &config,
            options,
            mode: self.mode,
            hooks: &*self.hooks,
            overrides: &self.overrides,
        };

        let plan = renderer.plan(&scope);
        let mut rerendered = Vec::new();
        let mut section = |descriptor: &SectionDescriptor| {
            let key = (descriptor.kind, descriptor.id.clone());
            let data = Renderer::section_data(document, descriptor);

            if let Some(cached) = cache.get(&key) {
                if same_data(&cached.data, &data) {
                    stats.hits += 1;
                    debug!(section = %descriptor.id, "Reusing cached section");
                    return cached.node.clone();
                }
            }

            stats.misses += 1;
            let node = renderer.render_section(document, descriptor, &scope);
            if node.is_some() {
                rerendered.push(descriptor.id.clone());
            }
            cache.insert(key, CachedSection { data, node: node.clone() });
            node
        };

        let header = section(&*plan.header);
        let main: Vec<_> = plan.columns.main.iter().filter_map(|s| section(*s)).collect();
        let sidebar: Vec<_> = plan.columns.sidebar.iter().filter_map(|s| section(*s)).collect();

        let output = renderer.compose(scope.config, header, main, sidebar);
        self.last_output = Some(output.clone());
        RenderPass { output, rerendered }
    }

    /// Render the session's current document
    pub fn full_render(&mut self, session: &EditSession) -> RenderDocument {
        self.render(session.document(), &session.style_options()).output
    }

    /// Apply a mutation through the session and re-render
    pub fn apply_mutation(&mut self, session: &mut EditSession, mutation: Mutation) -> Result<PipelineResult, EditorError> {
        let applied = session.apply(mutation)?;
        let pass = self.render(&applied.document, &session.style_options());

        Ok(PipelineResult {
            id: applied.id,
            version: applied.version,
            address: applied.address,
            output: pass.output,
            rerendered: pass.rerendered,
        })
    }

    /// Apply a render-tree edit action through the session and re-render
    pub fn dispatch(&mut self, session: &mut EditSession, action: &EditAction, payload: Node) -> Result<PipelineResult, EditorError> {
        if !self.hooks.allow(action) {
            return Err(EditorError::NotEditable(action.address().clone()));
        }
        let applied = session.dispatch(action, payload)?;
        let pass = self.render(&applied.document, &session.style_options());

        Ok(PipelineResult {
            id: applied.id,
            version: applied.version,
            address: applied.address,
            output: pass.output,
            rerendered: pass.rerendered,
        })
    }

    pub fn last_output(&self) -> Option<&RenderDocument> {
        self.last_output.as_ref()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Force a full re-render on the next pass
    pub fn clear_cache(&mut self) {
        self.cache.clear();
        self.cache_options = None;
    }
}

fn same_data(a: &[Node], b: &[Node]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| Node::same(x, y))
}
