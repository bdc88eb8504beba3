// Demo table and component configs
//
// Every registry slug should have an entry in `builtin_demos`. The static
// audit reads this file as text: keep each `table.insert("<slug>", ...)` call
// inside `builtin_demos` with the slug as a string literal.

use crate::components::{Badge, Button, DraftPromotion, ExampleCard, StatTile};
use crate::render::RenderTree;
use crate::validator::{safe_renderer, ComponentConfigs, DemoConfig};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Zero-argument producer of a demo instance
pub type DemoRenderer = Box<dyn Fn() -> RenderTree + Send + Sync>;

/// Demo renderers keyed by slug
#[derive(Default)]
pub struct DemoTable {
    renderers: BTreeMap<String, DemoRenderer>,
}

impl DemoTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        slug: &str,
        renderer: impl Fn() -> RenderTree + Send + Sync + 'static,
    ) {
        self.renderers.insert(slug.to_string(), Box::new(renderer));
    }

    pub fn get(&self, slug: &str) -> Option<&DemoRenderer> {
        self.renderers.get(slug)
    }

    /// Implemented slugs, sorted
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.renderers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }
}

impl std::fmt::Debug for DemoTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.renderers.keys()).finish()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Built-in configs
// ─────────────────────────────────────────────────────────────────────────────

fn button_config() -> DemoConfig {
    DemoConfig::new(Arc::new(Button)).with_fallback("Button failed to render.")
}

fn badge_config() -> DemoConfig {
    DemoConfig::new(Arc::new(Badge)).with_fallback("Badge failed to render.")
}

fn stat_tile_config() -> DemoConfig {
    DemoConfig::new(Arc::new(StatTile)).with_fallback("Stat Tile failed to render.")
}

fn example_card_config() -> DemoConfig {
    DemoConfig::new(Arc::new(ExampleCard)).with_fallback("ExampleCard failed to render.")
}

fn draft_promotion_config() -> DemoConfig {
    DemoConfig::new(Arc::new(DraftPromotion))
        .with_fallback("Draft promotion walkthrough failed to render.")
}

/// Demo configs validated at startup, keyed by slug
pub fn builtin_configs() -> ComponentConfigs {
    [
        ("button", button_config()),
        ("badge", badge_config()),
        ("stat-tile", stat_tile_config()),
        ("example-card", example_card_config()),
        ("draft-promotion", draft_promotion_config()),
    ]
    .into_iter()
    .map(|(slug, config)| (slug.to_string(), config))
    .collect()
}

/// Demo renderers served by the showcase
pub fn builtin_demos() -> DemoTable {
    let mut table = DemoTable::new();
    table.insert("button", safe_renderer(button_config()));
    table.insert("badge", safe_renderer(badge_config()));
    table.insert("stat-tile", safe_renderer(stat_tile_config()));
    table.insert("example-card", safe_renderer(example_card_config()));
    table.insert("draft-promotion", safe_renderer(draft_promotion_config()));
    table
}
