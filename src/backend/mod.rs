//! Backend Adapters
//!
//! `TigerStyle`: Abstract backend with simulation-first testing.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      OrmBackend Trait                        │
//! │   required: make()                                           │
//! │   optional: QueryBuilderCapable / NewModelCapable /          │
//! │             ModelDetector (probed, never assumed)            │
//! └─────────────────────────────────────────────────────────────┘
//!          ↑                     ↑                    ↑
//!          │                     │                    │
//! ┌────────┴────────┐   ┌────────┴───────┐   ┌────────┴───────┐
//! │ EloquentBackend │   │  ThinkBackend  │   │   SimBackend   │
//! │  (production)   │   │  (production)  │   │   (testing)    │
//! └─────────────────┘   └────────────────┘   └────────────────┘
//! ```
//!
//! # Simulation-First
//!
//! SimBackend counts every delegated call and toggles capabilities per
//! test, so fallback paths are verified before the production adapters.

mod eloquent;
mod sim;
mod think;
mod traits;

pub use eloquent::EloquentBackend;
pub use sim::SimBackend;
pub use think::ThinkBackend;
pub use traits::{ModelDetector, NewModelCapable, OrmBackend, QueryBuilderCapable};

/// Last `::`-separated segment of a model type name.
pub(crate) fn last_segment(name: &str) -> &str {
    name.rsplit("::").next().unwrap_or(name)
}

/// CamelCase to snake_case, for table name inference.
pub(crate) fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
