//! Franchise grouping over typed relations between catalog entries.
//!
//! Strong relations (sequels, side stories, alternative versions, ...) are
//! followed transitively to form components; each component is represented
//! by one entry id chosen by a [`GroupIdSelector`]. Weak relations (shared
//! characters, same setting, ...) never merge groups.

pub mod calculator;
pub mod graph;
pub mod resolver;
pub mod selector;

pub use calculator::{GroupCalculator, Resolution};
pub use graph::{BuildStats, RelationGraph};
pub use resolver::{resolve_all, resolve_component, Component};
pub use selector::{GroupIdSelector, MinimumId, PreferType};
