use std::path::Path;

use autogroup_calc::{resolve_all, BuildStats, RelationGraph};
use autogroup_core::RelationMap;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

use super::open_existing;

/// Shape of the relation graph as shown by `autogroup stats`.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct GraphSummary {
    pub entries: usize,
    pub build: BuildStats,
    pub groups: usize,
    pub largest_group: usize,
}

pub(crate) fn summarize_graph(relations: &RelationMap) -> GraphSummary {
    let graph = RelationGraph::build(relations);
    let components = resolve_all(&graph);
    GraphSummary {
        entries: graph.entry_count(),
        build: graph.stats(),
        groups: components.len(),
        largest_group: components.iter().map(|c| c.len()).max().unwrap_or(0),
    }
}

pub(crate) fn run_stats(db_path: &Path) -> Result<(), CliError> {
    let conn = open_existing(db_path)?;

    let stats = autogroup_db::database_stats(&conn)
        .map_err(|e| CliError::database(format!("Failed to query catalog stats: {}", e)))?;

    log::info!(
        "{}",
        "Catalog Database Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Database: {}", db_path.display());
    crate::log_blank();
    log::info!("  Entries:        {:>8}", stats.entries);
    log::info!("  Relations:      {:>8}", stats.relations);
    log::info!("  Series:         {:>8}", stats.series);
    crate::log_blank();

    let relations = autogroup_db::load_relations(&conn)
        .map_err(|e| CliError::database(format!("Failed to load relations: {}", e)))?;
    let summary = summarize_graph(&relations);

    log::info!(
        "{}",
        "Relation Graph".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Related entries:{:>8}", summary.entries);
    log::info!("  Strong edges:   {:>8}", summary.build.strong_edges);
    log::info!("  Weak relations: {:>8} (ignored)", summary.build.weak_edges);
    log::info!("  Self-references:{:>8} (dropped)", summary.build.self_references);
    log::info!("  Groups:         {:>8}", summary.groups);
    log::info!("  Largest group:  {:>8}", summary.largest_group);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use autogroup_core::{Relation, RelationKind};

    #[test]
    fn summary_counts_groups_and_edges() {
        let relations = RelationMap::from_relations([
            Relation::untyped(1, 2, RelationKind::Sequel),
            Relation::untyped(2, 3, RelationKind::Sequel),
            Relation::untyped(3, 4, RelationKind::Character),
            Relation::untyped(5, 5, RelationKind::Sequel),
        ]);

        assert_eq!(
            summarize_graph(&relations),
            GraphSummary {
                entries: 4,
                build: BuildStats {
                    strong_edges: 2,
                    weak_edges: 1,
                    self_references: 1,
                },
                groups: 2,
                largest_group: 3,
            }
        );
    }

    #[test]
    fn empty_catalog_has_no_groups() {
        let summary = summarize_graph(&RelationMap::new());
        assert_eq!(summary.entries, 0);
        assert_eq!(summary.groups, 0);
        assert_eq!(summary.largest_group, 0);
    }
}
