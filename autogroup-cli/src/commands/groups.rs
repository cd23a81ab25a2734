use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::Path;

use autogroup_calc::GroupIdSelector;
use autogroup_calc::GroupCalculator;
use autogroup_core::{EntryId, EntryType};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

use super::{load_calculator, open_existing, title_of};

/// One franchise group as printed in the report.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct GroupReport {
    pub group_id: EntryId,
    pub title: String,
    /// `(id, title)` of every member, in the order the ids were supplied.
    pub members: Vec<(EntryId, String)>,
}

/// Group `ids` and order the groups by their representative's title
/// (case-insensitive, ties broken by group id).
pub(crate) fn build_report<S: GroupIdSelector>(
    calc: &GroupCalculator<S>,
    ids: &[EntryId],
    titles: &HashMap<EntryId, String>,
) -> Vec<GroupReport> {
    let mut report: Vec<GroupReport> = calc
        .group_all(ids.iter().copied())
        .into_iter()
        .map(|(group_id, members)| GroupReport {
            group_id,
            title: title_of(titles, group_id),
            members: members
                .into_iter()
                .map(|id| (id, title_of(titles, id)))
                .collect(),
        })
        .collect();

    report.sort_by(|a, b| compare_titles(&a.title, &b.title).then(a.group_id.cmp(&b.group_id)));
    report
}

fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

pub(crate) fn run_groups(
    db_path: &Path,
    all: bool,
    eager: bool,
    prefer_type: Option<EntryType>,
) -> Result<(), CliError> {
    let conn = open_existing(db_path)?;
    let calc = load_calculator(&conn, prefer_type, eager)?;

    let titles = autogroup_db::load_main_titles(&conn)
        .map_err(|e| CliError::database(format!("Failed to load titles: {}", e)))?;
    let ids = if all {
        autogroup_db::load_all_entry_ids(&conn)
    } else {
        autogroup_db::load_series_entry_ids(&conn)
    }
    .map_err(|e| CliError::database(format!("Failed to load entry ids: {}", e)))?;

    if ids.is_empty() {
        if all {
            log::warn!("The catalog has no entries.");
        } else {
            log::warn!("No series found. Use --all to group every catalog entry.");
        }
        return Ok(());
    }

    let report = build_report(&calc, &ids, &titles);
    for group in &report {
        log::info!("{}", group.title.if_supports_color(Stdout, |t| t.bold()));
        for (id, title) in &group.members {
            log::info!("\t[{}] {}", id, title);
        }
        crate::log_blank();
    }

    log::debug!(
        "{} entries in {} groups ({} entries resolved)",
        ids.len(),
        report.len(),
        calc.cached_count()
    );
    Ok(())
}
