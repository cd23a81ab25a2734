use std::path::Path;

use autogroup_core::{EntryId, EntryType};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

use super::{load_calculator, open_existing, title_of};

/// Print the group id and full membership for each requested entry.
pub(crate) fn run_lookup(
    db_path: &Path,
    ids: &[EntryId],
    prefer_type: Option<EntryType>,
) -> Result<(), CliError> {
    let conn = open_existing(db_path)?;
    let calc = load_calculator(&conn, prefer_type, false)?;
    let titles = autogroup_db::load_main_titles(&conn)
        .map_err(|e| CliError::database(format!("Failed to load titles: {}", e)))?;

    for (i, &id) in ids.iter().enumerate() {
        if i > 0 {
            crate::log_blank();
        }

        let group = calc.get_group(id);
        if !calc.graph().contains(id) {
            log::warn!("Entry {} has no relations; it forms its own group", id);
        }

        log::info!(
            "{} [{}] {}",
            "Entry".if_supports_color(Stdout, |t| t.bold()),
            id,
            title_of(&titles, id)
        );
        log::info!(
            "{} [{}] {}",
            "Group".if_supports_color(Stdout, |t| t.bold()),
            group,
            title_of(&titles, group)
        );

        let members = calc.group_members(id);
        log::info!("  {} members:", members.len());
        for member in members.iter() {
            let marker = if member == id { "*" } else { " " };
            log::info!("  {}\t[{}] {}", marker, member, title_of(&titles, member));
        }
    }
    Ok(())
}
