pub(crate) mod groups;
pub(crate) mod import;
pub(crate) mod lookup;
pub(crate) mod stats;

use std::collections::HashMap;
use std::path::Path;

use autogroup_calc::{GroupCalculator, GroupIdSelector, MinimumId, PreferType, Resolution};
use autogroup_core::{EntryId, EntryType};
use autogroup_db::Connection;

use crate::CliError;

/// Calculator with a selector chosen at runtime.
pub(crate) type Calculator = GroupCalculator<Box<dyn GroupIdSelector>>;

/// Open an existing catalog database; a missing file is an error rather
/// than a silently created empty catalog.
pub(crate) fn open_existing(db_path: &Path) -> Result<Connection, CliError> {
    if !db_path.exists() {
        return Err(CliError::database(format!(
            "No catalog database found at {}. Run 'autogroup import' to create one.",
            db_path.display()
        )));
    }
    autogroup_db::open_database(db_path)
        .map_err(|e| CliError::database(format!("Failed to open catalog database: {}", e)))
}

/// Load relations and build a calculator.
pub(crate) fn load_calculator(
    conn: &Connection,
    prefer_type: Option<EntryType>,
    eager: bool,
) -> Result<Calculator, CliError> {
    let relations = autogroup_db::load_relations(conn)
        .map_err(|e| CliError::database(format!("Failed to load relations: {}", e)))?;

    let selector: Box<dyn GroupIdSelector> = match prefer_type {
        Some(entry_type) => {
            log::debug!("Preferring {} entries as group representatives", entry_type);
            Box::new(PreferType(entry_type))
        }
        None => Box::new(MinimumId),
    };
    let resolution = if eager {
        Resolution::Eager
    } else {
        Resolution::Lazy
    };

    Ok(GroupCalculator::with_options(&relations, selector, resolution))
}

/// Title for display, with a placeholder for entries missing from the catalog.
pub(crate) fn title_of(titles: &HashMap<EntryId, String>, id: EntryId) -> String {
    titles
        .get(&id)
        .cloned()
        .unwrap_or_else(|| format!("<untitled #{}>", id))
}
