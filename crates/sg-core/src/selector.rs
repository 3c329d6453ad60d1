//! Selection of the migrations that make up the schema at a given version

use crate::config::MergeOrder;
use crate::migration::MigrationFile;

/// Pick the `up` migrations with `version <= target_version`.
///
/// With [`MergeOrder::Version`] the result is stably sorted by version, so
/// files sharing a version keep their catalog order. With
/// [`MergeOrder::Listing`] the catalog order is kept as-is, which only
/// matches version order when names sort lexicographically by version
/// (e.g. zero-padded or fixed-width timestamps).
///
/// An empty result is not an error.
pub fn select_up_to(
    catalog: &[MigrationFile],
    target_version: u64,
    order: MergeOrder,
) -> Vec<MigrationFile> {
    let mut selected: Vec<MigrationFile> = catalog
        .iter()
        .filter(|file| file.is_up() && file.version <= target_version)
        .cloned()
        .collect();

    if order == MergeOrder::Version {
        selected.sort_by_key(|file| file.version);
    }

    selected
}

#[cfg(test)]
#[path = "selector_test.rs"]
mod tests;
