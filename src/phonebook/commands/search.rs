use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::number_from;
use crate::store::RecordStore;

/// Case-insensitive substring search over all six fields.
///
/// Matches keep directory order and are numbered 1, 2, 3... regardless of position.
/// An empty query matches everything.
pub fn run<S: RecordStore>(store: &S, query: &str) -> Result<CmdResult> {
    let directory = store.load()?;
    let query_lower = query.to_lowercase();

    let matches: Vec<_> = directory
        .into_iter()
        .filter(|entry| entry.matches_lowercase(&query_lower))
        .collect();
    tracing::debug!("Search {:?} matched {} entries", query, matches.len());

    Ok(CmdResult::default().with_listed_entries(number_from(matches, 1)))
}
