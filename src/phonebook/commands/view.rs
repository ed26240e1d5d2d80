use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::DisplayEntry;
use crate::store::RecordStore;

use super::helpers::resolve_position;

pub fn run<S: RecordStore>(store: &S, position: i64) -> Result<CmdResult> {
    let mut directory = store.load()?;
    let slot = resolve_position(position, directory.len())?;
    let entry = directory.swap_remove(slot);
    Ok(CmdResult::default().with_listed_entries(vec![DisplayEntry::new(slot + 1, entry)]))
}
