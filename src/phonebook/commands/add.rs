use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayEntry;
use crate::model::Entry;
use crate::store::RecordStore;

pub fn run<S: RecordStore>(store: &mut S, entry: Entry) -> Result<CmdResult> {
    let mut directory = store.load()?;
    directory.push(entry.clone());
    store.save(&directory)?;

    let position = directory.len();
    tracing::debug!("Appended entry at position {}", position);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Entry added ({}): {}",
        position,
        entry.full_name()
    )));
    Ok(result.with_affected_entries(vec![DisplayEntry::new(position, entry)]))
}
