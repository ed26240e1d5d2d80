use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayEntry;
use crate::model::Entry;
use crate::store::RecordStore;

use super::helpers::resolve_position;

/// Replaces all six fields of the entry at `position`.
///
/// An out-of-range position fails before anything is written.
pub fn run<S: RecordStore>(store: &mut S, position: i64, entry: Entry) -> Result<CmdResult> {
    let mut directory = store.load()?;
    let slot = resolve_position(position, directory.len()).inspect_err(|_| {
        tracing::warn!(
            "Refusing edit at position {} of {}",
            position,
            directory.len()
        );
    })?;

    directory[slot] = entry.clone();
    store.save(&directory)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Entry updated ({}): {}",
        position,
        entry.full_name()
    )));
    Ok(result.with_affected_entries(vec![DisplayEntry::new(slot + 1, entry)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PhonebookError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn replaces_only_the_target_position() {
        let mut store = StoreFixture::new().with_entries(3).store;
        let before = store.load().unwrap();
        let replacement = Entry::new("New", "Name", "M", "Globex", "1", "2");

        let result = run(&mut store, 2, replacement.clone()).unwrap();

        let after = store.load().unwrap();
        assert_eq!(after.len(), 3);
        assert_eq!(after[0], before[0]);
        assert_eq!(after[1], replacement);
        assert_eq!(after[2], before[2]);
        assert_eq!(result.affected_entries[0].index, 2);
    }

    #[test]
    fn out_of_range_position_writes_nothing() {
        let mut store = StoreFixture::new().with_entries(2).store;
        let before = store.load().unwrap();

        for position in [0, -1, 3] {
            let err = run(&mut store, position, Entry::default()).unwrap_err();
            assert!(matches!(err, PhonebookError::InvalidPosition { len: 2, .. }));
        }

        assert_eq!(store.saves(), 0);
        assert_eq!(store.load().unwrap(), before);
    }

    #[test]
    fn empty_directory_has_no_valid_position() {
        let mut store = StoreFixture::new().store;
        let err = run(&mut store, 1, Entry::default()).unwrap_err();
        assert!(matches!(
            err,
            PhonebookError::InvalidPosition {
                position: 1,
                len: 0
            }
        ));
    }
}
