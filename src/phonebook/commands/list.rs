use crate::commands::CmdResult;
use crate::error::{PhonebookError, Result};
use crate::index::{number_from, PageInfo};
use crate::store::RecordStore;

/// Returns page `page` (1-based) of `page_size` entries, each numbered by its position.
///
/// Pages past the end are empty, not errors.
pub fn run<S: RecordStore>(store: &S, page: i64, page_size: usize) -> Result<CmdResult> {
    if page_size == 0 {
        return Err(PhonebookError::InvalidPageSize(page_size));
    }
    let page_number = usize::try_from(page)
        .ok()
        .filter(|p| *p >= 1)
        .ok_or(PhonebookError::InvalidPage(page))?;

    let directory = store.load()?;
    let total = directory.len();
    let info = PageInfo {
        page: page_number,
        page_size,
        total,
    };

    let start = match (page_number - 1).checked_mul(page_size) {
        Some(start) if start < total => start,
        _ => return Ok(CmdResult::default().with_page(info)),
    };
    let end = start.saturating_add(page_size).min(total);

    let listed = number_from(directory[start..end].iter().cloned(), start + 1);
    Ok(CmdResult::default()
        .with_listed_entries(listed)
        .with_page(info))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::model::Entry;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn positions(result: &CmdResult) -> Vec<usize> {
        result.listed_entries.iter().map(|de| de.index).collect()
    }

    #[test]
    fn first_page_after_single_add() {
        let mut store = InMemoryStore::new();
        let entry = Entry::new("Smith", "Ana", "", "Acme", "555-0100", "555-0101");
        add::run(&mut store, entry.clone()).unwrap();

        let result = run(&store, 1, 5).unwrap();
        assert_eq!(result.listed_entries.len(), 1);
        assert_eq!(result.listed_entries[0].index, 1);
        assert_eq!(result.listed_entries[0].entry, entry);
    }

    #[test]
    fn second_page_is_clipped_to_directory() {
        let store = StoreFixture::new().with_entries(7).store;

        let result = run(&store, 2, 5).unwrap();
        assert_eq!(positions(&result), vec![6, 7]);
        assert_eq!(result.listed_entries[0].entry.last_name, "Last6");
        assert_eq!(result.listed_entries[1].entry.last_name, "Last7");
        assert_eq!(
            result.page,
            Some(PageInfo {
                page: 2,
                page_size: 5,
                total: 7
            })
        );
    }

    #[test]
    fn page_past_end_is_empty() {
        let store = StoreFixture::new().with_entries(3).store;
        let result = run(&store, 2, 5).unwrap();
        assert!(result.listed_entries.is_empty());

        let result = run(&store, i64::MAX, 5).unwrap();
        assert!(result.listed_entries.is_empty());
    }

    #[test]
    fn empty_directory_lists_nothing() {
        let store = InMemoryStore::new();
        let result = run(&store, 1, 5).unwrap();
        assert!(result.listed_entries.is_empty());
        assert_eq!(result.page.unwrap().total, 0);
    }

    #[test]
    fn rejects_non_positive_pages() {
        let store = StoreFixture::new().with_entries(3).store;
        for page in [0, -1, -100] {
            let err = run(&store, page, 5).unwrap_err();
            assert!(matches!(err, PhonebookError::InvalidPage(p) if p == page));
        }
    }

    #[test]
    fn rejects_zero_page_size() {
        let store = InMemoryStore::new();
        assert!(matches!(
            run(&store, 1, 0),
            Err(PhonebookError::InvalidPageSize(0))
        ));
    }

    #[test]
    fn pages_reconstruct_directory_without_gaps() {
        let store = StoreFixture::new().with_entries(12).store;
        let directory = store.load().unwrap();

        for size in 1..=13 {
            let mut collected = Vec::new();
            let mut page = 1;
            loop {
                let result = run(&store, page, size).unwrap();
                if result.listed_entries.is_empty() {
                    break;
                }
                assert!(result.listed_entries.len() <= size);
                collected.extend(result.listed_entries);
                page += 1;
            }
            let expected_positions: Vec<_> = (1..=12).collect();
            assert_eq!(
                collected.iter().map(|de| de.index).collect::<Vec<_>>(),
                expected_positions
            );
            let entries: Vec<_> = collected.into_iter().map(|de| de.entry).collect();
            assert_eq!(entries, directory);
        }
    }
}
