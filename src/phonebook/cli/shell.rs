//! Interactive menu: list, add, edit, search, quit.
//!
//! Reads from any `BufRead` and writes to any `Write`, so the same loop runs against a
//! terminal or a test buffer. Operation errors are printed and the menu comes back; only
//! I/O errors on the streams themselves end the loop. EOF quits.

use super::print::{write_entries, write_error, write_messages, write_page_footer};
use phonebook::api::PhonebookApi;
use phonebook::model::{Entry, EntryField};
use phonebook::store::RecordStore;
use std::io::{self, BufRead, Write};

const MENU: &str = "\
1. List entries
2. Add entry
3. Edit entry
4. Search entries
5. Quit";

enum Flow {
    Continue,
    Quit,
}

pub struct Shell<'a, S: RecordStore, R: BufRead, W: Write> {
    api: &'a mut PhonebookApi<S>,
    page_size: usize,
    input: R,
    output: W,
}

impl<'a, S: RecordStore, R: BufRead, W: Write> Shell<'a, S, R, W> {
    pub fn new(api: &'a mut PhonebookApi<S>, page_size: usize, input: R, output: W) -> Self {
        Self {
            api,
            page_size,
            input,
            output,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt("Choose an action: ")? else {
                break;
            };
            let flow = match choice.trim() {
                "1" => self.list()?,
                "2" => self.add()?,
                "3" => self.edit()?,
                "4" => self.search()?,
                "5" => Flow::Quit,
                other => {
                    writeln!(self.output, "Invalid choice: {}", other)?;
                    Flow::Continue
                }
            };
            if let Flow::Quit = flow {
                break;
            }
        }
        self.output.flush()
    }

    /// Prints `label` and reads one line without its line ending. `None` on EOF.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Reads a number. `Ok(None)` means EOF or a bad number (already reported).
    fn prompt_number(&mut self, label: &str) -> io::Result<Option<i64>> {
        let Some(text) = self.prompt(label)? else {
            return Ok(None);
        };
        match text.trim().parse::<i64>() {
            Ok(n) => Ok(Some(n)),
            Err(_) => {
                writeln!(self.output, "Invalid number: {}", text.trim())?;
                Ok(None)
            }
        }
    }

    fn prompt_entry(&mut self) -> io::Result<Option<Entry>> {
        let mut entry = Entry::default();
        for field in EntryField::ALL {
            let Some(value) = self.prompt(&format!("{}: ", field.label()))? else {
                return Ok(None);
            };
            entry.set(field, value);
        }
        Ok(Some(entry))
    }

    fn list(&mut self) -> io::Result<Flow> {
        let Some(page) = self.prompt_number("Page number: ")? else {
            return Ok(Flow::Continue);
        };
        match self.api.list_entries(page, self.page_size) {
            Ok(result) => {
                write_entries(&mut self.output, &result.listed_entries)?;
                if let Some(info) = &result.page {
                    write_page_footer(&mut self.output, info)?;
                }
            }
            Err(e) => write_error(&mut self.output, &e)?,
        }
        Ok(Flow::Continue)
    }

    fn add(&mut self) -> io::Result<Flow> {
        let Some(entry) = self.prompt_entry()? else {
            return Ok(Flow::Quit);
        };
        match self.api.add_entry(entry) {
            Ok(result) => write_messages(&mut self.output, &result.messages)?,
            Err(e) => write_error(&mut self.output, &e)?,
        }
        Ok(Flow::Continue)
    }

    fn edit(&mut self) -> io::Result<Flow> {
        let Some(position) = self.prompt_number("Position to edit: ")? else {
            return Ok(Flow::Continue);
        };
        let current = match self.api.view_entry(position) {
            Ok(mut result) => result.listed_entries.remove(0),
            Err(e) => {
                write_error(&mut self.output, &e)?;
                return Ok(Flow::Continue);
            }
        };
        writeln!(
            self.output,
            "Editing entry {}: {}",
            current.index,
            current.entry.full_name()
        )?;

        let Some(entry) = self.prompt_entry()? else {
            return Ok(Flow::Quit);
        };
        match self.api.edit_entry(position, entry) {
            Ok(result) => write_messages(&mut self.output, &result.messages)?,
            Err(e) => write_error(&mut self.output, &e)?,
        }
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> io::Result<Flow> {
        let Some(query) = self.prompt("Search for: ")? else {
            return Ok(Flow::Quit);
        };
        match self.api.search_entries(&query) {
            Ok(result) => {
                if !result.listed_entries.is_empty() {
                    writeln!(self.output, "Search results:")?;
                }
                write_entries(&mut self.output, &result.listed_entries)?;
            }
            Err(e) => write_error(&mut self.output, &e)?,
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonebook::api::PhonebookPaths;
    use phonebook::store::memory::InMemoryStore;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn api() -> PhonebookApi<InMemoryStore> {
        let paths = PhonebookPaths {
            store_file: PathBuf::from("unused.json"),
            config_dir: PathBuf::from("unused"),
        };
        PhonebookApi::new(InMemoryStore::new(), paths)
    }

    fn run_script(api: &mut PhonebookApi<InMemoryStore>, script: &str) -> String {
        colored::control::set_override(false);
        let mut output = Vec::new();
        Shell::new(api, 5, Cursor::new(script.as_bytes()), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    const ADD_SMITH: &str = "2\nSmith\nAna\n\nAcme\n555-0100\n555-0101\n";

    #[test]
    fn add_then_list() {
        let mut api = api();
        let out = run_script(&mut api, &format!("{}1\n1\n5\n", ADD_SMITH));

        assert!(out.contains("Entry added (1): Smith Ana"));
        assert!(out.contains("1. Smith Ana\n   Organization: Acme"));
        assert!(out.contains("Page 1 of 1 (1 entry)"));
        assert_eq!(api.store().load().unwrap().len(), 1);
    }

    #[test]
    fn edit_shows_current_entry_then_replaces_it() {
        let mut api = api();
        let script = format!(
            "{}3\n1\nSmith\nAna\n\nGlobex\n555-0100\n555-0101\n4\nglobex\n5\n",
            ADD_SMITH
        );
        let out = run_script(&mut api, &script);

        assert!(out.contains("Editing entry 1: Smith Ana"));
        assert!(out.contains("Entry updated (1)"));
        assert!(out.contains("Search results:\n1. Smith Ana"));
        assert_eq!(api.store().load().unwrap()[0].organization, "Globex");
    }

    #[test]
    fn errors_return_to_menu() {
        let mut api = api();
        let out = run_script(&mut api, "3\n4\n1\n0\n1\nabc\n9\n5\n");

        assert!(out.contains("Invalid position 4 (directory has 0 entries)"));
        assert!(out.contains("Invalid page 0: pages start at 1"));
        assert!(out.contains("Invalid number: abc"));
        assert!(out.contains("Invalid choice: 9"));
        assert_eq!(api.store().saves(), 0);
    }

    #[test]
    fn search_without_matches() {
        let mut api = api();
        let out = run_script(&mut api, "4\nnobody\n5\n");
        assert!(out.contains("No entries found."));
        assert!(!out.contains("Search results:"));
    }

    #[test]
    fn eof_mid_entry_adds_nothing() {
        let mut api = api();
        run_script(&mut api, "2\nSmith\nAna\n");
        assert_eq!(api.store().saves(), 0);
    }

    #[test]
    fn eof_at_menu_quits() {
        let mut api = api();
        let out = run_script(&mut api, "");
        assert!(out.starts_with(MENU));
    }
}
