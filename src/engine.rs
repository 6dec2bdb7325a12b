use crate::editor::EditorBuffer;
use crate::models::{split_file_types, SnippetRecord};

/// A word character for trigger purposes: ASCII alphanumeric or underscore.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Extract the word ending exactly at `cursor`.
///
/// Scans backward from the cursor consuming word characters and stops at
/// the first non-word character or the start of the buffer. Returns the
/// word and its start offset; the word is empty when the character
/// immediately before the cursor is not a word character. A cursor that is
/// out of range or not on a character boundary also yields the empty word
/// rather than panicking.
pub fn extract_word(buffer: &str, cursor: usize) -> (&str, usize) {
    if cursor > buffer.len() || !buffer.is_char_boundary(cursor) {
        return ("", cursor);
    }

    let mut start = cursor;
    for (idx, c) in buffer[..cursor].char_indices().rev() {
        if !is_word_char(c) {
            break;
        }
        start = idx;
    }

    (&buffer[start..cursor], start)
}

/// Check whether `document_path` falls under any of the file-type patterns.
///
/// True iff the path ends with at least one pattern in the comma/space
/// delimited list. This is a plain case-sensitive suffix test, not a glob:
/// a pattern `.py` matches any path whose final bytes are `.py`. An empty
/// or blank pattern list matches no document.
pub fn match_file_type(file_types: &str, document_path: &str) -> bool {
    split_file_types(file_types).any(|pattern| document_path.ends_with(pattern))
}

/// Find the snippet to expand for `word` inside `document_path`.
///
/// Scans the set in stored order. Records whose file types do not cover
/// the document are skipped without ever comparing their trigger; among
/// the rest, the first whose trigger equals the word wins. First match in
/// stored order is the tie-break when several records share a trigger.
pub fn find_snippet<'a>(
    records: &'a [SnippetRecord],
    word: &str,
    document_path: &str,
) -> Option<&'a SnippetRecord> {
    if word.is_empty() {
        return None;
    }

    records
        .iter()
        .filter(|record| match_file_type(&record.file_types, document_path))
        .find(|record| record.trigger == word)
}

/// Replace `[start, cursor)` with the snippet text as one atomic edit.
///
/// The delete and insert are bracketed by the editor's begin/end-edit
/// calls so the host sees a single undo step and a single change
/// notification, not two.
pub fn expand(editor: &mut dyn EditorBuffer, start: usize, cursor: usize, text: &str) {
    editor.begin_edit();
    editor.delete_range(start, cursor);
    editor.insert(start, text);
    editor.end_edit();
}

/// Handle an expansion-key press.
///
/// Extracts the word before the cursor, looks it up in the live set, and
/// performs the substitution on a hit. Returns `true` when a snippet was
/// expanded (the host should suppress the key's default behavior) and
/// `false` otherwise - empty word, no matching snippet, or a document
/// without a path - so the default behavior, e.g. inserting a literal
/// tab, proceeds. Absence of a match is never an error.
pub fn on_expansion_key(editor: &mut dyn EditorBuffer, records: &[SnippetRecord]) -> bool {
    let cursor = editor.cursor_position();
    let head = editor.text_range(0, cursor);
    // A short read means the cursor is past the end of the buffer or
    // inside a character; there is nothing sensible to expand, and the
    // span must not be edited.
    if head.len() != cursor {
        return false;
    }
    let (word, start) = extract_word(&head, head.len());
    if word.is_empty() {
        return false;
    }

    let document_path = match editor.document_path() {
        Some(path) => path.to_string_lossy().into_owned(),
        None => return false,
    };

    match find_snippet(records, word, &document_path) {
        Some(record) => {
            expand(editor, start, cursor, &record.text);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::ScratchBuffer;
    use std::path::PathBuf;

    fn record(file_types: &str, name: &str, trigger: &str, text: &str) -> SnippetRecord {
        SnippetRecord::new(
            file_types.to_string(),
            name.to_string(),
            trigger.to_string(),
            text.to_string(),
        )
    }

    #[test]
    fn extract_word_takes_the_run_before_the_cursor() {
        let buffer = "let foo_2 = bar";
        assert_eq!(extract_word(buffer, 9), ("foo_2", 4));
    }

    #[test]
    fn extract_word_stops_at_buffer_start() {
        assert_eq!(extract_word("main", 4), ("main", 0));
    }

    #[test]
    fn extract_word_is_empty_after_a_non_word_character() {
        // Cursor right after a space: nothing to expand.
        assert_eq!(extract_word("main ", 5), ("", 5));
        assert_eq!(extract_word("a+b", 2), ("", 2));
    }

    #[test]
    fn extract_word_never_crosses_the_cursor_forward() {
        // Word continues past the cursor; only the part behind it counts.
        assert_eq!(extract_word("mainline", 4), ("main", 0));
    }

    #[test]
    fn extract_word_tolerates_bad_positions() {
        assert_eq!(extract_word("ab", 99), ("", 99));
        // Offset 1 falls inside the two-byte encoding of 'é'.
        assert_eq!(extract_word("é", 1), ("", 1));
    }

    #[test]
    fn extract_word_is_idempotent() {
        let buffer = "foo bar_baz";
        let first = extract_word(buffer, 11);
        let second = extract_word(buffer, 11);
        assert_eq!(first, second);
    }

    #[test]
    fn file_type_match_is_a_suffix_test() {
        assert!(match_file_type(".py", "src/x.py"));
        assert!(match_file_type(".java, .py", "src/x.py"));
        assert!(!match_file_type(".py", "src/x.java"));
        // Case-sensitive, no extension parsing.
        assert!(!match_file_type(".py", "src/x.PY"));
        assert!(match_file_type("opy", "foo.copy"));
    }

    #[test]
    fn empty_pattern_list_matches_nothing() {
        assert!(!match_file_type("", "src/x.py"));
        assert!(!match_file_type(" , ", "src/x.py"));
    }

    #[test]
    fn find_snippet_returns_the_matching_record() {
        // Scenario: one .py snippet, looked up from a .py document.
        let records = vec![record(".py", "main stub", "main", "def main():\n    pass")];
        let hit = find_snippet(&records, "main", "x.py").unwrap();
        assert_eq!(hit.name, "main stub");
    }

    #[test]
    fn find_snippet_excludes_foreign_file_types() {
        let records = vec![record(".py", "main stub", "main", "def main():\n    pass")];
        assert!(find_snippet(&records, "main", "x.java").is_none());
    }

    #[test]
    fn first_eligible_record_wins_a_shared_trigger() {
        let records = vec![
            record(".java", "java foo", "foo", "java body"),
            record(".py", "py foo first", "foo", "py body 1"),
            record(".py", "py foo second", "foo", "py body 2"),
        ];
        let hit = find_snippet(&records, "foo", "x.py").unwrap();
        assert_eq!(hit.name, "py foo first");
    }

    #[test]
    fn ineligible_records_never_shadow_a_later_match() {
        // The .java record comes first and shares the trigger, but its file
        // types exclude it before the trigger is even compared.
        let records = vec![
            record(".java", "java foo", "foo", "java body"),
            record(".py", "py foo", "foo", "py body"),
        ];
        let hit = find_snippet(&records, "foo", "x.py").unwrap();
        assert_eq!(hit.text, "py body");
    }

    #[test]
    fn empty_word_never_matches() {
        let records = vec![record(".py", "dead", "", "body")];
        assert!(find_snippet(&records, "", "x.py").is_none());
    }

    #[test]
    fn expand_replaces_the_trigger_with_the_body() {
        let mut buffer = ScratchBuffer::new(
            "print\nmain".to_string(),
            10,
            Some(PathBuf::from("x.py")),
        );
        expand(&mut buffer, 6, 10, "def main():\n    pass");
        assert_eq!(buffer.content(), "print\ndef main():\n    pass");
    }

    #[test]
    fn expansion_key_expands_and_reports_handled() {
        let records = vec![record(".py", "main stub", "main", "def main():\n    pass")];
        let mut buffer = ScratchBuffer::new("main".to_string(), 4, Some(PathBuf::from("x.py")));

        assert!(on_expansion_key(&mut buffer, &records));
        assert_eq!(buffer.content(), "def main():\n    pass");
        assert_eq!(buffer.cursor_position(), buffer.content().len());
    }

    #[test]
    fn expansion_key_falls_through_for_foreign_documents() {
        let records = vec![record(".py", "main stub", "main", "def main():\n    pass")];
        let mut buffer = ScratchBuffer::new("main".to_string(), 4, Some(PathBuf::from("x.java")));

        assert!(!on_expansion_key(&mut buffer, &records));
        assert_eq!(buffer.content(), "main");
    }

    #[test]
    fn expansion_key_falls_through_after_whitespace() {
        let records = vec![record(".py", "main stub", "main", "def main():\n    pass")];
        let mut buffer = ScratchBuffer::new("main ".to_string(), 5, Some(PathBuf::from("x.py")));

        assert!(!on_expansion_key(&mut buffer, &records));
        assert_eq!(buffer.content(), "main ");
    }

    #[test]
    fn expansion_key_falls_through_for_an_out_of_range_cursor() {
        let records = vec![record(".py", "main stub", "main", "pass")];
        let mut buffer = ScratchBuffer::new("main".to_string(), 99, Some(PathBuf::from("x.py")));

        assert!(!on_expansion_key(&mut buffer, &records));
        assert_eq!(buffer.content(), "main");
    }

    #[test]
    fn expansion_key_falls_through_for_a_mid_character_cursor() {
        let records = vec![record(".py", "main stub", "main", "pass")];
        // Offset 1 falls inside the two-byte encoding of 'é'.
        let mut buffer = ScratchBuffer::new("é".to_string(), 1, Some(PathBuf::from("x.py")));

        assert!(!on_expansion_key(&mut buffer, &records));
        assert_eq!(buffer.content(), "é");
    }

    #[test]
    fn expansion_key_falls_through_without_a_document_path() {
        let records = vec![record(".py", "main stub", "main", "def main():\n    pass")];
        let mut buffer = ScratchBuffer::new("main".to_string(), 4, None);

        assert!(!on_expansion_key(&mut buffer, &records));
    }

    #[test]
    fn expansion_only_touches_the_trigger_span() {
        let records = vec![record(".py", "sysout", "sout", "print()")];
        let mut buffer = ScratchBuffer::new(
            "x = 1\nsout\ny = 2".to_string(),
            10,
            Some(PathBuf::from("x.py")),
        );

        assert!(on_expansion_key(&mut buffer, &records));
        assert_eq!(buffer.content(), "x = 1\nprint()\ny = 2");
    }

    /// Records the order of edit calls so the atomic bracketing can be
    /// asserted.
    struct TracingBuffer {
        inner: ScratchBuffer,
        events: Vec<&'static str>,
    }

    impl EditorBuffer for TracingBuffer {
        fn cursor_position(&self) -> usize {
            self.inner.cursor_position()
        }

        fn document_path(&self) -> Option<&std::path::Path> {
            self.inner.document_path()
        }

        fn text_range(&self, start: usize, end: usize) -> String {
            self.inner.text_range(start, end)
        }

        fn delete_range(&mut self, start: usize, end: usize) {
            self.events.push("delete");
            self.inner.delete_range(start, end);
        }

        fn insert(&mut self, position: usize, text: &str) {
            self.events.push("insert");
            self.inner.insert(position, text);
        }

        fn begin_edit(&mut self) {
            self.events.push("begin");
        }

        fn end_edit(&mut self) {
            self.events.push("end");
        }
    }

    #[test]
    fn expansion_is_one_bracketed_edit() {
        let records = vec![record(".py", "main stub", "main", "pass")];
        let mut buffer = TracingBuffer {
            inner: ScratchBuffer::new("main".to_string(), 4, Some(PathBuf::from("x.py"))),
            events: vec![],
        };

        assert!(on_expansion_key(&mut buffer, &records));
        assert_eq!(buffer.events, vec!["begin", "delete", "insert", "end"]);
    }

    #[test]
    fn whitespace_trigger_is_dead_configuration() {
        // A trigger containing a space can never equal an extracted word.
        let records = vec![record(".py", "dead", "two words", "body")];
        let mut buffer = ScratchBuffer::new(
            "two words".to_string(),
            9,
            Some(PathBuf::from("x.py")),
        );

        assert!(!on_expansion_key(&mut buffer, &records));
    }
}
