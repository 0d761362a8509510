use thiserror::Error;

/// Textual anchor that opens the page data block in the source document.
pub const PAGE_DATA_ANCHOR: &str = "const pageData = {";

/// One page entry as it appears in the source, in order of appearance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEntry {
    pub page: u32,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The source carries no page data block at all.
    #[error("could not find the page data block")]
    AnchorMissing,
}

/// Parses the page data object literal out of the source document.
///
/// Entries have the shape `<number>: { title: "...", content: <template
/// literal> }`. The scanner walks the literal grammar directly, so
/// escaped quotes, backticks and braces inside the payload do not
/// truncate an entry. Scanning runs entry by entry until the input stops
/// matching the grammar; a malformed tail ends the scan without
/// discarding what was already parsed. Only a missing anchor is fatal.
pub fn parse_page_data(source: &str) -> Result<Vec<PageEntry>, ExtractError> {
    let start = source
        .find(PAGE_DATA_ANCHOR)
        .ok_or(ExtractError::AnchorMissing)?;
    let mut scanner = Scanner::new(&source[start + PAGE_DATA_ANCHOR.len()..]);

    let mut entries = Vec::new();
    while let Some(entry) = scanner.next_entry() {
        entries.push(entry);
    }
    Ok(entries)
}

struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn next_entry(&mut self) -> Option<PageEntry> {
        self.skip_ws_and_commas();
        let page = self.number()?;
        self.skip_ws();
        self.eat(':')?;
        self.skip_ws();
        self.eat('{')?;

        self.skip_ws();
        self.eat_keyword("title")?;
        self.skip_ws();
        self.eat(':')?;
        self.skip_ws();
        let title = self.quoted_string()?;

        self.skip_ws();
        self.eat(',')?;
        self.skip_ws();
        self.eat_keyword("content")?;
        self.skip_ws();
        self.eat(':')?;
        self.skip_ws();
        let content = self.template_literal()?;

        self.skip_ws();
        self.eat('}')?;

        Some(PageEntry {
            page,
            title,
            content: content.trim().to_string(),
        })
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn skip_ws(&mut self) {
        while let Some(ch) = self.rest().chars().next() {
            if ch.is_whitespace() {
                self.pos += ch.len_utf8();
            } else {
                break;
            }
        }
    }

    fn skip_ws_and_commas(&mut self) {
        while let Some(ch) = self.rest().chars().next() {
            if ch.is_whitespace() || ch == ',' {
                self.pos += ch.len_utf8();
            } else {
                break;
            }
        }
    }

    fn eat(&mut self, expected: char) -> Option<()> {
        if self.rest().starts_with(expected) {
            self.pos += expected.len_utf8();
            Some(())
        } else {
            None
        }
    }

    fn eat_keyword(&mut self, keyword: &str) -> Option<()> {
        if self.rest().starts_with(keyword) {
            self.pos += keyword.len();
            Some(())
        } else {
            None
        }
    }

    fn number(&mut self) -> Option<u32> {
        let digits: &str = {
            let rest = self.rest();
            let end = rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(rest.len());
            &rest[..end]
        };
        if digits.is_empty() {
            return None;
        }
        self.pos += digits.len();
        digits.parse().ok()
    }

    /// Double-quoted string literal. Escaped quotes and backslashes are
    /// unescaped; every other escape sequence is kept verbatim.
    fn quoted_string(&mut self) -> Option<String> {
        self.delimited_literal('"')
    }

    /// Backtick template literal. Escaped backticks and backslashes are
    /// unescaped; every other escape sequence is kept verbatim.
    fn template_literal(&mut self) -> Option<String> {
        self.delimited_literal('`')
    }

    fn delimited_literal(&mut self, delimiter: char) -> Option<String> {
        self.eat(delimiter)?;
        let mut out = String::new();
        let mut chars = self.rest().char_indices();
        while let Some((idx, ch)) = chars.next() {
            if ch == delimiter {
                self.pos += idx + delimiter.len_utf8();
                return Some(out);
            }
            if ch == '\\' {
                let (_, escaped) = chars.next()?;
                if escaped == delimiter || escaped == '\\' {
                    out.push(escaped);
                } else {
                    out.push('\\');
                    out.push(escaped);
                }
                continue;
            }
            out.push(ch);
        }
        // Unterminated literal: the entry cannot be completed.
        None
    }
}
