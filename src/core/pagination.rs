//! Page packing and wraparound navigation for multi-page listings.
//!
//! Lines are packed greedily in input order: a line goes onto the current page
//! if the joined page (lines separated by `\n`) stays within the budget,
//! otherwise it starts a new page. A line longer than the budget on its own
//! gets a page to itself and is never truncated or split.
//!
//! The budget counts characters, not bytes.

/// Default per-page character budget for listings.
pub const DEFAULT_PAGE_SIZE: usize = 300;

/// An ordered, non-empty set of rendered pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pages {
    pages: Vec<String>,
}

impl Pages {
    /// Packs `lines` into pages of at most `max_page_size` characters.
    ///
    /// Always yields at least one page; empty input produces a single empty page.
    /// A `max_page_size` of zero places every line on its own page.
    pub fn build<I, S>(lines: I, max_page_size: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pages = Vec::new();
        let mut current = String::new();
        let mut current_len = 0usize;
        let mut current_has_lines = false;

        for line in lines {
            let line = line.as_ref();
            let line_len = line.chars().count();

            if current_has_lines {
                // +1 for the joining newline
                if current_len + 1 + line_len <= max_page_size {
                    current.push('\n');
                    current.push_str(line);
                    current_len += 1 + line_len;
                    continue;
                }
                pages.push(std::mem::take(&mut current));
            }

            current.push_str(line);
            current_len = line_len;
            current_has_lines = true;
        }

        if current_has_lines || pages.is_empty() {
            pages.push(current);
        }

        Self { pages }
    }

    /// Number of pages; never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether there are no pages; `build` never produces that.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Content of page `index`, if it exists.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.pages.get(index).map(String::as_str)
    }

    /// Iterates over the page contents in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().map(String::as_str)
    }

    /// Footer text for page `index`: `Page <index+1> of <len>`.
    #[must_use]
    pub fn footer(&self, index: usize) -> String {
        format!("Page {} of {}", index + 1, self.len())
    }
}

/// Index of the page after `index`, wrapping to the first page.
#[must_use]
pub const fn next(index: usize, page_count: usize) -> usize {
    if page_count == 0 {
        return 0;
    }
    (index + 1) % page_count
}

/// Index of the page before `index`, wrapping to the last page.
#[must_use]
pub const fn previous(index: usize, page_count: usize) -> usize {
    if page_count == 0 {
        return 0;
    }
    (index + page_count - 1) % page_count
}
