use std::ops::Range;

/// Correspondence between extern (display) character offsets and intern token indices.
///
/// Offsets count `char`s, not bytes. Separator characters inserted by the renderer belong to no
/// token. A mapping is only valid for the exact render that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExternInternMapping {
    extern_to_intern: Vec<Option<usize>>,
    token_spans: Vec<Range<usize>>,
}

impl ExternInternMapping {
    /// Record that token `intern_index` occupies the extern chars `span`.
    ///
    /// Tokens must be pushed in order and spans must not overlap.
    pub(crate) fn push_token(&mut self, intern_index: usize, span: Range<usize>) {
        debug_assert_eq!(intern_index, self.token_spans.len());
        if self.extern_to_intern.len() < span.end {
            self.extern_to_intern.resize(span.end, None);
        }
        for slot in &mut self.extern_to_intern[span.clone()] {
            *slot = Some(intern_index);
        }
        self.token_spans.push(span);
    }

    /// Account for separator chars that belong to no token.
    pub(crate) fn extend_to(&mut self, extern_len: usize) {
        if self.extern_to_intern.len() < extern_len {
            self.extern_to_intern.resize(extern_len, None);
        }
    }

    /// Index of the token rendered at `extern_index`, if any.
    pub fn intern_index_at(&self, extern_index: usize) -> Option<usize> {
        self.extern_to_intern.get(extern_index).copied().flatten()
    }

    pub fn extern_span(&self, intern_index: usize) -> Option<Range<usize>> {
        self.token_spans.get(intern_index).cloned()
    }

    pub fn extern_start(&self, intern_index: usize) -> Option<usize> {
        self.token_spans.get(intern_index).map(|span| span.start)
    }

    /// Exclusive end of the token's extern span.
    pub fn extern_end(&self, intern_index: usize) -> Option<usize> {
        self.token_spans.get(intern_index).map(|span| span.end)
    }

    /// Offset of `extern_cursor` within the text of token `intern_index`.
    ///
    /// A cursor sitting right after the token (on its trailing separator) maps to the token's
    /// length. Any other position outside the token yields `None`.
    pub fn offset_in_token(&self, extern_cursor: usize, intern_index: usize) -> Option<usize> {
        let span = self.token_spans.get(intern_index)?;
        if extern_cursor < span.start || extern_cursor > span.end + 1 {
            return None;
        }
        Some((extern_cursor - span.start).min(span.len()))
    }

    /// Number of mapped extern chars (the rendered text length).
    pub fn extern_len(&self) -> usize {
        self.extern_to_intern.len()
    }

    pub fn token_count(&self) -> usize {
        self.token_spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.token_spans.is_empty()
    }
}
