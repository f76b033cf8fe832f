//! Character-by-character heading reveal.

/// One step of a typing chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingStep<'a> {
    /// Show this prefix, then schedule the next step.
    Reveal(&'a str),
    /// Whole text shown: fade in, schedule nothing further.
    Finished,
}

/// Reveal state for one heading. Each chain is independent of every other
/// chain and of the frame clock.
#[derive(Clone, Debug)]
pub struct TypingChain {
    text: String,
    // byte offsets of each char boundary after the first char
    ends: Vec<usize>,
    shown: usize,
    finished: bool,
}

impl TypingChain {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let ends = text
            .char_indices()
            .map(|(i, c)| i + c.len_utf8())
            .collect();
        Self {
            text,
            ends,
            shown: 0,
            finished: false,
        }
    }

    /// Number of characters in the full text.
    pub fn len(&self) -> usize {
        self.ends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ends.is_empty()
    }

    /// Characters currently shown.
    pub fn shown(&self) -> usize {
        self.shown
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Advance by one character. `Finished` is returned exactly once; after
    /// that the chain yields `None`.
    pub fn advance(&mut self) -> Option<TypingStep<'_>> {
        if self.finished {
            return None;
        }
        if self.shown < self.ends.len() {
            let end = self.ends[self.shown];
            self.shown += 1;
            Some(TypingStep::Reveal(&self.text[..end]))
        } else {
            self.finished = true;
            Some(TypingStep::Finished)
        }
    }
}
