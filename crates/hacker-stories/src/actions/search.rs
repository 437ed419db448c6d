//! Search actions
//!
//! Editing the search term, submitting it, paging and the search history.
//! `UrlIssued` is the only action that changes the query target; it is
//! produced by the search middleware, never by a view.

/// Edit applied to the search term while typing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermEdit {
    Char(char),
    Backspace,
    Clear,
}

impl TermEdit {
    /// Apply this edit to `term`
    pub fn apply(self, term: &str) -> String {
        let mut edited = term.to_string();
        match self {
            TermEdit::Char(c) => edited.push(c),
            TermEdit::Backspace => {
                edited.pop();
            }
            TermEdit::Clear => edited.clear(),
        }
        edited
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    /// Edit the search term in place
    Edit(TermEdit),
    /// Search the current term from page 0 (ignored when the term is empty)
    Submit,
    /// Fetch the next page of the current query
    LoadMore,
    /// Re-run the n-th entry (zero-based) of the search history
    PickHistory(usize),
    /// Set the term and search it from page 0
    SelectHistory(String),
    /// A new query URL became the current target
    UrlIssued(String),
}
