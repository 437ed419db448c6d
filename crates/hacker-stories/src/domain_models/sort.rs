//! Sort projection
//!
//! The story list is displayed through a sort projection that never
//! touches the underlying data: removal and pagination keep working on
//! arrival order, the sort only decides what the table shows.

use super::Story;

/// Column a story list can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Arrival order
    #[default]
    None,
    Title,
    Author,
    Comment,
    Point,
}

impl SortKey {
    /// Column label used in the table header and help
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::None => "None",
            SortKey::Title => "Title",
            SortKey::Author => "Author",
            SortKey::Comment => "Comments",
            SortKey::Point => "Points",
        }
    }
}

/// Active sort key plus direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSelection {
    pub key: SortKey,
    pub is_reverse: bool,
}

impl SortSelection {
    /// Selecting the active key again flips the direction, selecting a
    /// different key starts over in its natural direction.
    pub fn toggle(self, key: SortKey) -> Self {
        if self.key == key {
            Self {
                key,
                is_reverse: !self.is_reverse,
            }
        } else {
            Self {
                key,
                is_reverse: false,
            }
        }
    }
}

/// Project `stories` through `selection`
///
/// Title and author sort ascending by byte-wise string order. Comments and
/// points sort descending, produced by reversing a stable ascending sort,
/// so stories with equal counts come out in reversed arrival order.
pub fn sort_stories<'a>(stories: &'a [Story], selection: &SortSelection) -> Vec<&'a Story> {
    let mut sorted: Vec<&Story> = stories.iter().collect();

    match selection.key {
        SortKey::None => {}
        SortKey::Title => sorted.sort_by(|a, b| a.title.cmp(&b.title)),
        SortKey::Author => sorted.sort_by(|a, b| a.author.cmp(&b.author)),
        SortKey::Comment => {
            sorted.sort_by_key(|s| s.num_comments);
            sorted.reverse();
        }
        SortKey::Point => {
            sorted.sort_by_key(|s| s.points);
            sorted.reverse();
        }
    }

    if selection.is_reverse {
        sorted.reverse();
    }

    sorted
}
