//! Sort Reducer

use crate::actions::SortAction;
use crate::domain_models::SortSelection;

pub fn reduce_sort(state: SortSelection, action: &SortAction) -> SortSelection {
    match action {
        SortAction::Toggle(key) => {
            let next = state.toggle(*key);
            log::debug!("Sort: {:?} (reverse: {})", next.key, next.is_reverse);
            next
        }
    }
}
