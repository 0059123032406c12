//! Sub-group routing within a category.
//!
//! Once a session has a category, each utterance is scanned against that
//! category's router table until a sub-group sticks. Tables are scanned in
//! declaration order and the first sub-group with any keyword present wins,
//! so more specific groups are listed before catch-alls.

use crate::models::{Category, SubGroup};
use crate::taxonomy;

/// Find the sub-group an utterance belongs to, or `SubGroup::Default` when
/// nothing in the category's table matches.
pub fn route(text: &str, category: Category) -> SubGroup {
    let lowered = text.to_lowercase();
    for (sub_group, keywords) in taxonomy::router_table(category) {
        if keywords.iter().any(|kw| lowered.contains(kw)) {
            tracing::debug!(%category, sub_group = sub_group.as_str(), "routed utterance");
            return *sub_group;
        }
    }
    SubGroup::Default
}
