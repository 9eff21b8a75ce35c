use super::filter::Matcher;
use super::{FilterState, Record, RecordId};

/// Two-level listing: a group owning an ordered run of child records.
pub trait Group {
    type Item: Record;

    fn id(&self) -> RecordId;
    fn children(&self) -> &[Self::Item];
}

/// A retained group together with its visible children.
pub struct GroupView<'a, G: Group> {
    pub group: &'a G,
    pub children: Vec<&'a G::Item>,
}

impl<'a, G: Group> GroupView<'a, G> {
    pub fn id(&self) -> RecordId {
        self.group.id()
    }

    pub fn child_ids(&self) -> Vec<RecordId> {
        self.children.iter().map(|child| child.id()).collect()
    }
}

/// Keep children whose title contains `query` (case-insensitive).
///
/// Groups without a matching child are dropped, except that every group is
/// kept when `query` is empty, including groups with no children at all.
pub fn filter_grouped<'a, G: Group>(groups: &'a [G], query: &str) -> Vec<GroupView<'a, G>> {
    let needle = query.to_lowercase();
    groups
        .iter()
        .filter_map(|group| {
            let children: Vec<&G::Item> = group
                .children()
                .iter()
                .filter(|child| child.title().to_lowercase().contains(&needle))
                .collect();
            (query.is_empty() || !children.is_empty()).then_some(GroupView { group, children })
        })
        .collect()
}

/// Like [`filter_grouped`], but children are tested against the full flat
/// predicate of `state` (query over searchable text plus category selections).
pub fn filter_grouped_with<'a, G: Group>(
    groups: &'a [G],
    state: &FilterState,
) -> Vec<GroupView<'a, G>> {
    let matcher = Matcher::for_record::<G::Item>(state);
    let keep_all = matcher.is_inactive();
    groups
        .iter()
        .filter_map(|group| {
            let children: Vec<&G::Item> = group
                .children()
                .iter()
                .filter(|child| matcher.matches(*child))
                .collect();
            (keep_all || !children.is_empty()).then_some(GroupView { group, children })
        })
        .collect()
}
