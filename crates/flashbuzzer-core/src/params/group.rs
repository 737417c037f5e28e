use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use super::GROUP_SEPARATOR;
use crate::value::TypedValue;

/// One parameter as presented inside a group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupEntry<'a> {
    /// Full registry name, e.g. `Color_Red`
    pub name: &'a str,
    /// Name without the group prefix, e.g. `Red`
    pub leaf: &'a str,
    pub value: &'a TypedValue,
}

/// Read-only projection of the registry used for presentation.
///
/// Names are split once, at the first separator. `Dot_Max_Speed` belongs to
/// group `Dot` with leaf `Max_Speed`.
#[derive(Debug, Default)]
pub struct GroupView<'a> {
    pub groups: BTreeMap<&'a str, Vec<GroupEntry<'a>>>,
    pub ungrouped: Vec<GroupEntry<'a>>,
}

impl<'a> GroupView<'a> {
    pub(crate) fn from_params(params: impl Iterator<Item = (&'a str, &'a TypedValue)>) -> Self {
        let mut view = Self::default();
        for (name, value) in params {
            match name.split_once(GROUP_SEPARATOR) {
                Some((group, leaf)) => {
                    view.groups
                        .entry(group)
                        .or_default()
                        .push(GroupEntry { name, leaf, value });
                }
                None => view.ungrouped.push(GroupEntry {
                    name,
                    leaf: name,
                    value,
                }),
            }
        }
        view
    }

    /// Get the entries of a group
    pub fn group(&self, group: &str) -> Option<&[GroupEntry<'a>]> {
        self.groups.get(group).map(Vec::as_slice)
    }

    pub fn group_names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.groups.keys().copied()
    }
}
