//! Folder action policy lookup.

use std::collections::BTreeSet;

use crate::model::MessageAction;

/// Immutable set of actions a folder permits, queried per action name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActionPermissionSet {
    allowed: BTreeSet<MessageAction>,
}

impl ActionPermissionSet {
    /// Builds the lookup from a folder's allowed-action names.
    ///
    /// Duplicates and ordering are irrelevant. Names outside the action
    /// enumeration cannot come from a valid folder and are dropped.
    #[must_use]
    pub fn build<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .filter_map(|name| match name.as_ref().parse::<MessageAction>() {
                Ok(action) => Some(action),
                Err(e) => {
                    tracing::warn!("Ignoring folder policy entry: {}", e);
                    None
                }
            })
            .collect()
    }

    /// Returns true iff `name` names a permitted action.
    ///
    /// Unknown names answer `false`.
    #[must_use]
    pub fn is_allowed(&self, name: &str) -> bool {
        name.parse::<MessageAction>()
            .is_ok_and(|action| self.allows(action))
    }

    /// Typed form of [`Self::is_allowed`].
    #[must_use]
    pub fn allows(&self, action: MessageAction) -> bool {
        self.allowed.contains(&action)
    }

    /// Permitted actions in display order.
    pub fn iter(&self) -> impl Iterator<Item = MessageAction> + '_ {
        self.allowed.iter().copied()
    }

    /// Returns true if nothing is permitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }
}

impl FromIterator<MessageAction> for ActionPermissionSet {
    fn from_iter<T: IntoIterator<Item = MessageAction>>(iter: T) -> Self {
        Self {
            allowed: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a MessageAction> for ActionPermissionSet {
    fn from_iter<T: IntoIterator<Item = &'a MessageAction>>(iter: T) -> Self {
        iter.into_iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const NAMES: [&str; 4] = ["edit", "reply", "forward", "delete"];

    #[test]
    fn test_inbox_policy() {
        let set = ActionPermissionSet::build(["reply", "forward", "delete"]);
        assert!(!set.is_allowed("edit"));
        assert!(set.is_allowed("reply"));
        assert!(set.is_allowed("forward"));
        assert!(set.is_allowed("delete"));
    }

    #[test]
    fn test_unknown_names_are_false() {
        let set = ActionPermissionSet::build(["reply", "archive"]);
        assert!(!set.is_allowed("archive"));
        assert!(!set.is_allowed(""));
        assert!(!set.is_allowed("Reply"));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![MessageAction::Reply]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let set = ActionPermissionSet::build(["delete", "edit", "delete"]);
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![MessageAction::Edit, MessageAction::Delete]
        );
    }

    #[test]
    fn test_empty_policy() {
        let set = ActionPermissionSet::build(Vec::<String>::new());
        assert!(set.is_empty());
        assert!(NAMES.iter().all(|name| !set.is_allowed(name)));
    }

    proptest! {
        #[test]
        fn prop_allowed_iff_member(
            actions in proptest::collection::vec(proptest::sample::select(NAMES.to_vec()), 0..8),
            query in prop_oneof![proptest::sample::select(NAMES.to_vec()).prop_map(String::from), "[a-z]{0,8}"],
        ) {
            let set = ActionPermissionSet::build(&actions);
            prop_assert_eq!(set.is_allowed(&query), actions.iter().any(|name| *name == query));
        }
    }
}
