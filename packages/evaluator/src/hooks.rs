//! Host veto over edit actions.
//!
//! The renderer asks the hooks before attaching any `EditAction`. A
//! vetoed field still renders its content, only without an edit hook;
//! a vetoed affordance is not rendered at all.

use crate::render_node::EditAction;
use vitae_model::EditAddress;

pub trait EditHooks {
    fn allow(&self, action: &EditAction) -> bool;
}

/// Every action is allowed
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl EditHooks for AllowAll {
    fn allow(&self, _action: &EditAction) -> bool {
        true
    }
}

/// Denies every action at or below one of the locked addresses
#[derive(Debug, Clone, Default)]
pub struct LockedFields {
    locked: Vec<EditAddress>,
}

impl LockedFields {
    pub fn new(locked: impl IntoIterator<Item = EditAddress>) -> Self {
        Self {
            locked: locked.into_iter().collect(),
        }
    }

    pub fn lock(mut self, address: EditAddress) -> Self {
        self.locked.push(address);
        self
    }

    pub fn is_locked(&self, address: &EditAddress) -> bool {
        self.locked.iter().any(|prefix| address.starts_with(prefix))
    }
}

impl EditHooks for LockedFields {
    fn allow(&self, action: &EditAction) -> bool {
        !self.is_locked(action.address())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locked_prefix_blocks_descendants() {
        let hooks = LockedFields::default().lock(EditAddress::key("personalInfo"));

        let name = EditAction::SetField {
            address: EditAddress::key("personalInfo").field("fullName"),
        };
        let skill = EditAction::AddItem {
            list: EditAddress::key("skills"),
        };

        assert!(!hooks.allow(&name));
        assert!(hooks.allow(&skill));
        assert!(AllowAll.allow(&name));
    }
}
