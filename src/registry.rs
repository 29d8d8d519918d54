//! Maps action identifiers to constructible actions, the way the host's
//! action browser expects: metadata up front, a factory on demand.

use std::collections::HashMap;

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::action::{Action, ActionEnv};
use crate::score::ScoreAction;

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "kebab-case")]
pub enum ActionKind {
    Score,
}

/// Metadata the host shows when the user browses available actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon_name: &'static str,
}

impl ActionKind {
    pub fn info(&self) -> ActionInfo {
        match self {
            ActionKind::Score => ActionInfo {
                id: "score",
                name: "Score",
                description: "Keep track of your score. Reset with a long press.",
                icon_name: "score-symbolic",
            },
        }
    }
}

type Factory = fn(&ActionEnv) -> Box<dyn Action>;

pub struct ActionRegistry {
    entries: HashMap<ActionKind, Factory>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Registry with every built-in action.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(ActionKind::Score, |env| Box::new(ScoreAction::new(env)));
        registry
    }

    pub fn register(&mut self, kind: ActionKind, factory: Factory) {
        self.entries.insert(kind, factory);
    }

    /// Constructs the action registered under `id`, or `None` for an
    /// unknown or unregistered identifier.
    pub fn create(&self, id: &str, env: &ActionEnv) -> Option<Box<dyn Action>> {
        let kind: ActionKind = id.parse().ok()?;
        let factory = self.entries.get(&kind)?;
        Some(factory(env))
    }

    /// Metadata for every registered action, in declaration order.
    pub fn available(&self) -> Vec<ActionInfo> {
        ActionKind::iter()
            .filter(|kind| self.entries.contains_key(kind))
            .map(|kind| kind.info())
            .collect()
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_id_round_trip() {
        assert_eq!(ActionKind::Score.to_string(), "score");
        assert_eq!("score".parse::<ActionKind>().unwrap(), ActionKind::Score);
    }

    #[test]
    fn test_create_by_id() {
        let registry = ActionRegistry::with_defaults();
        let action = registry.create("score", &ActionEnv::default());
        assert!(action.is_some());
        assert!(registry.create("jog-dial", &ActionEnv::default()).is_none());
    }

    #[test]
    fn test_available_lists_metadata() {
        let registry = ActionRegistry::with_defaults();
        let infos = registry.available();
        assert_eq!(infos.len(), 1);
        assert_eq!(infos[0].id, "score");
        assert_eq!(infos[0].icon_name, "score-symbolic");
    }
}
