//! Reusable form mechanics shared by the console views.

mod actions;
mod diff;
mod preload;

pub use self::actions::{
    ActionForm, BooleanAction, BooleanActionSet, ValuedAction, ValuedActionSet,
    parse_action_value,
};
pub use self::diff::DiffForm;
pub use self::preload::{join_all, join2, preload2};

/// A realm, resolver or scope offered for multi-select.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SelectableItem {
    pub name: String,
    pub ticked: bool,
}

impl SelectableItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ticked: false,
        }
    }
}

/// Names of the ticked items, in list order.
pub fn ticked_names(items: &[SelectableItem]) -> Vec<String> {
    items
        .iter()
        .filter(|i| i.ticked)
        .map(|i| i.name.clone())
        .collect()
}

/// Ticks exactly the items named in `names`.
pub fn tick_matching(items: &mut [SelectableItem], names: &[String]) {
    for item in items {
        item.ticked = names.iter().any(|n| n == &item.name);
    }
}
