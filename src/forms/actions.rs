//! Editable policy action lists.
//!
//! A scope whose actions are all booleans is edited as a set of ticks. As
//! soon as one action carries a typed value the whole scope switches to the
//! valued form: a tick per action plus string and number inputs.

use std::collections::BTreeMap;

use anyhow::{Result, bail};
use serde::Serialize;

use crate::model::{ActionType, GrantedAction, GrantedActions, ScopeSchema};

/// Splits `name=value` into its parts; a bare `name` has no value.
pub fn parse_action_value(s: &str) -> (&str, Option<&str>) {
    match s.split_once('=') {
        Some((name, value)) => (name.trim(), Some(value.trim())),
        None => (s.trim(), None),
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BooleanAction {
    pub name: String,
    pub help: String,
    pub ticked: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ValuedAction {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ActionType,
    pub desc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<serde_json::Value>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct BooleanActionSet {
    pub actions: Vec<BooleanAction>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ValuedActionSet {
    pub actions: Vec<ValuedAction>,
    pub enabled: BTreeMap<String, bool>,
    pub strings: BTreeMap<String, String>,
    pub numbers: BTreeMap<String, i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum ActionForm {
    Boolean(BooleanActionSet),
    Valued(ValuedActionSet),
}

impl ActionForm {
    /// Builds the editable form for `schema`, preset from `granted`.
    pub fn materialize(schema: &ScopeSchema, granted: &GrantedActions) -> Self {
        let valued = schema.values().any(|def| def.kind != ActionType::Bool);
        if !valued {
            let actions = schema
                .iter()
                .map(|(name, def)| BooleanAction {
                    name: name.clone(),
                    help: def.desc.clone(),
                    ticked: matches!(granted.get(name), Some(GrantedAction::Flag)),
                })
                .collect();
            return ActionForm::Boolean(BooleanActionSet { actions });
        }

        let mut set = ValuedActionSet::default();
        for (name, def) in schema {
            set.actions.push(ValuedAction {
                name: name.clone(),
                kind: def.kind,
                desc: def.desc.clone(),
                allowed_values: def.allowed_values.clone(),
            });
            let Some(g) = granted.get(name) else {
                continue;
            };
            set.enabled.insert(name.clone(), true);
            let GrantedAction::Value(raw) = g else {
                continue;
            };
            match def.kind {
                ActionType::Str | ActionType::Other => {
                    set.strings.insert(name.clone(), raw.clone());
                }
                ActionType::Int => match parse_leading_int(raw) {
                    Some(n) => {
                        set.numbers.insert(name.clone(), n);
                    }
                    None => {
                        tracing::warn!(action = %name, value = %raw, "granted value is not an integer");
                    }
                },
                ActionType::Bool => {}
            }
        }
        ActionForm::Valued(set)
    }

    pub fn is_valued(&self) -> bool {
        matches!(self, ActionForm::Valued(_))
    }

    pub fn names(&self) -> Vec<&str> {
        match self {
            ActionForm::Boolean(set) => set.actions.iter().map(|a| a.name.as_str()).collect(),
            ActionForm::Valued(set) => set.actions.iter().map(|a| a.name.as_str()).collect(),
        }
    }

    /// Canonical action list for submission: `name` or `name=value`.
    pub fn to_action_list(&self) -> Vec<String> {
        match self {
            ActionForm::Boolean(set) => set
                .actions
                .iter()
                .filter(|a| a.ticked)
                .map(|a| a.name.clone())
                .collect(),
            ActionForm::Valued(set) => set
                .enabled
                .iter()
                .filter(|(_, on)| **on)
                .map(|(name, _)| {
                    if let Some(s) = set.strings.get(name).filter(|s| !s.is_empty()) {
                        format!("{}={}", name, s)
                    } else if let Some(n) = set.numbers.get(name) {
                        // Zero is a real value, not an absent one.
                        format!("{}={}", name, n)
                    } else {
                        name.clone()
                    }
                })
                .collect(),
        }
    }

    pub fn tick(&mut self, name: &str, on: bool) -> Result<()> {
        match self {
            ActionForm::Boolean(set) => {
                let Some(action) = set.actions.iter_mut().find(|a| a.name == name) else {
                    bail!("unknown action {:?} for this scope", name);
                };
                action.ticked = on;
            }
            ActionForm::Valued(set) => {
                if !set.actions.iter().any(|a| a.name == name) {
                    bail!("unknown action {:?} for this scope", name);
                }
                set.enabled.insert(name.to_string(), on);
            }
        }
        Ok(())
    }

    /// Sets the value of a typed action and ticks it.
    pub fn set_value(&mut self, name: &str, raw: &str) -> Result<()> {
        let ActionForm::Valued(set) = self else {
            bail!("actions of this scope take no values (got {}={})", name, raw);
        };
        let Some(action) = set.actions.iter().find(|a| a.name == name) else {
            bail!("unknown action {:?} for this scope", name);
        };
        match action.kind {
            ActionType::Bool => bail!("action {:?} is boolean and takes no value", name),
            ActionType::Int => {
                let Ok(n) = raw.trim().parse::<i64>() else {
                    bail!("action {:?} expects an integer, got {:?}", name, raw);
                };
                set.strings.remove(name);
                set.numbers.insert(name.to_string(), n);
            }
            ActionType::Str | ActionType::Other => {
                set.numbers.remove(name);
                set.strings.insert(name.to_string(), raw.to_string());
            }
        }
        set.enabled.insert(name.to_string(), true);
        Ok(())
    }

    pub fn clear_value(&mut self, name: &str) -> Result<()> {
        let ActionForm::Valued(set) = self else {
            return Ok(());
        };
        if !set.actions.iter().any(|a| a.name == name) {
            bail!("unknown action {:?} for this scope", name);
        }
        set.strings.remove(name);
        set.numbers.remove(name);
        Ok(())
    }

    /// Applies one `name` or `name=value` entry as typed by an admin.
    pub fn apply(&mut self, entry: &str) -> Result<()> {
        match parse_action_value(entry) {
            (name, Some(value)) => self.set_value(name, value),
            (name, None) => self.tick(name, true),
        }
    }
}

/// Reads the leading integer of `s`, ignoring trailing garbage ("10s" -> 10).
fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let end = s
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || (*i == 0 && (*c == '-' || *c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    s[..end].parse().ok()
}

#[cfg(test)]
#[path = "../tests/forms/actions_tests.rs"]
mod tests;
