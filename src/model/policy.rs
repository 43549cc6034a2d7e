use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Declared type of a policy action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    #[default]
    Bool,
    Str,
    Int,
    #[serde(other)]
    Other,
}

impl ActionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::Bool => "bool",
            ActionType::Str => "str",
            ActionType::Int => "int",
            ActionType::Other => "other",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ActionDef {
    #[serde(default)]
    pub desc: String,

    #[serde(default, rename = "type")]
    pub kind: ActionType,

    /// Allowed values, when the server restricts the input.
    #[serde(default, rename = "value", skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<serde_json::Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// Action schema of one scope: action name -> definition.
pub type ScopeSchema = BTreeMap<String, ActionDef>;

/// Action schemas of all scopes: scope name -> schema.
pub type PolicyDefs = BTreeMap<String, ScopeSchema>;

/// An action a policy already grants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GrantedAction {
    Flag,
    Value(String),
}

/// Granted actions of a policy, keyed by action name.
pub type GrantedActions = BTreeMap<String, GrantedAction>;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Policy {
    pub name: String,
    pub scope: String,

    #[serde(default, deserialize_with = "string_or_list")]
    pub realm: Vec<String>,

    #[serde(default, deserialize_with = "string_or_list")]
    pub resolver: Vec<String>,

    #[serde(default, deserialize_with = "string_or_list")]
    pub user: Vec<String>,

    #[serde(default = "default_true")]
    pub active: bool,

    #[serde(default, deserialize_with = "string_or_list")]
    pub client: Vec<String>,

    #[serde(
        default,
        deserialize_with = "granted_actions",
        serialize_with = "serialize_granted"
    )]
    pub action: GrantedActions,
}

/// Payload of a policy create/update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyParams {
    pub scope: String,
    pub realm: Vec<String>,
    pub resolver: Vec<String>,
    pub user: String,
    pub active: bool,
    pub client: String,
    pub action: Vec<String>,
}

impl Default for PolicyParams {
    fn default() -> Self {
        Self {
            scope: String::new(),
            realm: Vec::new(),
            resolver: Vec::new(),
            user: String::new(),
            active: true,
            client: String::new(),
            action: Vec::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn string_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match v {
        None | Some(serde_json::Value::Null) => Vec::new(),
        Some(serde_json::Value::String(s)) => split_csv(&s),
        Some(serde_json::Value::Array(items)) => items
            .into_iter()
            .filter_map(|i| match i {
                serde_json::Value::String(s) => Some(s),
                serde_json::Value::Null => None,
                other => Some(other.to_string()),
            })
            .filter(|s| !s.is_empty())
            .collect(),
        Some(other) => {
            return Err(serde::de::Error::custom(format!(
                "expected string or list, got {}",
                other
            )));
        }
    })
}

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(|p| p.to_string())
        .collect()
}

fn granted_actions<'de, D>(deserializer: D) -> Result<GrantedActions, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<serde_json::Value>::deserialize(deserializer)?;
    let mut out = GrantedActions::new();
    match v {
        None | Some(serde_json::Value::Null) => {}
        Some(serde_json::Value::Object(map)) => {
            for (name, value) in map {
                if let Some(g) = granted_from_json(value) {
                    out.insert(name, g);
                }
            }
        }
        // Older servers return the raw "a, b=1" action string.
        Some(serde_json::Value::String(s)) => {
            for part in split_csv(&s) {
                insert_action_entry(&mut out, &part);
            }
        }
        Some(serde_json::Value::Array(items)) => {
            for item in items {
                if let serde_json::Value::String(part) = item {
                    insert_action_entry(&mut out, &part);
                }
            }
        }
        Some(other) => {
            return Err(serde::de::Error::custom(format!(
                "expected action map, got {}",
                other
            )));
        }
    }
    Ok(out)
}

fn insert_action_entry(out: &mut GrantedActions, entry: &str) {
    let (name, value) = crate::forms::parse_action_value(entry);
    if name.is_empty() {
        return;
    }
    let g = match value {
        Some(v) => GrantedAction::Value(v.to_string()),
        None => GrantedAction::Flag,
    };
    out.insert(name.to_string(), g);
}

fn granted_from_json(v: serde_json::Value) -> Option<GrantedAction> {
    match v {
        serde_json::Value::Bool(true) => Some(GrantedAction::Flag),
        serde_json::Value::String(s) if !s.is_empty() => Some(GrantedAction::Value(s)),
        serde_json::Value::Number(n) => Some(GrantedAction::Value(n.to_string())),
        _ => None,
    }
}

fn serialize_granted<S>(actions: &GrantedActions, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use serde::ser::SerializeMap;
    let mut map = serializer.serialize_map(Some(actions.len()))?;
    for (name, g) in actions {
        match g {
            GrantedAction::Flag => map.serialize_entry(name, &true)?,
            GrantedAction::Value(v) => map.serialize_entry(name, v)?,
        }
    }
    map.end()
}

#[cfg(test)]
#[path = "../tests/model/policy_tests.rs"]
mod tests;
