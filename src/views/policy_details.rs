//! Create/edit screen of a single policy.

use anyhow::{Context, Result, bail};

use crate::forms::{ActionForm, SelectableItem, preload2, tick_matching, ticked_names};
use crate::model::{GrantedActions, Policy, PolicyDefs, PolicyParams, split_csv};
use crate::remote::{Ack, ApiError, ConfigApi};
use crate::views::PolicyList;

#[derive(Clone, Debug)]
pub struct PolicyDetails {
    /// Name the policy is saved under.
    pub policy_name: String,
    existing: Option<String>,
    pub defs: PolicyDefs,
    pub scopes: Vec<SelectableItem>,
    pub realms: Vec<SelectableItem>,
    pub resolvers: Vec<SelectableItem>,
    pub params: PolicyParams,
    pub actions: Option<ActionForm>,
}

impl PolicyDetails {
    fn new(defs: PolicyDefs, existing: Option<&str>) -> Self {
        let scopes = defs.keys().map(SelectableItem::new).collect();
        Self {
            policy_name: existing.unwrap_or_default().to_string(),
            existing: existing.map(str::to_string),
            defs,
            scopes,
            realms: Vec::new(),
            resolvers: Vec::new(),
            params: PolicyParams::default(),
            actions: None,
        }
    }

    /// Opens the editor.
    ///
    /// `existing` names the policy being edited; `known` is a policy list the
    /// caller already fetched and saves a round trip when it holds that
    /// policy. Realms and resolvers are fetched concurrently and the edit
    /// values are preset only once both arrived.
    pub fn open(
        api: &dyn ConfigApi,
        existing: Option<&str>,
        known: Option<&[Policy]>,
    ) -> Result<Self> {
        let defs = api.get_policy_defs()?;
        let mut view = Self::new(defs, existing);
        preload2(
            || api.get_realms(),
            || api.get_resolvers(),
            |realms, resolvers| {
                view.realms = realms.into_keys().map(SelectableItem::new).collect();
                view.resolvers = resolvers.into_keys().map(SelectableItem::new).collect();
                view.preset_edit_values(api, known)
            },
        )
        .context("load policy editor")?;
        Ok(view)
    }

    pub fn existing(&self) -> Option<&str> {
        self.existing.as_deref()
    }

    fn preset_edit_values(&mut self, api: &dyn ConfigApi, known: Option<&[Policy]>) -> Result<()> {
        let Some(name) = self.existing.clone() else {
            return Ok(());
        };
        let from_list = known.and_then(|list| list.iter().find(|p| p.name == name).cloned());
        let policy = match from_list {
            Some(p) => p,
            None => api
                .get_policy(&name)?
                .ok_or_else(|| ApiError::NotFound(format!("policy {}", name)))?,
        };
        self.apply_policy(&policy)
    }

    fn apply_policy(&mut self, policy: &Policy) -> Result<()> {
        self.params.user = policy.user.join(",");
        self.params.active = policy.active;
        self.params.client = policy.client.join(",");
        tick_matching(&mut self.realms, &policy.realm);
        tick_matching(&mut self.resolvers, &policy.resolver);
        self.fill_action_list(&policy.scope, &policy.action)
    }

    /// Selects `scope` and rebuilds the action form, preset from `granted`.
    pub fn fill_action_list(&mut self, scope: &str, granted: &GrantedActions) -> Result<()> {
        let Some(schema) = self.defs.get(scope) else {
            bail!("unknown policy scope {:?}", scope);
        };
        self.actions = Some(ActionForm::materialize(schema, granted));
        tick_matching(&mut self.scopes, &[scope.to_string()]);
        self.params.scope = scope.to_string();
        Ok(())
    }

    /// Switches to another scope with no actions selected.
    pub fn select_scope(&mut self, scope: &str) -> Result<()> {
        self.fill_action_list(scope, &GrantedActions::new())
    }

    pub fn selected_scope(&self) -> Option<&str> {
        self.scopes
            .iter()
            .find(|s| s.ticked)
            .map(|s| s.name.as_str())
    }

    pub fn actions_mut(&mut self) -> Result<&mut ActionForm> {
        self.actions
            .as_mut()
            .context("select a scope before editing actions")
    }

    /// Ticks exactly the named realms; unknown names are rejected.
    pub fn select_realms(&mut self, names: &[String]) -> Result<()> {
        select_known(&mut self.realms, names, "realm")
    }

    pub fn select_resolvers(&mut self, names: &[String]) -> Result<()> {
        select_known(&mut self.resolvers, names, "resolver")
    }

    pub fn set_user(&mut self, user: &str) {
        self.params.user = split_csv(user).join(",");
    }

    pub fn set_client(&mut self, client: &str) {
        self.params.client = split_csv(client).join(",");
    }

    /// Assembles the policy from the current selections.
    pub fn build_params(&self) -> Result<PolicyParams> {
        let Some(scope) = self.selected_scope() else {
            bail!("no policy scope selected");
        };
        let Some(actions) = &self.actions else {
            bail!("no actions loaded for scope {:?}", scope);
        };
        Ok(PolicyParams {
            scope: scope.to_string(),
            realm: ticked_names(&self.realms),
            resolver: ticked_names(&self.resolvers),
            user: self.params.user.clone(),
            active: self.params.active,
            client: self.params.client.clone(),
            action: actions.to_action_list(),
        })
    }

    /// Saves the policy under `policy_name`.
    pub fn create_policy(&mut self, api: &dyn ConfigApi) -> Result<Ack> {
        if self.policy_name.trim().is_empty() {
            bail!("policy name is required");
        }
        let params = self.build_params()?;
        let ack = api.set_policy(&self.policy_name, &params)?;
        self.params = params;
        Ok(ack)
    }

    /// Enables `name` and reloads `list` so the overview shows the new state.
    pub fn enable_policy(
        &mut self,
        api: &dyn ConfigApi,
        list: &mut PolicyList,
        name: &str,
    ) -> Result<()> {
        list.set_active(api, name, true)?;
        self.params.active = true;
        Ok(())
    }

    pub fn disable_policy(
        &mut self,
        api: &dyn ConfigApi,
        list: &mut PolicyList,
        name: &str,
    ) -> Result<()> {
        list.set_active(api, name, false)?;
        self.params.active = false;
        Ok(())
    }
}

fn select_known(items: &mut [SelectableItem], names: &[String], what: &str) -> Result<()> {
    if let Some(missing) = names.iter().find(|n| !items.iter().any(|i| &i.name == *n)) {
        bail!("unknown {} {:?}", what, missing);
    }
    tick_matching(items, names);
    Ok(())
}

#[cfg(test)]
#[path = "../tests/views/policy_details_tests.rs"]
mod tests;
