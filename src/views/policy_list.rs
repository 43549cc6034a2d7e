use anyhow::Result;

use crate::model::Policy;
use crate::remote::ConfigApi;

/// The policy overview screen.
#[derive(Clone, Debug, Default)]
pub struct PolicyList {
    pub policies: Vec<Policy>,
}

impl PolicyList {
    pub fn load(api: &dyn ConfigApi) -> Result<Self> {
        let mut view = Self::default();
        view.refresh(api)?;
        Ok(view)
    }

    pub fn refresh(&mut self, api: &dyn ConfigApi) -> Result<()> {
        self.policies = api.get_policies()?;
        tracing::debug!(count = self.policies.len(), "fetched policies");
        Ok(())
    }

    pub fn find(&self, name: &str) -> Option<&Policy> {
        self.policies.iter().find(|p| p.name == name)
    }

    /// Enables or disables a policy and reloads the list.
    pub fn set_active(&mut self, api: &dyn ConfigApi, name: &str, active: bool) -> Result<()> {
        if active {
            api.enable_policy(name)?;
        } else {
            api.disable_policy(name)?;
        }
        self.refresh(api)
    }

    /// Deletes a policy and reloads the list.
    pub fn delete(&mut self, api: &dyn ConfigApi, name: &str) -> Result<()> {
        api.del_policy(name)?;
        self.refresh(api)
    }
}
