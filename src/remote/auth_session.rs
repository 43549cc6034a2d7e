use super::*;

impl RemoteClient {
    /// Exchanges admin credentials for an authorization token.
    pub fn login(&self, username: &str, password: &str) -> Result<String> {
        let (value, _): (AuthValue, _) = self.post_value(
            &["auth"],
            &AuthRequest { username, password },
            "login",
        )?;
        Ok(value.token)
    }
}
