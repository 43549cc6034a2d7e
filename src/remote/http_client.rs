use serde::Serialize;
use serde::de::DeserializeOwned;

use super::*;

impl RemoteClient {
    pub(super) fn ensure_ok(
        &self,
        resp: reqwest::blocking::Response,
        label: &str,
    ) -> Result<reqwest::blocking::Response> {
        if resp.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized.into());
        }
        if resp.status() == reqwest::StatusCode::FORBIDDEN {
            return Err(ApiError::Forbidden.into());
        }
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(label.to_string()).into());
        }
        // The server reports most failures as a 400 with a `status: false`
        // envelope; let those through so the envelope error surfaces.
        if resp.status() == reqwest::StatusCode::BAD_REQUEST {
            return Ok(resp);
        }
        resp.error_for_status()
            .with_context(|| format!("{} status", label))
    }

    /// Builds `base_url/seg1/seg2/...`, percent-encoding each segment.
    ///
    /// An empty last segment yields a trailing slash (`["policy", ""]` is
    /// `/policy/`).
    pub(super) fn endpoint(&self, segments: &[&str]) -> Result<reqwest::Url> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .with_context(|| format!("parse server url {}", self.base_url))?;
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("server url {} cannot take a path", self.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn authorize(
        &self,
        req: reqwest::blocking::RequestBuilder,
    ) -> reqwest::blocking::RequestBuilder {
        match &self.token {
            Some(token) => req.header(reqwest::header::AUTHORIZATION, token.as_str()),
            None => req,
        }
    }

    fn envelope<T: DeserializeOwned>(
        &self,
        resp: reqwest::blocking::Response,
        label: &str,
    ) -> Result<(T, EnvelopeDetail)> {
        let env: Envelope<T> = self
            .ensure_ok(resp, label)?
            .json()
            .with_context(|| format!("parse {}", label))?;
        Ok(env.into_value_and_detail(label)?)
    }

    pub(super) fn get_value<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        label: &str,
    ) -> Result<T> {
        self.get_query_value(segments, &[], label)
    }

    pub(super) fn get_query_value<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
        label: &str,
    ) -> Result<T> {
        let url = self.endpoint(segments)?;
        tracing::debug!(path = url.path(), "GET");
        let mut req = self.client.get(url);
        if !query.is_empty() {
            req = req.query(query);
        }
        let resp = self
            .authorize(req)
            .send()
            .with_context(|| label.to_string())?;
        Ok(self.envelope(resp, label)?.0)
    }

    pub(super) fn post_value<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
        label: &str,
    ) -> Result<(T, EnvelopeDetail)> {
        let url = self.endpoint(segments)?;
        tracing::debug!(path = url.path(), "POST");
        let resp = self
            .authorize(self.client.post(url))
            .json(body)
            .send()
            .with_context(|| label.to_string())?;
        self.envelope(resp, label)
    }

    pub(super) fn delete_value<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        label: &str,
    ) -> Result<T> {
        let url = self.endpoint(segments)?;
        tracing::debug!(path = url.path(), "DELETE");
        let resp = self
            .authorize(self.client.delete(url))
            .send()
            .with_context(|| label.to_string())?;
        Ok(self.envelope(resp, label)?.0)
    }
}

#[cfg(test)]
#[path = "../tests/remote/http_client_tests.rs"]
mod tests;
