//! Typed platform API client.
//!
//! `ShipaClient` owns a `Transport` and implements the resource port traits
//! on top of a handful of verb helpers. Each helper applies the status
//! policy for its verb class and the body checks the platform needs.

mod access;
mod apps;
mod clusters;
mod jobs;
mod pools;
mod volumes;

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::application::ports::{PlanApi, Transport};
use crate::domain::response::{self, VerbClass};
use crate::domain::{ApiRequest, ApiResult, ClientConfig, DeployForm, Method, PlatformError};
use crate::infra::transport::HttpTransport;

pub(crate) const API_CLUSTERS: &str = "provisioner/clusters";
pub(crate) const API_FRAMEWORKS_CONFIG: &str = "frameworks-config";
pub(crate) const API_POOLS: &str = "pools";
pub(crate) const API_APPS: &str = "apps";
pub(crate) const API_USERS: &str = "users";
pub(crate) const API_PLANS: &str = "plans";
pub(crate) const API_TEAMS: &str = "teams";
pub(crate) const API_ROLES: &str = "roles";
pub(crate) const API_VOLUMES: &str = "volumes";
pub(crate) const API_VOLUME_PLANS: &str = "volume-plans";
pub(crate) const API_JOBS: &str = "jobs";

/// Client for the platform REST API.
pub struct ShipaClient<T = HttpTransport> {
    transport: T,
}

impl ShipaClient<HttpTransport> {
    /// Build an HTTP client and check the token by listing plans.
    ///
    /// # Errors
    ///
    /// Returns `shipa client auth failed: ...` when the probe fails.
    pub fn connect(config: &ClientConfig) -> Result<Self> {
        let client = Self::new(HttpTransport::new(config));
        client.list_plans().context("shipa client auth failed")?;
        tracing::debug!(host = %config.host, "authenticated");
        Ok(client)
    }
}

impl<T: Transport> ShipaClient<T> {
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// GET a collection or object: exactly 200, then decode.
    pub(crate) fn get<R: DeserializeOwned>(&self, path: &[&str]) -> ApiResult<R> {
        let resp = self.transport.send(&ApiRequest::new(Method::Get, path))?;
        response::check_status(VerbClass::Get, &resp)?;
        response::decode(&resp)
    }

    /// GET one object by key. Absence is reported as `NotFound`.
    pub(crate) fn lookup<R: DeserializeOwned>(
        &self,
        kind: &'static str,
        name: &str,
        path: &[&str],
    ) -> ApiResult<R> {
        let resp = self.transport.send(&ApiRequest::new(Method::Get, path))?;
        response::check_lookup(&resp, kind, name)?;
        response::decode(&resp)
    }

    /// POST a JSON payload: 200 or 201, then the trailing-line error check.
    pub(crate) fn post(&self, payload: &impl Serialize, path: &[&str]) -> ApiResult<()> {
        let req = ApiRequest::new(Method::Post, path).json(encode(payload)?);
        let resp = self.transport.send(&req)?;
        response::check_create(&resp)
    }

    /// Like [`Self::post`], then decode the body.
    pub(crate) fn post_with_result<R: DeserializeOwned>(
        &self,
        payload: &impl Serialize,
        path: &[&str],
    ) -> ApiResult<R> {
        let req = ApiRequest::new(Method::Post, path).json(encode(payload)?);
        let resp = self.transport.send(&req)?;
        response::check_create(&resp)?;
        response::decode(&resp)
    }

    pub(crate) fn put(&self, payload: &impl Serialize, path: &[&str]) -> ApiResult<()> {
        let req = ApiRequest::new(Method::Put, path).json(encode(payload)?);
        let resp = self.transport.send(&req)?;
        response::check_status(VerbClass::Put, &resp)
    }

    pub(crate) fn delete(&self, path: &[&str]) -> ApiResult<()> {
        self.send_delete(ApiRequest::new(Method::Delete, path))
    }

    pub(crate) fn delete_with_query(
        &self,
        path: &[&str],
        query: Vec<(String, String)>,
    ) -> ApiResult<()> {
        let mut req = ApiRequest::new(Method::Delete, path);
        req.query = query;
        self.send_delete(req)
    }

    pub(crate) fn delete_with_payload(
        &self,
        payload: &impl Serialize,
        path: &[&str],
    ) -> ApiResult<()> {
        self.send_delete(ApiRequest::new(Method::Delete, path).json(encode(payload)?))
    }

    /// POST a URL-encoded deploy form: 200, 201 or 202, then the deploy
    /// body checks.
    pub(crate) fn post_form(&self, form: &DeployForm, path: &[&str]) -> ApiResult<()> {
        let req = ApiRequest::new(Method::Post, path).form(form.pairs());
        let resp = self.transport.send(&req)?;
        tracing::debug!(status = resp.status, body = %resp.text(), "deploy response");
        response::check_deploy(&resp)
    }

    fn send_delete(&self, req: ApiRequest) -> ApiResult<()> {
        let resp = self.transport.send(&req)?;
        response::check_status(VerbClass::Delete, &resp)
    }
}

fn encode(payload: &impl Serialize) -> ApiResult<serde_json::Value> {
    serde_json::to_value(payload).map_err(|e| PlatformError::Encode(e.to_string()))
}

/// Find `name` in a listed collection, or report it missing.
pub(crate) fn find_by<I, F>(items: Vec<I>, kind: &'static str, name: &str, key: F) -> ApiResult<I>
where
    F: Fn(&I) -> &str,
{
    items
        .into_iter()
        .find(|item| key(item) == name)
        .ok_or_else(|| PlatformError::NotFound {
            kind,
            name: name.to_string(),
        })
}
