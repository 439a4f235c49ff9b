//! Apps and the per-app settings: env, cname, network policy, deploys.

use shipa_types::{
    App, AppCname, AppDeployment, AppEnv, CreateAppEnv, DeleteCnameRequest, NetworkPolicy,
    UpdateAppRequest,
};

use super::{API_APPS, ShipaClient};
use crate::application::ports::{AppApi, AppCnameApi, AppEnvApi, DeployApi, NetworkPolicyApi, Transport};
use crate::domain::{ApiResult, DeployForm};

impl<T: Transport> AppApi for ShipaClient<T> {
    fn list_apps(&self) -> ApiResult<Vec<App>> {
        self.get(&[API_APPS])
    }

    fn get_app(&self, name: &str) -> ApiResult<App> {
        self.lookup("app", name, &[API_APPS, name])
    }

    fn create_app(&self, app: &App) -> ApiResult<()> {
        self.post(app, &[API_APPS])
    }

    fn update_app(&self, name: &str, request: &UpdateAppRequest) -> ApiResult<()> {
        self.put(request, &[API_APPS, name])
    }

    fn delete_app(&self, name: &str) -> ApiResult<()> {
        self.delete(&[API_APPS, name])
    }
}

impl<T: Transport> AppEnvApi for ShipaClient<T> {
    fn create_app_envs(&self, request: &CreateAppEnv) -> ApiResult<()> {
        self.post(request, &[API_APPS, request.app.as_str(), "env"])
    }

    fn get_app_envs(&self, app: &str) -> ApiResult<Vec<AppEnv>> {
        self.get(&[API_APPS, app, "env"])
    }

    fn delete_app_envs(&self, request: &CreateAppEnv) -> ApiResult<()> {
        if request.envs.is_empty() {
            return Ok(());
        }
        let mut query = vec![("norestart".to_string(), request.norestart.to_string())];
        query.extend(
            request
                .envs
                .iter()
                .map(|env| ("env".to_string(), env.name.clone())),
        );
        self.delete_with_query(&[API_APPS, request.app.as_str(), "env"], query)
    }
}

impl<T: Transport> AppCnameApi for ShipaClient<T> {
    fn create_app_cname(&self, cname: &AppCname) -> ApiResult<()> {
        self.post(&cname.with_scheme(), &[API_APPS, cname.app.as_str(), "cname"])
    }

    fn update_app_cname(&self, cname: &AppCname) -> ApiResult<()> {
        self.put(&cname.with_scheme(), &[API_APPS, cname.app.as_str(), "cname"])
    }

    fn delete_app_cname(&self, request: &DeleteCnameRequest) -> ApiResult<()> {
        self.delete_with_payload(request, &[API_APPS, request.app.as_str(), "cname"])
    }
}

impl<T: Transport> NetworkPolicyApi for ShipaClient<T> {
    fn put_network_policy(&self, policy: &NetworkPolicy) -> ApiResult<()> {
        self.put(policy, &[API_APPS, policy.app.as_str(), "network-policy"])
    }

    fn get_network_policy(&self, app: &str) -> ApiResult<NetworkPolicy> {
        let mut policy: NetworkPolicy =
            self.lookup("network policy", app, &[API_APPS, app, "network-policy"])?;
        policy.app = app.to_string();
        Ok(policy)
    }

    fn delete_network_policy(&self, app: &str) -> ApiResult<()> {
        self.delete(&[API_APPS, app, "network-policy"])
    }
}

impl<T: Transport> DeployApi for ShipaClient<T> {
    fn deploy_app(&self, app: &str, form: &DeployForm) -> ApiResult<()> {
        self.post_form(form, &[API_APPS, app, "deploy"])
    }

    fn list_deployments(&self, app: &str) -> ApiResult<Vec<AppDeployment>> {
        self.get(&[API_APPS, app, "deployments"])
    }
}
