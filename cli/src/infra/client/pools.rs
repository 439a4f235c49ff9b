//! Pools and plans. Single-item lookups list the collection and filter.

use shipa_types::{CreatePlanRequest, CreatePoolRequest, Plan, Pool, UpdatePoolRequest};

use super::{API_PLANS, API_POOLS, ShipaClient, find_by};
use crate::application::ports::{PlanApi, PoolApi, Transport};
use crate::domain::ApiResult;

impl<T: Transport> PoolApi for ShipaClient<T> {
    fn list_pools(&self) -> ApiResult<Vec<Pool>> {
        self.get(&[API_POOLS])
    }

    fn get_pool(&self, name: &str) -> ApiResult<Pool> {
        find_by(self.list_pools()?, "framework", name, |p| p.name.as_str())
    }

    fn create_pool(&self, request: &CreatePoolRequest) -> ApiResult<()> {
        self.post(request, &[API_POOLS])
    }

    fn update_pool(&self, request: &UpdatePoolRequest) -> ApiResult<()> {
        self.put(request, &[API_POOLS, request.name.as_str()])
    }

    fn delete_pool(&self, name: &str) -> ApiResult<()> {
        self.delete(&[API_POOLS, name])
    }
}

impl<T: Transport> PlanApi for ShipaClient<T> {
    fn list_plans(&self) -> ApiResult<Vec<Plan>> {
        self.get(&[API_PLANS])
    }

    fn get_plan(&self, name: &str) -> ApiResult<Plan> {
        find_by(self.list_plans()?, "plan", name, |p| p.name.as_str())
    }

    fn create_plan(&self, request: &CreatePlanRequest) -> ApiResult<()> {
        self.post(request, &[API_PLANS])
    }

    fn delete_plan(&self, name: &str) -> ApiResult<()> {
        self.delete(&[API_PLANS, name])
    }
}
