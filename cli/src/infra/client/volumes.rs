use shipa_types::{CreateVolumePlanRequest, Volume, VolumeBinding, VolumePlan, VolumePlanResponse};

use super::{API_VOLUME_PLANS, API_VOLUMES, ShipaClient};
use crate::application::ports::{Transport, VolumeApi, VolumePlanApi};
use crate::domain::ApiResult;

impl<T: Transport> VolumeApi for ShipaClient<T> {
    fn get_volume(&self, name: &str) -> ApiResult<Volume> {
        self.lookup("volume", name, &[API_VOLUMES, name])
    }

    fn create_volume(&self, volume: &Volume) -> ApiResult<()> {
        self.post(volume, &[API_VOLUMES])
    }

    /// Updates are POSTed to the item.
    fn update_volume(&self, volume: &Volume) -> ApiResult<()> {
        self.post(volume, &[API_VOLUMES, volume.name.as_str()])
    }

    fn delete_volume(&self, name: &str) -> ApiResult<()> {
        self.delete(&[API_VOLUMES, name])
    }

    fn bind_volume(&self, binding: &VolumeBinding) -> ApiResult<()> {
        self.post(binding, &[API_VOLUMES, binding.volume.as_str(), "bind"])
    }

    fn unbind_volume(&self, binding: &VolumeBinding) -> ApiResult<()> {
        self.delete_with_payload(binding, &[API_VOLUMES, binding.volume.as_str(), "bind"])
    }
}

impl<T: Transport> VolumePlanApi for ShipaClient<T> {
    fn get_volume_plan(&self, name: &str) -> ApiResult<VolumePlan> {
        let resp: VolumePlanResponse = self.lookup("volume plan", name, &[API_VOLUME_PLANS, name])?;
        Ok(resp.into())
    }

    fn create_volume_plan(&self, plan: &VolumePlan) -> ApiResult<()> {
        self.post(&CreateVolumePlanRequest::from(plan), &[API_VOLUME_PLANS])
    }

    fn update_volume_plan(&self, plan: &VolumePlan) -> ApiResult<()> {
        self.put(
            &CreateVolumePlanRequest::from(plan),
            &[API_VOLUME_PLANS, plan.name.as_str()],
        )
    }

    fn delete_volume_plan(&self, name: &str) -> ApiResult<()> {
        self.delete(&[API_VOLUME_PLANS, name])
    }
}
