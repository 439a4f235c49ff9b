use shipa_types::{Job, JobCreateRequest};

use super::{API_JOBS, ShipaClient};
use crate::application::ports::{JobApi, Transport};
use crate::domain::ApiResult;

impl<T: Transport> JobApi for ShipaClient<T> {
    fn list_jobs(&self) -> ApiResult<Vec<Job>> {
        self.get(&[API_JOBS])
    }

    fn get_job(&self, id: &str) -> ApiResult<Job> {
        self.lookup("job", id, &[API_JOBS, id])
    }

    fn create_job(&self, request: &JobCreateRequest) -> ApiResult<Job> {
        self.post_with_result(request, &[API_JOBS])
    }

    fn delete_job(&self, id: &str) -> ApiResult<()> {
        self.delete(&[API_JOBS, id])
    }
}
