//! Clusters and framework configurations.

use shipa_types::{Cluster, PoolConfig};

use super::{API_CLUSTERS, API_FRAMEWORKS_CONFIG, ShipaClient};
use crate::application::ports::{ClusterApi, FrameworkApi, Transport};
use crate::domain::ApiResult;

impl<T: Transport> ClusterApi for ShipaClient<T> {
    fn get_cluster(&self, name: &str) -> ApiResult<Cluster> {
        self.lookup("cluster", name, &[API_CLUSTERS, name])
    }

    fn create_cluster(&self, cluster: &Cluster) -> ApiResult<()> {
        self.post(cluster, &[API_CLUSTERS])
    }

    fn update_cluster(&self, cluster: &Cluster) -> ApiResult<()> {
        self.put(cluster, &[API_CLUSTERS, cluster.name.as_str()])
    }

    fn delete_cluster(&self, name: &str) -> ApiResult<()> {
        self.delete(&[API_CLUSTERS, name])
    }
}

impl<T: Transport> FrameworkApi for ShipaClient<T> {
    fn get_framework(&self, name: &str) -> ApiResult<PoolConfig> {
        self.lookup("framework", name, &[API_FRAMEWORKS_CONFIG, name])
    }

    fn create_framework(&self, config: &PoolConfig) -> ApiResult<()> {
        self.post(config, &[API_FRAMEWORKS_CONFIG])
    }

    /// The platform takes updates on the collection, keyed by the body.
    fn update_framework(&self, config: &PoolConfig) -> ApiResult<()> {
        self.put(config, &[API_FRAMEWORKS_CONFIG])
    }
}
