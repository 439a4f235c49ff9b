//! Framework (pool) configuration tree served by `frameworks-config`.

use serde::{Deserialize, Serialize};

use crate::network::NetworkPolicyConfig;

/// Framework configuration. The API keys the name as `shipaFramework`;
/// manifests use `name`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    #[serde(default, deserialize_with = "crate::null_as_default", rename = "shipaFramework", alias = "name")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<PoolResources>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolResources {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub general: Option<PoolGeneral>,
    #[serde(rename = "shipaNode", skip_serializing_if = "Option::is_none")]
    pub node: Option<PoolNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PoolNode {
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub drivers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scale: Option<PoolAutoScale>,
}

/// Node autoscaler bounds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PoolAutoScale {
    pub max_container: i64,
    pub max_memory: i64,
    pub scale_down: f64,
    pub rebalance: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PoolGeneral {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup: Option<PoolSetup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<PoolPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<PoolSecurity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access: Option<PoolServiceAccess>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<PoolServiceAccess>,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub router: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_policy: Option<PoolContainerPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_selectors: Option<NodeSelectors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pod_auto_scaler: Option<PodAutoScaler>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_policy: Option<DomainPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_auto_discovery: Option<AppAutoDiscovery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_policy: Option<PoolNetworkPolicy>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppAutoDiscovery {
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub app_selector: Vec<AppSelectorLabels>,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub suffix: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSelectorLabels {
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DomainPolicy {
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub allowed_cnames: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PodAutoScaler {
    pub min_replicas: i64,
    pub max_replicas: i64,
    #[serde(rename = "targetCPUUtilizationPercentage")]
    pub target_cpu_utilization_percentage: i64,
    pub disable_app_override: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeSelectors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms: Option<NodeSelectorsTerms>,
    pub strict: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeSelectorsTerms {
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub environment: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub os: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PoolContainerPolicy {
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub allowed_hosts: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolServiceAccess {
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub append: Vec<String>,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub blacklist: Vec<String>,
}

/// Image scan policy for apps deployed to the framework.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PoolSecurity {
    pub disable_scan: bool,
    pub scan_platform_layers: bool,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub ignore_components: Vec<String>,
    #[serde(default, deserialize_with = "crate::null_as_default", rename = "ignoreCves", skip_serializing_if = "Vec::is_empty")]
    pub ignore_cves: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolPlan {
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PoolSetup {
    pub default: bool,
    pub public: bool,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub provisioner: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub kubernetes_namespace: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PoolNetworkPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingress: Option<NetworkPolicyConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub egress: Option<NetworkPolicyConfig>,
    pub disable_app_policies: bool,
}
