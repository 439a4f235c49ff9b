use serde::{Deserialize, Serialize};

use crate::is_zero;

/// A Kubernetes cluster registered with the platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cluster {
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<ClusterEndpoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<ClusterResources>,
}

impl Cluster {
    /// Names of the frameworks attached to this cluster, in API order.
    #[must_use]
    pub fn framework_names(&self) -> Vec<&str> {
        self.resources
            .iter()
            .flat_map(|r| r.frameworks.iter())
            .map(|f| f.name.as_str())
            .collect()
    }

    /// Append frameworks to the resource list, creating it when absent.
    /// Existing entries are kept as they are.
    pub fn append_frameworks<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let resources = self.resources.get_or_insert_with(ClusterResources::default);
        resources
            .frameworks
            .extend(names.into_iter().map(|name| Framework { name: name.into() }));
    }
}

/// Connection details for a cluster's API server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClusterEndpoint {
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<String>,
    #[serde(default, deserialize_with = "crate::null_as_default", rename = "caCert", skip_serializing_if = "String::is_empty")]
    pub certificate: String,
    #[serde(default, deserialize_with = "crate::null_as_default", rename = "clientCert", skip_serializing_if = "String::is_empty")]
    pub client_certificate: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub client_key: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub token: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub username: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClusterResources {
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub frameworks: Vec<Framework>,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub ingress_controllers: Vec<IngressController>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IngressController {
    #[serde(default, deserialize_with = "crate::null_as_default", rename = "ingressIp", skip_serializing_if = "String::is_empty")]
    pub ingress_ip: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub service_type: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub r#type: String,
    #[serde(rename = "httpPort", skip_serializing_if = "is_zero")]
    pub http_port: i64,
    #[serde(rename = "httpsPort", skip_serializing_if = "is_zero")]
    pub https_port: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub protected_port: i64,
    pub debug: bool,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub acme_email: String,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub acme_server: String,
}

/// Framework reference inside a cluster's resources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Framework {
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "String::is_empty")]
    pub name: String,
}

// ── Manifest shape ────────────────────────────────────────────────────────────

/// Cluster as written in a manifest.
///
/// Differs from [`Cluster`] in two ways: frameworks are listed as
/// `frameworks: { name: [a, b] }`, and the credential fields may hold a
/// path to a file whose content replaces the value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterManifest {
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<ClusterEndpoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<ClusterResourcesManifest>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClusterResourcesManifest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frameworks: Option<FrameworkNames>,
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub ingress_controllers: Vec<IngressController>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameworkNames {
    #[serde(default, deserialize_with = "crate::null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub name: Vec<String>,
}

impl ClusterManifest {
    /// Convert to the API shape.
    ///
    /// `resolve` is applied to every non-empty credential field (token, CA
    /// cert, client cert, client key) and its result replaces the value.
    #[must_use]
    pub fn into_cluster(self, mut resolve: impl FnMut(&str) -> String) -> Cluster {
        let endpoint = self.endpoint.map(|mut ep| {
            for field in [
                &mut ep.token,
                &mut ep.certificate,
                &mut ep.client_certificate,
                &mut ep.client_key,
            ] {
                if !field.is_empty() {
                    *field = resolve(field.as_str());
                }
            }
            ep
        });

        let resources = self.resources.map(|r| ClusterResources {
            frameworks: r
                .frameworks
                .map(|f| f.name.into_iter().map(|name| Framework { name }).collect())
                .unwrap_or_default(),
            ingress_controllers: r.ingress_controllers,
        });

        Cluster {
            name: self.name,
            endpoint,
            resources,
        }
    }
}
