use std::{fs, path::Path};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::kube_dir;

// region: Cluster
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct ClusterSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_authority_data: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Cluster {
    pub name: String,
    pub cluster: ClusterSpec,
}
// endregion

// region: User
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct UserSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_certificate_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_key_data: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct User {
    pub name: String,
    pub user: UserSpec,
}
// endregion

/// The subset of a kube config this tool consumes. Contexts, preferences,
/// auth plugins and anything else in the file are ignored on parse, as are
/// credential fields that reference files instead of carrying inline data.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct KubeConfig {
    pub clusters: Vec<Cluster>,
    pub users: Vec<User>,
}

impl KubeConfig {
    pub fn read_from(path: impl AsRef<Path>) -> anyhow::Result<KubeConfig> {
        Ok(serde_yaml::from_reader(
            fs::OpenOptions::new()
                .read(true)
                .open(path)
                .context("Opening kube config")?,
        )
        .context("Parsing kube config")?)
    }
}

pub fn read_config() -> anyhow::Result<KubeConfig> {
    KubeConfig::read_from(kube_dir().join("config"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_kebab_case_data_fields() {
        let config: KubeConfig = serde_yaml::from_str(
            r#"
apiVersion: v1
kind: Config
current-context: federation
clusters:
- name: federation
  cluster:
    server: https://federation-apiserver.federation-system:443
    certificate-authority-data: Q0EtREFUQQo=
users:
- name: federation
  user:
    client-certificate-data: Q0VSVAo=
    client-key-data: S0VZCg==
"#,
        )
        .unwrap();

        assert_eq!(config.clusters.len(), 1);
        assert_eq!(
            config.clusters[0].cluster.certificate_authority_data.as_deref(),
            Some("Q0EtREFUQQo=")
        );
        assert_eq!(
            config.users[0].user.client_key_data.as_deref(),
            Some("S0VZCg==")
        );
    }

    #[test]
    fn entries_without_inline_data_parse_as_none() {
        let config: KubeConfig = serde_yaml::from_str(
            r#"
clusters:
- name: minikube
  cluster:
    server: https://192.168.99.100:8443
    certificate-authority: /home/user/.minikube/ca.crt
users:
- name: minikube
  user:
    token: abc123
"#,
        )
        .unwrap();

        assert!(config.clusters[0].cluster.certificate_authority_data.is_none());
        assert!(config.users[0].user.client_certificate_data.is_none());
        assert!(config.users[0].user.client_key_data.is_none());
    }
}
