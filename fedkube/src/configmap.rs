use serde::{Deserialize, Serialize};

pub const CONFIG_MAP_NAME: &str = "federation-credentials";
pub const CONFIG_MAP_NAMESPACE: &str = "kube-system";
pub const CREDENTIAL_TYPE: &str = "tls";
pub const FEDERATION_HOST: &str = "https://federation-apiserver.federation-system:443";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub name: String,
    pub namespace: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CredentialData {
    #[serde(rename = "type")]
    pub credential_type: String,
    pub cadata: String,
    pub certdata: String,
    pub keydata: String,
    pub host: String,
}

/// The `federation-credentials` ConfigMap consumed by rudder in the
/// `kube-system` namespace. Only the `tls` credential shape is emitted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ConfigMap {
    #[serde(rename = "apiVersion")]
    pub api_version: String,
    pub kind: String,
    pub metadata: Metadata,
    pub data: CredentialData,
}

impl ConfigMap {
    pub fn federation_credentials(cadata: String, certdata: String, keydata: String) -> Self {
        ConfigMap {
            api_version: "v1".to_owned(),
            kind: "ConfigMap".to_owned(),
            metadata: Metadata {
                name: CONFIG_MAP_NAME.to_owned(),
                namespace: CONFIG_MAP_NAMESPACE.to_owned(),
            },
            data: CredentialData {
                credential_type: CREDENTIAL_TYPE.to_owned(),
                cadata,
                certdata,
                keydata,
                host: FEDERATION_HOST.to_owned(),
            },
        }
    }
}
