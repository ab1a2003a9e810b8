use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::configmap::ConfigMap;
use crate::errors::{EntryKind, ExtractError, ExtractResult};
use crate::kubeconfig::{Cluster, KubeConfig, User};

/// Name of the cluster and user entries holding federation credentials.
pub const FEDERATION: &str = "federation";

const CA_DATA: &str = "certificate-authority-data";
const CERT_DATA: &str = "client-certificate-data";
const KEY_DATA: &str = "client-key-data";

pub fn find_cluster<'a>(config: &'a KubeConfig, name: &str) -> ExtractResult<&'a Cluster> {
    config
        .clusters
        .iter()
        .find(|c| c.name == name)
        .ok_or_else(|| ExtractError::NotFound {
            kind: EntryKind::Cluster,
            name: name.to_owned(),
        })
}

pub fn find_user<'a>(config: &'a KubeConfig, name: &str) -> ExtractResult<&'a User> {
    config
        .users
        .iter()
        .find(|u| u.name == name)
        .ok_or_else(|| ExtractError::NotFound {
            kind: EntryKind::User,
            name: name.to_owned(),
        })
}

/// Base64-decodes `data`, then drops the decoded payload's final byte.
///
/// The stripped byte is the trailing newline PEM encoders append.
/// Downstream consumers expect the stripped form, so the strip is
/// unconditional; an empty payload fails instead of underflowing.
pub fn decode_and_trim(field: &'static str, data: &str) -> ExtractResult<Vec<u8>> {
    let mut decoded = STANDARD
        .decode(data)
        .map_err(|source| ExtractError::Decode { field, source })?;

    if decoded.pop().is_none() {
        return Err(ExtractError::TrimUnderflow { field });
    }

    Ok(decoded)
}

fn required<'a>(
    data: &'a Option<String>,
    kind: EntryKind,
    name: &str,
    field: &'static str,
) -> ExtractResult<&'a str> {
    data.as_deref().ok_or_else(|| ExtractError::MissingData {
        kind,
        name: name.to_owned(),
        field,
    })
}

fn decoded_string(field: &'static str, data: &str) -> ExtractResult<String> {
    String::from_utf8(decode_and_trim(field, data)?)
        .map_err(|source| ExtractError::Utf8 { field, source })
}

/// Builds the `federation-credentials` ConfigMap from the `federation`
/// cluster and user entries. First match wins when names repeat.
pub fn extract(config: &KubeConfig) -> ExtractResult<ConfigMap> {
    let cluster = find_cluster(config, FEDERATION)?;
    let user = find_user(config, FEDERATION)?;

    let cadata = required(
        &cluster.cluster.certificate_authority_data,
        EntryKind::Cluster,
        &cluster.name,
        CA_DATA,
    )?;
    let certdata = required(
        &user.user.client_certificate_data,
        EntryKind::User,
        &user.name,
        CERT_DATA,
    )?;
    let keydata = required(
        &user.user.client_key_data,
        EntryKind::User,
        &user.name,
        KEY_DATA,
    )?;

    Ok(ConfigMap::federation_credentials(
        decoded_string(CA_DATA, cadata)?,
        decoded_string(CERT_DATA, certdata)?,
        decoded_string(KEY_DATA, keydata)?,
    ))
}
