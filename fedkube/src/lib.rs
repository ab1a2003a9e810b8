pub mod configmap;
pub mod errors;
pub mod extract;
pub mod kubeconfig;

use std::path::{Path, PathBuf};

pub use configmap::ConfigMap;
pub use errors::{ExtractError, ExtractResult};
pub use extract::extract;
pub use kubeconfig::{read_config, KubeConfig};

pub fn kube_dir() -> PathBuf {
    let home = std::env::var("HOME").unwrap();
    Path::new(&home).join(".kube")
}
