use std::path::PathBuf;

use fedkube::{extract, read_config, KubeConfig};

fn main() -> anyhow::Result<()> {
    let config = match std::env::args_os().nth(1) {
        Some(path) => KubeConfig::read_from(PathBuf::from(path))?,
        None => read_config()?,
    };

    let config_map = extract(&config)?;

    serde_yaml::to_writer(std::io::stdout(), &config_map)?;

    Ok(())
}
