use anyhow::{Context, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::Client;
use tracing::debug;

use crate::types::Config;

/// Build a client from the configured kubeconfig, or let kube infer one.
pub async fn build_client(cfg: &Config) -> Result<Client> {
    match cfg.kubeconfig.as_ref() {
        Some(path) => {
            debug!("loading kubeconfig from {}", path.display());
            let kubeconfig = Kubeconfig::read_from(path)
                .with_context(|| format!("read kubeconfig {}", path.display()))?;
            let client_config = kube::Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
                .await
                .context("build config from kubeconfig")?;
            Client::try_from(client_config).context("create kube client")
        }
        None => Client::try_default().await.context("infer kube client config"),
    }
}
