use async_trait::async_trait;
use k8s_openapi::api::core::v1::{Namespace, Pod};
use kube::{api::ListParams, Api, Client};
use tracing::{debug, warn};

use crate::error::{FetchError, ResolutionError};
use crate::parsing::snapshot_from_pod;
use crate::report::RunSummary;
use crate::types::PodSnapshot;

/// Where namespaces and pod snapshots come from
#[async_trait]
pub trait PodSource {
    /// The explicit namespace if given, otherwise every namespace in the cluster.
    async fn resolve_namespaces(&self, namespace: Option<&str>) -> Result<Vec<String>, ResolutionError>;

    async fn list_pods(&self, namespace: &str) -> Result<Vec<PodSnapshot>, FetchError>;
}

/// Pod source backed by the Kubernetes API
pub struct KubePodSource {
    client: Client,
}

impl KubePodSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PodSource for KubePodSource {
    async fn resolve_namespaces(&self, namespace: Option<&str>) -> Result<Vec<String>, ResolutionError> {
        let ns_api: Api<Namespace> = Api::all(self.client.clone());
        match namespace {
            Some(name) => {
                // Fail early on a namespace that does not exist
                let ns = ns_api
                    .get(name)
                    .await
                    .map_err(|source| ResolutionError::GetNamespace {
                        namespace: name.to_string(),
                        source,
                    })?;
                Ok(vec![ns.metadata.name.unwrap_or_else(|| name.to_string())])
            }
            None => {
                let list = ns_api
                    .list(&ListParams::default())
                    .await
                    .map_err(ResolutionError::ListNamespaces)?;
                Ok(list.items.into_iter().filter_map(|ns| ns.metadata.name).collect())
            }
        }
    }

    async fn list_pods(&self, namespace: &str) -> Result<Vec<PodSnapshot>, FetchError> {
        let pod_api: Api<Pod> = Api::namespaced(self.client.clone(), namespace);
        let pods = pod_api
            .list(&ListParams::default())
            .await
            .map_err(|source| FetchError::ListPods {
                namespace: namespace.to_string(),
                source,
            })?;
        Ok(pods.items.iter().map(snapshot_from_pod).collect())
    }
}

/// Result of fetching one namespace
pub enum NamespaceOutcome {
    Fetched { namespace: String, pods: Vec<PodSnapshot> },
    Failed(FetchError),
}

/// Drives a run: fetch each namespace in turn and fold what comes back.
pub struct SummaryCollector<'a, S: PodSource + ?Sized> {
    source: &'a S,
}

impl<'a, S: PodSource + ?Sized> SummaryCollector<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    pub async fn fetch_namespace(&self, namespace: &str) -> NamespaceOutcome {
        match self.source.list_pods(namespace).await {
            Ok(pods) => NamespaceOutcome::Fetched {
                namespace: namespace.to_string(),
                pods,
            },
            Err(e) => NamespaceOutcome::Failed(e),
        }
    }

    /// Summarize the given namespaces. Fetch failures are logged and skipped.
    pub async fn collect(&self, namespaces: &[String]) -> RunSummary {
        let mut summary = RunSummary::new();

        for ns in namespaces {
            match self.fetch_namespace(ns).await {
                NamespaceOutcome::Fetched { namespace, pods } => {
                    debug!("namespace {}: {} pods", namespace, pods.len());
                    summary.add_namespace(&namespace, &pods);
                }
                NamespaceOutcome::Failed(e) => {
                    warn!("{}", e);
                    summary.add_failed_namespace(e.namespace());
                }
            }
        }

        summary
    }

    /// Resolve the target namespaces, then collect. Resolution failure aborts
    /// before anything is counted.
    pub async fn run(&self, namespace: Option<&str>) -> Result<RunSummary, ResolutionError> {
        let namespaces = self.source.resolve_namespaces(namespace).await?;
        debug!("resolved {} namespaces", namespaces.len());
        Ok(self.collect(&namespaces).await)
    }
}
