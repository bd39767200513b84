/// The set of namespaces to summarize could not be determined. Fatal.
#[derive(thiserror::Error, Debug)]
pub enum ResolutionError {
    #[error("list namespaces failed: {0}")]
    ListNamespaces(#[source] kube::Error),
    #[error("get namespace {namespace} failed: {source}")]
    GetNamespace {
        namespace: String,
        #[source]
        source: kube::Error,
    },
}

/// Pods of one namespace could not be listed. The namespace is skipped.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("list pods in namespace {namespace} failed: {source}")]
    ListPods {
        namespace: String,
        #[source]
        source: kube::Error,
    },
}

impl FetchError {
    pub fn namespace(&self) -> &str {
        match self {
            FetchError::ListPods { namespace, .. } => namespace,
        }
    }
}
