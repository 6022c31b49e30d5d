use crate::error::{DockLabelError, Result};
use crate::result::{ContainerResult, Label, LabelResult, QueryResult, ServiceResult};
use crate::runtime::Runtime;
use crate::stack::{merge_service_labels, ConflictPolicy, STACK_NAMESPACE_LABEL};
use tracing::debug;

/// Label queries against a container runtime.
///
/// Each operation issues exactly one runtime call and then transforms
/// the response locally. Any runtime failure collapses into
/// [`DockLabelError::NoSuchElement`] carrying the queried identifier;
/// the underlying cause stays reachable through `Error::source()`.
pub struct LabelClient<R> {
    runtime: R,
    conflict_policy: ConflictPolicy,
}

impl<R: Runtime> LabelClient<R> {
    pub fn new(runtime: R) -> Self {
        Self {
            runtime,
            conflict_policy: ConflictPolicy::default(),
        }
    }

    /// Choose how stack aggregation resolves conflicting label values.
    /// Defaults to [`ConflictPolicy::LastWriterWins`].
    pub fn with_conflict_policy(mut self, policy: ConflictPolicy) -> Self {
        self.conflict_policy = policy;
        self
    }

    /// Current labels of the container with this id, without any field
    /// description.
    pub async fn labels_from_container(&self, container_id: &str) -> Result<LabelResult> {
        debug!("Inspecting container {}", container_id);

        let record = self
            .runtime
            .inspect_container(container_id)
            .await
            .map_err(|e| {
                debug!("Container inspect failed: {}", e);
                DockLabelError::no_such_element(container_id, e)
            })?;

        Ok(QueryResult::from_label_map(
            &record.labels.unwrap_or_default(),
        ))
    }

    /// Current labels of the service with this id.
    pub async fn labels_from_service(&self, service_id: &str) -> Result<LabelResult> {
        debug!("Inspecting service {}", service_id);

        let record = self
            .runtime
            .inspect_service(service_id)
            .await
            .map_err(|e| {
                debug!("Service inspect failed: {}", e);
                DockLabelError::no_such_element(service_id, e)
            })?;

        Ok(QueryResult::from_label_map(
            &record.spec.labels.unwrap_or_default(),
        ))
    }

    /// All containers carrying this label, as projections with their
    /// label snapshots. A failed listing reports the label's name.
    pub async fn containers_with_label(&self, label: &Label) -> Result<ContainerResult> {
        debug!("Listing containers with {}={}", label.name(), label.value());

        let records = self
            .runtime
            .list_containers(label.name(), label.value())
            .await
            .map_err(|e| {
                debug!("Container listing failed: {}", e);
                DockLabelError::no_such_element(label.name(), e)
            })?;

        Ok(ContainerResult::from_records(records))
    }

    /// All services carrying this label.
    pub async fn services_with_label(&self, label: &Label) -> Result<ServiceResult> {
        debug!("Listing services with {}={}", label.name(), label.value());

        let records = self
            .runtime
            .list_services(label.name(), label.value())
            .await
            .map_err(|e| {
                debug!("Service listing failed: {}", e);
                DockLabelError::no_such_element(label.name(), e)
            })?;

        Ok(ServiceResult::from_records(records))
    }

    /// The union of the labels of every service in the named stack.
    ///
    /// Stack membership is the services listed under
    /// `com.docker.stack.namespace = stack_name`. A stack with no
    /// matching services yields an empty result, not an error; only a
    /// failed listing does.
    pub async fn labels_from_stack(&self, stack_name: &str) -> Result<LabelResult> {
        debug!("Collecting labels of stack {}", stack_name);

        let services = self
            .runtime
            .list_services(STACK_NAMESPACE_LABEL, stack_name)
            .await
            .map_err(|e| {
                debug!("Stack service listing failed: {}", e);
                DockLabelError::no_such_element(stack_name, e)
            })?;

        let merged = merge_service_labels(&services, self.conflict_policy);

        Ok(QueryResult::from_label_map(&merged))
    }
}
