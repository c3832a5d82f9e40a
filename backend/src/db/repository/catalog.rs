//! Catalog repository trait: tenants, services, and staff.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{Employee, EmployeeId, Service, ServiceId, Tenant, TenantId};

/// Repository trait for read access to the tenant catalog.
///
/// The availability core treats the catalog as an external collaborator:
/// it only ever reads. Seeding and administration go through
/// implementation-specific helpers.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Check if the backing store is reachable and healthy.
    ///
    /// # Returns
    /// - `Ok(true)` if the store is healthy
    /// - `Ok(false)` if unhealthy but no error occurred
    /// - `Err(RepositoryError)` if the check itself failed
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Retrieve a tenant by ID.
    ///
    /// # Returns
    /// * `Ok(Tenant)` - The tenant record
    /// * `Err(RepositoryError::NotFound)` - If the tenant doesn't exist
    async fn get_tenant(&self, tenant_id: TenantId) -> RepositoryResult<Tenant>;

    /// List all tenants, ordered by ID.
    async fn list_tenants(&self) -> RepositoryResult<Vec<Tenant>>;

    /// Retrieve a service by ID.
    ///
    /// # Returns
    /// * `Ok(Service)` - The service record
    /// * `Err(RepositoryError::NotFound)` - If the service doesn't exist
    async fn get_service(&self, service_id: ServiceId) -> RepositoryResult<Service>;

    /// List a tenant's services, ordered by ID.
    async fn list_services(&self, tenant_id: TenantId) -> RepositoryResult<Vec<Service>>;

    /// Retrieve an employee by ID, including their weekly schedule.
    ///
    /// # Returns
    /// * `Ok(Employee)` - The employee record
    /// * `Err(RepositoryError::NotFound)` - If the employee doesn't exist
    async fn get_employee(&self, employee_id: EmployeeId) -> RepositoryResult<Employee>;

    /// List a tenant's employees, ordered by ID.
    async fn list_employees(&self, tenant_id: TenantId) -> RepositoryResult<Vec<Employee>>;
}
