//! In-memory local repository implementation.
//!
//! Stores all data in HashMaps behind a single `RwLock`, giving fast and
//! deterministic behavior for unit tests and local development. The write
//! lock also provides the atomicity the reservation check in
//! [`store_appointment`](crate::db::repository::AppointmentRepository::store_appointment)
//! requires.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use parking_lot::RwLock;

use crate::api::*;
use crate::booking::{window_is_taken, IsolationScope, SlotWindow};
use crate::db::repository::*;

/// In-memory local repository.
///
/// # Example
/// ```
/// use salonflow::db::repositories::LocalRepository;
/// use salonflow::db::repository::CatalogRepository;
///
/// # async fn example() {
/// let repo = LocalRepository::with_demo_data();
/// let tenants = repo.list_tenants().await.unwrap();
/// assert!(!tenants.is_empty());
/// # }
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    tenants: HashMap<TenantId, Tenant>,
    services: HashMap<ServiceId, Service>,
    employees: HashMap<EmployeeId, Employee>,
    appointments: HashMap<AppointmentId, Appointment>,

    // ID counters
    next_tenant_id: i64,
    next_service_id: i64,
    next_employee_id: i64,
    next_appointment_id: i64,

    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            tenants: HashMap::new(),
            services: HashMap::new(),
            employees: HashMap::new(),
            appointments: HashMap::new(),
            next_tenant_id: 1,
            next_service_id: 1,
            next_employee_id: 1,
            next_appointment_id: 1,
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Create a repository pre-populated with the demo salon catalog.
    ///
    /// Two salons are seeded: "Studio Bella Vista" with individual staff
    /// calendars and "Barbearia Corte Real" with one shared calendar, plus
    /// services, weekly schedules, and a handful of appointments so the
    /// booking and finance flows work out of the box.
    pub fn with_demo_data() -> Self {
        let repo = Self::new();
        seed::demo_catalog(&repo);
        repo
    }

    /// Add a tenant, assigning its ID.
    pub fn insert_tenant(&self, mut tenant: Tenant) -> TenantId {
        let mut data = self.data.write();
        let id = TenantId::new(data.next_tenant_id);
        data.next_tenant_id += 1;
        tenant.id = id;
        data.tenants.insert(id, tenant);
        id
    }

    /// Add a service, assigning its ID.
    pub fn insert_service(&self, mut service: Service) -> ServiceId {
        let mut data = self.data.write();
        let id = ServiceId::new(data.next_service_id);
        data.next_service_id += 1;
        service.id = id;
        data.services.insert(id, service);
        id
    }

    /// Add an employee, assigning their ID.
    pub fn insert_employee(&self, mut employee: Employee) -> EmployeeId {
        let mut data = self.data.write();
        let id = EmployeeId::new(data.next_employee_id);
        data.next_employee_id += 1;
        employee.id = id;
        data.employees.insert(id, employee);
        id
    }

    /// Add an appointment without the reservation check.
    ///
    /// Test and seed helper; production writes go through
    /// `store_appointment`.
    pub fn insert_appointment(&self, mut appointment: Appointment) -> AppointmentId {
        let mut data = self.data.write();
        let id = AppointmentId::new(data.next_appointment_id);
        data.next_appointment_id += 1;
        appointment.id = id;
        data.appointments.insert(id, appointment);
        id
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        let mut data = self.data.write();
        let is_healthy = data.is_healthy;
        *data = LocalData {
            is_healthy,
            ..Default::default()
        };
    }

    /// Number of stored appointments.
    pub fn appointment_count(&self) -> usize {
        self.data.read().appointments.len()
    }

    fn check_health(&self, data: &LocalData) -> RepositoryResult<()> {
        if !data.is_healthy {
            return Err(RepositoryError::connection("store is not healthy"));
        }
        Ok(())
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn get_tenant(&self, tenant_id: TenantId) -> RepositoryResult<Tenant> {
        let data = self.data.read();
        data.tenants.get(&tenant_id).cloned().ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("Tenant {} not found", tenant_id),
                ErrorContext::new("get_tenant")
                    .with_entity("tenant")
                    .with_entity_id(tenant_id),
            )
        })
    }

    async fn list_tenants(&self) -> RepositoryResult<Vec<Tenant>> {
        let data = self.data.read();
        let mut tenants: Vec<Tenant> = data.tenants.values().cloned().collect();
        tenants.sort_by_key(|t| t.id);
        Ok(tenants)
    }

    async fn get_service(&self, service_id: ServiceId) -> RepositoryResult<Service> {
        let data = self.data.read();
        data.services.get(&service_id).cloned().ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("Service {} not found", service_id),
                ErrorContext::new("get_service")
                    .with_entity("service")
                    .with_entity_id(service_id),
            )
        })
    }

    async fn list_services(&self, tenant_id: TenantId) -> RepositoryResult<Vec<Service>> {
        let data = self.data.read();
        let mut services: Vec<Service> = data
            .services
            .values()
            .filter(|s| s.tenant_id == tenant_id)
            .cloned()
            .collect();
        services.sort_by_key(|s| s.id);
        Ok(services)
    }

    async fn get_employee(&self, employee_id: EmployeeId) -> RepositoryResult<Employee> {
        let data = self.data.read();
        data.employees.get(&employee_id).cloned().ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("Employee {} not found", employee_id),
                ErrorContext::new("get_employee")
                    .with_entity("employee")
                    .with_entity_id(employee_id),
            )
        })
    }

    async fn list_employees(&self, tenant_id: TenantId) -> RepositoryResult<Vec<Employee>> {
        let data = self.data.read();
        let mut employees: Vec<Employee> = data
            .employees
            .values()
            .filter(|e| e.tenant_id == tenant_id)
            .cloned()
            .collect();
        employees.sort_by_key(|e| e.id);
        Ok(employees)
    }
}

#[async_trait]
impl AppointmentRepository for LocalRepository {
    async fn appointments_for_day(&self, date: NaiveDate) -> RepositoryResult<Vec<Appointment>> {
        let data = self.data.read();

        let day_start = date.and_time(chrono::NaiveTime::MIN);
        let day_end = day_start + Duration::days(1);

        let mut appointments: Vec<Appointment> = data
            .appointments
            .values()
            .filter(|a| a.start() < day_end && a.end() > day_start)
            .cloned()
            .collect();
        appointments.sort_by_key(|a| (a.start(), a.id));
        Ok(appointments)
    }

    async fn list_appointments(&self, tenant_id: TenantId) -> RepositoryResult<Vec<Appointment>> {
        let data = self.data.read();
        let mut appointments: Vec<Appointment> = data
            .appointments
            .values()
            .filter(|a| a.tenant_id == tenant_id)
            .cloned()
            .collect();
        appointments.sort_by_key(|a| (a.start(), a.id));
        Ok(appointments)
    }

    async fn store_appointment(
        &self,
        appointment: &Appointment,
        required_minutes: u32,
        mode: SchedulingMode,
    ) -> RepositoryResult<Appointment> {
        let mut data = self.data.write();
        self.check_health(&data)?;

        // Reservation check: the availability the customer saw is stale by
        // now, so the window is re-validated against the current state while
        // the write lock is held.
        let window = SlotWindow::new(appointment.date, appointment.time, required_minutes);
        let scope = IsolationScope {
            mode,
            tenant_id: appointment.tenant_id,
            staff_id: appointment.staff_id,
        };
        let existing: Vec<Appointment> = data.appointments.values().cloned().collect();
        if window_is_taken(&window, &existing, &scope) {
            return Err(RepositoryError::conflict_with_context(
                format!(
                    "Slot {} on {} is no longer available",
                    appointment.time, appointment.date
                ),
                ErrorContext::new("store_appointment")
                    .with_entity("appointment")
                    .with_details(format!("staff_id={}", appointment.staff_id)),
            ));
        }

        let id = AppointmentId::new(data.next_appointment_id);
        data.next_appointment_id += 1;

        let mut stored = appointment.clone();
        stored.id = id;
        data.appointments.insert(id, stored.clone());

        Ok(stored)
    }
}

/// Demo catalog used by `with_demo_data` and the server binary.
mod seed {
    use super::*;
    use crate::models::{Shift, WeeklySchedule};

    // Seed constants are all in range; unwraps here cannot fire.
    fn t(hour: u8, minute: u8) -> TimeOfDay {
        TimeOfDay::new(hour, minute).unwrap()
    }

    fn shift(start: (u8, u8), end: (u8, u8)) -> Shift {
        Shift::new(t(start.0, start.1), t(end.0, end.1)).unwrap()
    }

    fn split_day() -> Vec<Shift> {
        vec![shift((9, 0), (12, 0)), shift((13, 0), (19, 0))]
    }

    pub(super) fn demo_catalog(repo: &LocalRepository) {
        let placeholder_tenant = TenantId::new(0);
        let placeholder_service = ServiceId::new(0);
        let placeholder_employee = EmployeeId::new(0);
        let placeholder_appointment = AppointmentId::new(0);

        let studio = repo.insert_tenant(Tenant {
            id: placeholder_tenant,
            slug: "bella-vista".to_string(),
            name: "Studio Bella Vista".to_string(),
            scheduling_mode: SchedulingMode::Individual,
            commission: CommissionSettings::default(),
        });

        let barbershop = repo.insert_tenant(Tenant {
            id: placeholder_tenant,
            slug: "corte-real".to_string(),
            name: "Barbearia Corte Real".to_string(),
            scheduling_mode: SchedulingMode::Shared,
            commission: CommissionSettings::default(),
        });

        let corte_feminino = repo.insert_service(Service {
            id: placeholder_service,
            tenant_id: studio,
            name: "Corte Feminino".to_string(),
            duration_minutes: 60,
            buffer_before_minutes: 0,
            buffer_after_minutes: 10,
            price: 120.0,
            active: true,
        });
        let coloracao = repo.insert_service(Service {
            id: placeholder_service,
            tenant_id: studio,
            name: "Coloração".to_string(),
            duration_minutes: 120,
            buffer_before_minutes: 10,
            buffer_after_minutes: 20,
            price: 280.0,
            active: true,
        });
        let manicure = repo.insert_service(Service {
            id: placeholder_service,
            tenant_id: studio,
            name: "Manicure".to_string(),
            duration_minutes: 45,
            buffer_before_minutes: 0,
            buffer_after_minutes: 0,
            price: 60.0,
            active: true,
        });
        let corte_masculino = repo.insert_service(Service {
            id: placeholder_service,
            tenant_id: barbershop,
            name: "Corte Masculino".to_string(),
            duration_minutes: 30,
            buffer_before_minutes: 0,
            buffer_after_minutes: 0,
            price: 45.0,
            active: true,
        });
        repo.insert_service(Service {
            id: placeholder_service,
            tenant_id: barbershop,
            name: "Barba".to_string(),
            duration_minutes: 30,
            buffer_before_minutes: 0,
            buffer_after_minutes: 0,
            price: 35.0,
            active: true,
        });

        let ana = repo.insert_employee(Employee {
            id: placeholder_employee,
            tenant_id: studio,
            full_name: "Ana Souza".to_string(),
            specialty: Some("Colorista".to_string()),
            commission_rate_pct: Some(50.0),
            working_hours: WeeklySchedule {
                tuesday: split_day(),
                wednesday: split_day(),
                thursday: split_day(),
                friday: split_day(),
                saturday: vec![shift((9, 0), (14, 0))],
                ..Default::default()
            },
        });
        let juliana = repo.insert_employee(Employee {
            id: placeholder_employee,
            tenant_id: studio,
            full_name: "Juliana Lima".to_string(),
            specialty: Some("Manicure".to_string()),
            commission_rate_pct: None,
            working_hours: WeeklySchedule {
                tuesday: vec![shift((10, 0), (16, 0))],
                wednesday: vec![shift((10, 0), (16, 0))],
                thursday: vec![shift((10, 0), (16, 0))],
                friday: vec![shift((10, 0), (16, 0))],
                ..Default::default()
            },
        });
        let carlos = repo.insert_employee(Employee {
            id: placeholder_employee,
            tenant_id: barbershop,
            full_name: "Carlos Mendes".to_string(),
            specialty: None,
            commission_rate_pct: None,
            working_hours: WeeklySchedule {
                monday: vec![shift((9, 0), (18, 0))],
                tuesday: vec![shift((9, 0), (18, 0))],
                wednesday: vec![shift((9, 0), (18, 0))],
                thursday: vec![shift((9, 0), (18, 0))],
                friday: vec![shift((9, 0), (18, 0))],
                saturday: vec![shift((9, 0), (13, 0))],
                ..Default::default()
            },
        });

        let day = |y: i32, m: u32, d: u32| NaiveDate::from_ymd_opt(y, m, d).unwrap();

        repo.insert_appointment(Appointment {
            id: placeholder_appointment,
            tenant_id: studio,
            staff_id: ana,
            service_id: corte_feminino,
            customer_name: Some("Beatriz Ramos".to_string()),
            date: day(2026, 3, 3),
            time: t(10, 0),
            duration_minutes: 60,
            status: AppointmentStatus::Completed,
            price: 120.0,
            payment_method: PaymentMethod::Card,
        });
        repo.insert_appointment(Appointment {
            id: placeholder_appointment,
            tenant_id: studio,
            staff_id: ana,
            service_id: coloracao,
            customer_name: Some("Larissa Prado".to_string()),
            date: day(2026, 3, 4),
            time: t(14, 0),
            duration_minutes: 120,
            status: AppointmentStatus::Completed,
            price: 280.0,
            payment_method: PaymentMethod::Pix,
        });
        repo.insert_appointment(Appointment {
            id: placeholder_appointment,
            tenant_id: studio,
            staff_id: juliana,
            service_id: manicure,
            customer_name: Some("Camila Torres".to_string()),
            date: day(2026, 3, 4),
            time: t(11, 0),
            duration_minutes: 45,
            status: AppointmentStatus::Completed,
            price: 60.0,
            payment_method: PaymentMethod::Debit,
        });
        repo.insert_appointment(Appointment {
            id: placeholder_appointment,
            tenant_id: studio,
            staff_id: ana,
            service_id: corte_feminino,
            customer_name: Some("Beatriz Ramos".to_string()),
            date: day(2026, 3, 6),
            time: t(9, 30),
            duration_minutes: 60,
            status: AppointmentStatus::Confirmed,
            price: 120.0,
            payment_method: PaymentMethod::Local,
        });
        repo.insert_appointment(Appointment {
            id: placeholder_appointment,
            tenant_id: barbershop,
            staff_id: carlos,
            service_id: corte_masculino,
            customer_name: Some("Rafael Nunes".to_string()),
            date: day(2026, 3, 6),
            time: t(10, 0),
            duration_minutes: 30,
            status: AppointmentStatus::Confirmed,
            price: 45.0,
            payment_method: PaymentMethod::Local,
        });
    }
}
