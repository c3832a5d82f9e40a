//! Commission reporting.
//!
//! Computes what each professional is owed from their completed
//! appointments: gross service value, card acquirer fees, the commissionable
//! base (optionally net of fees), and the payable amount at the employee's
//! rate or the tenant default.

use serde::{Deserialize, Serialize};

use crate::api::{
    Appointment, AppointmentStatus, CommissionSettings, Employee, EmployeeId, PaymentMethod,
    TenantId,
};
use crate::db::repository::{FullRepository, RepositoryResult};

/// Payout state of a commission line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommissionStatus {
    Pending,
    Paid,
}

/// One employee's commission line for a reporting period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommissionSummary {
    pub employee_id: EmployeeId,
    pub employee_name: String,
    /// Completed appointments counted into this line.
    pub total_services: usize,
    /// Total value of the services performed.
    pub gross_value: f64,
    /// Card acquirer fees withheld.
    pub deductions: f64,
    /// Amount the commission rate is applied to.
    pub base_value: f64,
    /// Applied rate as a fraction (0.40 = 40%).
    pub commission_rate: f64,
    /// Amount owed to the professional.
    pub payable: f64,
    pub status: CommissionStatus,
}

fn card_fee_pct(method: PaymentMethod, settings: &CommissionSettings) -> f64 {
    match method {
        PaymentMethod::Card => settings.card_fee_credit_pct,
        PaymentMethod::Debit => settings.card_fee_debit_pct,
        PaymentMethod::Pix | PaymentMethod::Local => 0.0,
    }
}

/// Compute one employee's commission line from an appointment snapshot.
///
/// Only `completed` appointments of that employee count. Pure function;
/// the repository-backed [`commission_report`] feeds it.
pub fn commission_for_employee(
    employee: &Employee,
    appointments: &[Appointment],
    settings: &CommissionSettings,
) -> CommissionSummary {
    let mut total_services = 0usize;
    let mut gross_value = 0.0;
    let mut deductions = 0.0;
    let mut base_value = 0.0;

    for appointment in appointments {
        if appointment.staff_id != employee.id
            || appointment.status != AppointmentStatus::Completed
        {
            continue;
        }

        let price = appointment.price;
        let fee = price * card_fee_pct(appointment.payment_method, settings) / 100.0;
        let base = if settings.deduct_fees_from_commission {
            price - fee
        } else {
            price
        };

        total_services += 1;
        gross_value += price;
        deductions += fee;
        base_value += base;
    }

    let rate_pct = employee
        .commission_rate_pct
        .unwrap_or(settings.default_commission_pct);
    let commission_rate = rate_pct / 100.0;
    let payable = base_value * commission_rate;

    CommissionSummary {
        employee_id: employee.id,
        employee_name: employee.full_name.clone(),
        total_services,
        gross_value,
        deductions,
        base_value,
        commission_rate,
        payable,
        status: if payable > 0.0 {
            CommissionStatus::Pending
        } else {
            CommissionStatus::Paid
        },
    }
}

/// Commission lines for every employee of a tenant.
pub async fn commission_report<R: FullRepository + ?Sized>(
    repo: &R,
    tenant_id: TenantId,
) -> RepositoryResult<Vec<CommissionSummary>> {
    let tenant = repo.get_tenant(tenant_id).await?;
    let employees = repo.list_employees(tenant.id).await?;
    let appointments = repo.list_appointments(tenant.id).await?;

    Ok(employees
        .iter()
        .map(|employee| commission_for_employee(employee, &appointments, &tenant.commission))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{AppointmentId, ServiceId, TimeOfDay, WeeklySchedule};
    use chrono::NaiveDate;

    fn employee(rate: Option<f64>) -> Employee {
        Employee {
            id: EmployeeId::new(1),
            tenant_id: TenantId::new(1),
            full_name: "Ana Souza".to_string(),
            specialty: None,
            commission_rate_pct: rate,
            working_hours: WeeklySchedule::default(),
        }
    }

    fn appointment(
        staff: i64,
        status: AppointmentStatus,
        price: f64,
        method: PaymentMethod,
    ) -> Appointment {
        Appointment {
            id: AppointmentId::new(1),
            tenant_id: TenantId::new(1),
            staff_id: EmployeeId::new(staff),
            service_id: ServiceId::new(1),
            customer_name: None,
            date: NaiveDate::from_ymd_opt(2026, 3, 3).unwrap(),
            time: TimeOfDay::new(10, 0).unwrap(),
            duration_minutes: 60,
            status,
            price,
            payment_method: method,
        }
    }

    #[test]
    fn test_credit_card_fee_deducted_before_commission() {
        let appointments = vec![appointment(
            1,
            AppointmentStatus::Completed,
            100.0,
            PaymentMethod::Card,
        )];

        let line = commission_for_employee(
            &employee(Some(50.0)),
            &appointments,
            &CommissionSettings::default(),
        );

        assert_eq!(line.total_services, 1);
        assert_eq!(line.gross_value, 100.0);
        assert!((line.deductions - 3.5).abs() < 1e-9);
        assert!((line.base_value - 96.5).abs() < 1e-9);
        assert!((line.payable - 48.25).abs() < 1e-9);
        assert_eq!(line.status, CommissionStatus::Pending);
    }

    #[test]
    fn test_pix_and_local_have_no_fee() {
        let appointments = vec![
            appointment(1, AppointmentStatus::Completed, 80.0, PaymentMethod::Pix),
            appointment(1, AppointmentStatus::Completed, 20.0, PaymentMethod::Local),
        ];

        let line = commission_for_employee(
            &employee(None),
            &appointments,
            &CommissionSettings::default(),
        );

        assert_eq!(line.deductions, 0.0);
        assert_eq!(line.base_value, 100.0);
        // Tenant default of 40%.
        assert!((line.payable - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_gross_base_kept_when_fees_not_deducted() {
        let settings = CommissionSettings {
            deduct_fees_from_commission: false,
            ..Default::default()
        };
        let appointments = vec![appointment(
            1,
            AppointmentStatus::Completed,
            200.0,
            PaymentMethod::Debit,
        )];

        let line = commission_for_employee(&employee(None), &appointments, &settings);

        assert!((line.deductions - 3.0).abs() < 1e-9);
        assert_eq!(line.base_value, 200.0);
    }

    #[test]
    fn test_only_completed_appointments_of_this_staff_count() {
        let appointments = vec![
            appointment(1, AppointmentStatus::Confirmed, 100.0, PaymentMethod::Pix),
            appointment(1, AppointmentStatus::Cancelled, 100.0, PaymentMethod::Pix),
            appointment(2, AppointmentStatus::Completed, 100.0, PaymentMethod::Pix),
        ];

        let line = commission_for_employee(
            &employee(None),
            &appointments,
            &CommissionSettings::default(),
        );

        assert_eq!(line.total_services, 0);
        assert_eq!(line.payable, 0.0);
        assert_eq!(line.status, CommissionStatus::Paid);
    }
}
