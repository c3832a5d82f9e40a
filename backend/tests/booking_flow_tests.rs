//! End-to-end booking flow tests: availability, booking, and the
//! write-time reservation check.

mod support;

use salonflow::api::*;
use salonflow::db::repository::RepositoryError;
use salonflow::services::{self, BookingRequest};
use support::*;

fn request(salon: &SalonFixture, time: TimeOfDay) -> BookingRequest {
    BookingRequest {
        tenant_id: salon.tenant_id,
        service_id: salon.service_id,
        employee_id: salon.employee_id,
        date: monday(),
        time,
        customer_name: Some("Beatriz Ramos".to_string()),
        payment_method: Some(PaymentMethod::Pix),
    }
}

#[tokio::test]
async fn test_booked_slot_disappears_from_availability() {
    let salon = setup_salon(SchedulingMode::Individual);

    let confirmation = services::book_appointment(&salon.repo, request(&salon, t(10, 0)))
        .await
        .unwrap();
    assert_eq!(confirmation.appointment.id.value(), 1);
    assert_eq!(confirmation.appointment.price, 100.0);
    assert_eq!(confirmation.voucher_code, "SF0203-01");

    let slots = services::resolve_availability(
        &salon.repo,
        salon.tenant_id,
        Some(salon.service_id),
        Some(salon.employee_id),
        Some(monday()),
    )
    .await
    .unwrap();

    assert_eq!(rendered(&slots), vec!["09:00", "11:00"]);
}

#[tokio::test]
async fn test_double_booking_same_window_conflicts() {
    let salon = setup_salon(SchedulingMode::Individual);

    services::book_appointment(&salon.repo, request(&salon, t(10, 0)))
        .await
        .unwrap();

    let second = services::book_appointment(&salon.repo, request(&salon, t(10, 0))).await;
    assert!(matches!(second, Err(RepositoryError::Conflict { .. })));

    // Only the winning booking was stored.
    assert_eq!(salon.repo.appointment_count(), 1);
}

#[tokio::test]
async fn test_overlapping_booking_conflicts() {
    let salon = setup_salon(SchedulingMode::Individual);

    services::book_appointment(&salon.repo, request(&salon, t(10, 0)))
        .await
        .unwrap();

    let overlapping = services::book_appointment(&salon.repo, request(&salon, t(10, 45))).await;
    assert!(matches!(overlapping, Err(RepositoryError::Conflict { .. })));
}

#[tokio::test]
async fn test_touching_booking_is_accepted() {
    let salon = setup_salon(SchedulingMode::Individual);

    services::book_appointment(&salon.repo, request(&salon, t(10, 0)))
        .await
        .unwrap();

    // Starts exactly when the previous booking ends.
    let touching = services::book_appointment(&salon.repo, request(&salon, t(11, 0))).await;
    assert!(touching.is_ok());
}

#[tokio::test]
async fn test_individual_mode_allows_parallel_staff_bookings() {
    let salon = setup_salon(SchedulingMode::Individual);
    let second = add_second_employee(&salon);

    services::book_appointment(&salon.repo, request(&salon, t(10, 0)))
        .await
        .unwrap();

    let mut other = request(&salon, t(10, 0));
    other.employee_id = second;
    assert!(services::book_appointment(&salon.repo, other).await.is_ok());
}

#[tokio::test]
async fn test_shared_mode_blocks_parallel_staff_bookings() {
    let salon = setup_salon(SchedulingMode::Shared);
    let second = add_second_employee(&salon);

    services::book_appointment(&salon.repo, request(&salon, t(10, 0)))
        .await
        .unwrap();

    let mut other = request(&salon, t(10, 0));
    other.employee_id = second;
    let result = services::book_appointment(&salon.repo, other).await;
    assert!(matches!(result, Err(RepositoryError::Conflict { .. })));
}

#[tokio::test]
async fn test_booking_buffers_widen_the_reserved_window() {
    let salon = setup_salon(SchedulingMode::Individual);
    let buffered = salon.repo.insert_service(Service {
        id: ServiceId::new(0),
        tenant_id: salon.tenant_id,
        name: "Coloração".to_string(),
        duration_minutes: 60,
        buffer_before_minutes: 0,
        buffer_after_minutes: 30,
        price: 280.0,
        active: true,
    });

    services::book_appointment(&salon.repo, request(&salon, t(10, 30)))
        .await
        .unwrap();

    // 09:30 + 60 minutes would touch the 10:30 booking exactly, but the
    // 30-minute cleanup buffer stretches the window to 11:00.
    let mut with_buffer = request(&salon, t(9, 30));
    with_buffer.service_id = buffered;
    let result = services::book_appointment(&salon.repo, with_buffer).await;
    assert!(matches!(result, Err(RepositoryError::Conflict { .. })));
}

#[tokio::test]
async fn test_booking_unknown_ids_not_found() {
    let salon = setup_salon(SchedulingMode::Individual);

    let mut unknown_service = request(&salon, t(9, 0));
    unknown_service.service_id = ServiceId::new(999);
    assert!(matches!(
        services::book_appointment(&salon.repo, unknown_service).await,
        Err(RepositoryError::NotFound { .. })
    ));

    let mut unknown_employee = request(&salon, t(9, 0));
    unknown_employee.employee_id = EmployeeId::new(999);
    assert!(matches!(
        services::book_appointment(&salon.repo, unknown_employee).await,
        Err(RepositoryError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_booking_cross_tenant_service_rejected() {
    let salon = setup_salon(SchedulingMode::Individual);

    let other_tenant = salon.repo.insert_tenant(Tenant {
        id: TenantId::new(0),
        slug: "corte-real".to_string(),
        name: "Barbearia Corte Real".to_string(),
        scheduling_mode: SchedulingMode::Shared,
        commission: CommissionSettings::default(),
    });
    let foreign_service = salon.repo.insert_service(Service {
        id: ServiceId::new(0),
        tenant_id: other_tenant,
        name: "Barba".to_string(),
        duration_minutes: 30,
        buffer_before_minutes: 0,
        buffer_after_minutes: 0,
        price: 35.0,
        active: true,
    });

    let mut crossed = request(&salon, t(9, 0));
    crossed.service_id = foreign_service;
    assert!(matches!(
        services::book_appointment(&salon.repo, crossed).await,
        Err(RepositoryError::Validation { .. })
    ));
}

#[tokio::test]
async fn test_booking_inactive_service_rejected() {
    let salon = setup_salon(SchedulingMode::Individual);
    let retired = salon.repo.insert_service(Service {
        id: ServiceId::new(0),
        tenant_id: salon.tenant_id,
        name: "Escova Antiga".to_string(),
        duration_minutes: 30,
        buffer_before_minutes: 0,
        buffer_after_minutes: 0,
        price: 50.0,
        active: false,
    });

    let mut inactive = request(&salon, t(9, 0));
    inactive.service_id = retired;
    assert!(matches!(
        services::book_appointment(&salon.repo, inactive).await,
        Err(RepositoryError::Validation { .. })
    ));
}

#[tokio::test]
async fn test_booking_defaults_payment_method_to_card() {
    let salon = setup_salon(SchedulingMode::Individual);

    let mut no_method = request(&salon, t(9, 0));
    no_method.payment_method = None;

    let confirmation = services::book_appointment(&salon.repo, no_method)
        .await
        .unwrap();
    assert_eq!(
        confirmation.appointment.payment_method,
        PaymentMethod::Card
    );
    assert_eq!(
        confirmation.appointment.status,
        AppointmentStatus::Scheduled
    );
}
