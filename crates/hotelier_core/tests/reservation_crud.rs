use chrono::{DateTime, NaiveTime, TimeZone, Utc};
use hotelier_core::{
    reservation_validation, DatabaseContext, EntityKind, Hotel, MemoryDatabaseContext,
    ReferencePolicy, Reservation, ReservationService, Room, ServiceError, User,
};

fn at_eleven(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 11, 0, 0).unwrap()
}

fn sample_hotel() -> Hotel {
    Hotel::new(
        1,
        "Sample name",
        NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(23, 0, 0).unwrap(),
    )
}

fn sample_reservation() -> Reservation {
    Reservation::new(
        1,
        at_eleven(2019, 5, 5),
        at_eleven(2019, 5, 6),
        User::new(1, "test@test.com"),
        Room::new(1, sample_hotel(), 200, 2),
    )
}

#[test]
fn validation_accepts_well_formed_reservation() {
    assert!(reservation_validation(Some(&sample_reservation())));
}

#[test]
fn validation_rejects_absent_reservation() {
    assert!(!reservation_validation(None));
}

#[test]
fn validation_rejects_end_before_start() {
    let mut reservation = sample_reservation();
    reservation.end_date = at_eleven(2019, 1, 1);
    assert!(!reservation_validation(Some(&reservation)));
}

#[test]
fn validation_rejects_equal_start_and_end() {
    let mut reservation = sample_reservation();
    reservation.end_date = reservation.start_date;
    assert!(!reservation_validation(Some(&reservation)));
}

#[test]
fn validation_rejects_missing_user() {
    let mut reservation = sample_reservation();
    reservation.user = None;
    assert!(!reservation_validation(Some(&reservation)));
}

#[test]
fn validation_rejects_missing_room() {
    let mut reservation = sample_reservation();
    reservation.room = None;
    assert!(!reservation_validation(Some(&reservation)));
}

#[test]
fn validation_rejects_missing_user_and_room() {
    let mut reservation = sample_reservation();
    reservation.user = None;
    reservation.room = None;
    assert!(!reservation_validation(Some(&reservation)));
}

#[test]
fn add_assigns_id_and_persists() {
    let ctx = MemoryDatabaseContext::new();
    let service = ReservationService::new(&ctx);

    let id = service.add(Some(sample_reservation())).unwrap();

    assert_eq!(id, 1);
    let stored = service.get(id).unwrap();
    assert_eq!(stored.id, 1);
    assert_eq!(stored.start_date, at_eleven(2019, 5, 5));
    assert_eq!(stored.user, Some(User::new(1, "test@test.com")));
}

#[test]
fn add_overwrites_caller_provided_id() {
    let ctx = MemoryDatabaseContext::new();
    let service = ReservationService::new(&ctx);

    let mut reservation = sample_reservation();
    reservation.id = 99;
    let id = service.add(Some(reservation)).unwrap();

    assert_eq!(id, 1);
    assert!(service.get(99).is_err());
}

#[test]
fn add_rejects_end_before_start_and_leaves_store_untouched() {
    let ctx = MemoryDatabaseContext::new();
    let service = ReservationService::new(&ctx);
    service.add(Some(sample_reservation())).unwrap();
    let before = service.get_all();

    let mut reservation = sample_reservation();
    reservation.start_date = at_eleven(2019, 1, 1);
    reservation.end_date = at_eleven(2018, 1, 1);
    let err = service.add(Some(reservation)).unwrap_err();

    assert!(matches!(
        err,
        ServiceError::Validation(EntityKind::Reservation)
    ));
    assert_eq!(service.get_all(), before);
}

#[test]
fn add_rejects_absent_reservation() {
    let ctx = MemoryDatabaseContext::new();
    let service = ReservationService::new(&ctx);

    let err = service.add(None).unwrap_err();

    assert!(matches!(
        err,
        ServiceError::Validation(EntityKind::Reservation)
    ));
    assert!(service.get_all().is_empty());
}

#[test]
fn add_does_not_resolve_references_by_default() {
    // Under the lenient default neither the user nor the room has to
    // exist in the store.
    let ctx = MemoryDatabaseContext::new();
    let service = ReservationService::new(&ctx);

    assert!(service.add(Some(sample_reservation())).is_ok());
    assert!(ctx.users().is_empty());
    assert!(ctx.rooms().is_empty());
}

#[test]
fn strict_policy_rejects_unknown_user() {
    let ctx = MemoryDatabaseContext::new();
    let service = ReservationService::with_policy(&ctx, ReferencePolicy::Strict);

    let err = service.add(Some(sample_reservation())).unwrap_err();

    assert!(matches!(err, ServiceError::NotFound(EntityKind::User, 1)));
    assert!(service.get_all().is_empty());
}

#[test]
fn strict_policy_rejects_unknown_room() {
    let ctx = MemoryDatabaseContext::new();
    ctx.add_user(User::new(1, "test@test.com"));
    let service = ReservationService::with_policy(&ctx, ReferencePolicy::Strict);

    let err = service.add(Some(sample_reservation())).unwrap_err();

    assert!(matches!(err, ServiceError::NotFound(EntityKind::Room, 1)));
    assert!(service.get_all().is_empty());
}

#[test]
fn strict_policy_accepts_stored_references() {
    let ctx = MemoryDatabaseContext::new();
    ctx.add_user(User::new(1, "test@test.com"));
    ctx.add_room(Room::new(1, sample_hotel(), 200, 2));
    let service = ReservationService::with_policy(&ctx, ReferencePolicy::Strict);

    assert!(service.add(Some(sample_reservation())).is_ok());
}

#[test]
fn get_returns_not_found_for_zero_negative_and_missing_ids() {
    let ctx = MemoryDatabaseContext::new();
    let service = ReservationService::new(&ctx);
    service.add(Some(sample_reservation())).unwrap();

    for id in [0, -1, 4] {
        let err = service.get(id).unwrap_err();
        assert!(matches!(
            err,
            ServiceError::NotFound(EntityKind::Reservation, missing) if missing == id
        ));
    }
}

#[test]
fn update_replaces_stored_record_in_full() {
    let ctx = MemoryDatabaseContext::new();
    let service = ReservationService::new(&ctx);
    let id = service.add(Some(sample_reservation())).unwrap();

    let mut changed = service.get(id).unwrap();
    changed.end_date = at_eleven(2019, 5, 9);
    changed.room = Some(Room::new(
        2,
        Hotel::new(
            2,
            "Sample name 2",
            NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
        ),
        2,
        1,
    ));
    service.update(Some(changed.clone())).unwrap();

    assert_eq!(service.get(id).unwrap(), changed);
    assert_eq!(service.get_all().len(), 1);
}

#[test]
fn update_rejects_invalid_reservation() {
    let ctx = MemoryDatabaseContext::new();
    let service = ReservationService::new(&ctx);
    let id = service.add(Some(sample_reservation())).unwrap();

    let mut invalid = service.get(id).unwrap();
    invalid.start_date = at_eleven(2019, 1, 1);
    invalid.end_date = at_eleven(2018, 1, 1);
    let err = service.update(Some(invalid)).unwrap_err();

    assert!(matches!(
        err,
        ServiceError::Validation(EntityKind::Reservation)
    ));
    assert_eq!(service.get(id).unwrap(), sample_reservation());
}

#[test]
fn update_rejects_absent_reservation_argument() {
    let ctx = MemoryDatabaseContext::new();
    let service = ReservationService::new(&ctx);

    let err = service.update(None).unwrap_err();

    assert!(matches!(
        err,
        ServiceError::Validation(EntityKind::Reservation)
    ));
}

#[test]
fn update_on_unknown_id_is_not_found_and_does_not_insert() {
    let ctx = MemoryDatabaseContext::new();
    let service = ReservationService::new(&ctx);

    let mut reservation = sample_reservation();
    reservation.id = 4;
    let err = service.update(Some(reservation)).unwrap_err();

    assert!(matches!(
        err,
        ServiceError::NotFound(EntityKind::Reservation, 4)
    ));
    assert!(service.get_all().is_empty());
}

#[test]
fn delete_removes_reservation() {
    let ctx = MemoryDatabaseContext::new();
    let service = ReservationService::new(&ctx);
    let id = service.add(Some(sample_reservation())).unwrap();

    service.delete(id).unwrap();

    assert!(service.get_all().is_empty());
}

#[test]
fn delete_then_get_is_not_found() {
    let ctx = MemoryDatabaseContext::new();
    let service = ReservationService::new(&ctx);
    let id = service.add(Some(sample_reservation())).unwrap();

    service.delete(id).unwrap();
    let err = service.get(id).unwrap_err();

    assert!(matches!(
        err,
        ServiceError::NotFound(EntityKind::Reservation, missing) if missing == id
    ));
}

#[test]
fn delete_returns_not_found_for_zero_negative_and_missing_ids() {
    let ctx = MemoryDatabaseContext::new();
    let service = ReservationService::new(&ctx);

    for id in [0, -1, 4] {
        let err = service.delete(id).unwrap_err();
        assert!(matches!(
            err,
            ServiceError::NotFound(EntityKind::Reservation, missing) if missing == id
        ));
    }
}

#[test]
fn domain_errors_have_stable_messages() {
    assert_eq!(
        ServiceError::Validation(EntityKind::Reservation).to_string(),
        "given reservation didn't pass validation"
    );
    assert_eq!(
        ServiceError::NotFound(EntityKind::Reservation, 4).to_string(),
        "reservation with id 4 not found"
    );
}
