use chrono::{NaiveTime, TimeZone, Utc};
use hotelier_core::{
    user_validation, DatabaseContext, EntityKind, Hotel, MemoryDatabaseContext, Reservation, Room,
    ServiceError, User, UserService,
};

#[test]
fn validation_accepts_well_formed_user() {
    assert!(user_validation(Some(&User::new(1, "test@test.com"))));
}

#[test]
fn validation_rejects_absent_user() {
    assert!(!user_validation(None));
}

#[test]
fn validation_rejects_malformed_emails() {
    for email in ["", "no-at-sign", "@domain", "local@", "a b@c.com"] {
        assert!(
            !user_validation(Some(&User::new(1, email))),
            "email `{email}` should be rejected"
        );
    }
}

#[test]
fn add_assigns_sequential_ids() {
    let ctx = MemoryDatabaseContext::new();
    let service = UserService::new(&ctx);

    let first = service.add(Some(User::new(0, "test@test.com"))).unwrap();
    let second = service.add(Some(User::new(0, "test2@test2.com"))).unwrap();

    assert_eq!(first, 1);
    assert_eq!(second, 2);
    assert_eq!(service.get(2).unwrap().email, "test2@test2.com");
}

#[test]
fn add_rejects_invalid_email_and_leaves_store_untouched() {
    let ctx = MemoryDatabaseContext::new();
    let service = UserService::new(&ctx);

    let err = service.add(Some(User::new(0, "not-an-email"))).unwrap_err();

    assert!(matches!(err, ServiceError::Validation(EntityKind::User)));
    assert!(service.get_all().is_empty());
}

#[test]
fn add_rejects_absent_user_argument() {
    let ctx = MemoryDatabaseContext::new();
    let service = UserService::new(&ctx);

    let err = service.add(None).unwrap_err();

    assert!(matches!(err, ServiceError::Validation(EntityKind::User)));
}

#[test]
fn get_returns_not_found_for_zero_negative_and_missing_ids() {
    let ctx = MemoryDatabaseContext::new();
    let service = UserService::new(&ctx);

    for id in [0, -1, 5] {
        let err = service.get(id).unwrap_err();
        assert!(matches!(
            err,
            ServiceError::NotFound(EntityKind::User, missing) if missing == id
        ));
    }
}

#[test]
fn update_replaces_stored_user() {
    let ctx = MemoryDatabaseContext::new();
    let service = UserService::new(&ctx);
    let id = service.add(Some(User::new(0, "test@test.com"))).unwrap();

    service
        .update(Some(User::new(id, "renamed@test.com")))
        .unwrap();

    assert_eq!(service.get(id).unwrap().email, "renamed@test.com");
}

#[test]
fn update_on_unknown_id_is_not_found_and_does_not_insert() {
    let ctx = MemoryDatabaseContext::new();
    let service = UserService::new(&ctx);

    let err = service
        .update(Some(User::new(5, "test@test.com")))
        .unwrap_err();

    assert!(matches!(err, ServiceError::NotFound(EntityKind::User, 5)));
    assert!(service.get_all().is_empty());
}

#[test]
fn update_rejects_invalid_email() {
    let ctx = MemoryDatabaseContext::new();
    let service = UserService::new(&ctx);
    let id = service.add(Some(User::new(0, "test@test.com"))).unwrap();

    let err = service.update(Some(User::new(id, "broken"))).unwrap_err();

    assert!(matches!(err, ServiceError::Validation(EntityKind::User)));
    assert_eq!(service.get(id).unwrap().email, "test@test.com");
}

#[test]
fn delete_then_get_is_not_found() {
    let ctx = MemoryDatabaseContext::new();
    let service = UserService::new(&ctx);
    let id = service.add(Some(User::new(0, "test@test.com"))).unwrap();

    service.delete(id).unwrap();

    assert!(matches!(
        service.get(id).unwrap_err(),
        ServiceError::NotFound(EntityKind::User, missing) if missing == id
    ));
}

#[test]
fn deleting_a_user_does_not_cascade_to_reservations() {
    let ctx = MemoryDatabaseContext::new();
    let service = UserService::new(&ctx);
    let id = service.add(Some(User::new(0, "test@test.com"))).unwrap();
    let user = service.get(id).unwrap();

    let hotel = Hotel::new(
        1,
        "Sample name",
        NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(23, 0, 0).unwrap(),
    );
    ctx.add_reservation(Reservation::new(
        1,
        Utc.with_ymd_and_hms(2019, 5, 5, 11, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2019, 5, 6, 11, 0, 0).unwrap(),
        user.clone(),
        Room::new(1, hotel, 200, 2),
    ));

    service.delete(id).unwrap();

    // The reservation still holds the user by value; references are
    // weak and never cascade.
    let dangling = ctx.get_reservation(1).unwrap();
    assert_eq!(dangling.user, Some(user));
}
