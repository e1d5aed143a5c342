//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `hotelier_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use chrono::{NaiveTime, TimeZone, Utc};
use hotelier_core::{
    CoreConfig, DatabaseContext, Hotel, MemoryDatabaseContext, Reservation, ReservationService,
    Room, RoomService, User, UserService,
};

fn main() {
    println!("hotelier_core version={}", hotelier_core::core_version());

    let config = CoreConfig::default();
    if let Some(log_dir) = config.log_dir.as_deref().and_then(|dir| dir.to_str()) {
        if let Err(error) = hotelier_core::init_logging(&config.log_level, log_dir) {
            eprintln!("logging disabled: {error}");
        }
    }

    let ctx = MemoryDatabaseContext::new();
    let hotel = Hotel::new(
        ctx.next_hotel_id(),
        "Grand Meridian",
        NaiveTime::from_hms_opt(8, 0, 0).expect("valid open time"),
        NaiveTime::from_hms_opt(23, 0, 0).expect("valid close time"),
    );
    ctx.add_hotel(hotel.clone());

    let users = UserService::new(&ctx);
    let rooms = RoomService::new(&ctx);
    let reservations = ReservationService::with_policy(&ctx, config.reference_policy);

    let user_id = users
        .add(Some(User::new(0, "guest@example.com")))
        .expect("seed user should pass validation");
    let room_id = rooms
        .add(Some(Room::new(0, hotel, 101, 2)))
        .expect("seed room should pass validation");

    let user = users.get(user_id).expect("seed user is stored");
    let room = rooms.get(room_id).expect("seed room is stored");
    let reservation_id = reservations
        .add(Some(Reservation::new(
            0,
            Utc.with_ymd_and_hms(2026, 8, 10, 14, 0, 0).single().expect("valid start"),
            Utc.with_ymd_and_hms(2026, 8, 12, 10, 0, 0).single().expect("valid end"),
            user.clone(),
            room,
        )))
        .expect("seed reservation should pass validation");

    println!(
        "booked reservation id={reservation_id} user={} rooms_stored={} reservations_of_user={}",
        user.email,
        rooms.get_all().len(),
        reservations.reservations_of_user(Some(&user)).len()
    );
}
