//! Room selection for the booking engine.

use hostel_domain::room_type::{capacity_for_room_type, room_type_matches};
use hostel_domain::student_code::sequence_of;

use crate::domain::types::{NewRoom, Room, RoomOccupancy};

/// Prefix of generated room numbers (`R-101`, `R-102`, ...).
pub const ROOM_NO_PREFIX: &str = "R";
const FIRST_ROOM_SEQUENCE: u64 = 101;

/// Outcome of room selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomChoice {
    Existing(Room),
    Create(NewRoom),
}

/// Capacity a room enforces: its stored capacity, else the one implied by its
/// stored type, else the one implied by the requested type.
pub fn effective_capacity(room: &Room, requested_type: &str) -> i32 {
    room.capacity
        .or_else(|| room.room_type.as_deref().map(capacity_for_room_type))
        .unwrap_or_else(|| capacity_for_room_type(requested_type))
}

fn least_occupied<'a>(candidates: impl Iterator<Item = &'a RoomOccupancy>) -> Option<&'a Room> {
    candidates
        .min_by_key(|r| (r.occupied, r.room.room_id))
        .map(|r| &r.room)
}

/// Pick the room for a new booking.
///
/// Prefers the least-occupied room of the requested (or no) type with a free
/// bed; then the least-occupied room of any type with a free bed; otherwise a
/// new room of the requested type is created.
pub fn choose_room(rooms: &[RoomOccupancy], requested_type: &str) -> RoomChoice {
    let has_space =
        |r: &&RoomOccupancy| r.occupied < i64::from(effective_capacity(&r.room, requested_type));

    let same_type = rooms
        .iter()
        .filter(|r| room_type_matches(r.room.room_type.as_deref(), requested_type))
        .filter(has_space);
    if let Some(room) = least_occupied(same_type) {
        return RoomChoice::Existing(room.clone());
    }
    if let Some(room) = least_occupied(rooms.iter().filter(has_space)) {
        return RoomChoice::Existing(room.clone());
    }
    RoomChoice::Create(NewRoom {
        room_no: next_room_no(rooms.iter().map(|r| r.room.room_no.as_str())),
        room_type: requested_type.to_owned(),
        capacity: capacity_for_room_type(requested_type),
    })
}

/// `R-{n}` with `n` one past the highest existing `R-` number.
pub fn next_room_no<'a>(existing: impl IntoIterator<Item = &'a str>) -> String {
    let next = existing
        .into_iter()
        .filter_map(|no| sequence_of(no, ROOM_NO_PREFIX))
        .max()
        .map_or(FIRST_ROOM_SEQUENCE, |max| max.saturating_add(1).max(FIRST_ROOM_SEQUENCE));
    format!("{ROOM_NO_PREFIX}-{next}")
}
