//! Domain types shared across the hostel crates.
//!
//! Pure types with no framework dependencies.

pub mod role;
pub mod room_type;
pub mod student_code;
