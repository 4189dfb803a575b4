//! sea-orm entities for the tables the hostel service reads and writes.
//!
//! `hostel` and `staff` are created by migrations but have no entity here.

pub mod attendance;
pub mod fees;
pub mod room;
pub mod room_allocation;
pub mod student;
pub mod users;
