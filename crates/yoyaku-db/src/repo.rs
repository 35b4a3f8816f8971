//! Repository traits and implementations.

pub mod reservation;

pub use reservation::{MySqlReservationRepo, NewReservation, ReservationRepo};
