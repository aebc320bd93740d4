//! User profile records exchanged with the backend and kept in session state.

mod user;

pub use user::{Dob, Location, Login, Name, Picture, RandomUserRecord, Street, User, UserPatch};
