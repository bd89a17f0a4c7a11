//! Pure, stateless rules evaluation over board snapshots.

pub mod draw;
pub mod win;
