mod reminder;
mod shared;

pub use reminder::{Reminder, ReminderPatch};
pub use shared::entity::{Entity, InvalidIDError, ID};
