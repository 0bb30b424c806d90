pub(crate) mod record;
pub use record::{ConfirmationType, SleepRecord};
