pub mod dispatch;

pub use dispatch::{DispatchOutcome, OrderNotificationService, SkipReason};
