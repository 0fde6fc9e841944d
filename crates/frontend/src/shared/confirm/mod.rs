pub mod action;
pub mod broadcaster;
pub mod dialog;
pub mod service;

pub use action::{details_action, DetailsAction};
pub use broadcaster::{ConfirmBroadcaster, PendingConfirmation};
pub use dialog::ConfirmDialog;
pub use service::{use_confirm, use_confirmed, ConfirmService};
