//! QR code details: view model with the commands, view with the markup.

mod view;
mod view_model;

pub use view::QrCodeDetails;
pub use view_model::QrCodeDetailsViewModel;
