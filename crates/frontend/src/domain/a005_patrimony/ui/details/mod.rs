//! Patrimony details: view model with the commands, view with the markup.

mod view;
mod view_model;

pub use view::PatrimonyDetails;
pub use view_model::PatrimonyDetailsViewModel;
