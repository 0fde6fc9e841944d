//! Consumable details: view model with the commands, view with the markup.

mod view;
mod view_model;

pub use view::ConsumableDetails;
pub use view_model::ConsumableDetailsViewModel;
