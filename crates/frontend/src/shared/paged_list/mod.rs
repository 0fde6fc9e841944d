pub mod loader;
pub mod state;

pub use loader::PagedList;
pub use state::{LoadTicket, PagedListState};
