pub mod confirmation;
pub mod pagination;
