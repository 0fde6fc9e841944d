pub mod flash_banner;
pub mod page_header;
pub mod pagination_controls;

pub use flash_banner::FlashBanner;
pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;
