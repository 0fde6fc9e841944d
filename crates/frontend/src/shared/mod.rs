pub mod api;
pub mod api_utils;
pub mod components;
pub mod config;
pub mod confirm;
pub mod flash;
pub mod form_utils;
pub mod icons;
pub mod modal;
pub mod paged_list;
pub mod qr;
