pub mod a001_unit;
pub mod a002_tag;
pub mod a003_status;
pub mod a004_consumable;
pub mod a005_patrimony;
pub mod a006_intent;
pub mod a007_qrcode;
pub mod a008_item;
