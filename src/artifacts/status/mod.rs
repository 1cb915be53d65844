pub mod inspector;
pub mod status_info;
