pub mod admin;
pub mod domain;
pub mod gui_props;
