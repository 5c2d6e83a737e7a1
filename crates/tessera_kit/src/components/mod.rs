//! Component configurations and their style tables

pub mod badge;
pub mod button;
pub mod circle_icon_button;
pub mod input_field;
pub mod text;
