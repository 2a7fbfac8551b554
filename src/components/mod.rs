pub mod button;
pub mod feature_card;
pub mod icon;
pub mod navbar;
pub mod remote_image;
pub mod section_heading;
