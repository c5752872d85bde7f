pub mod about;
pub mod achievements;
pub mod contact_form;
pub mod footer;
pub mod header;
pub mod hero;
pub mod project_gallery;
pub mod project_modal;
pub mod skills;
