pub mod fonts;
pub mod layout;
