pub mod interaction;
pub mod layout;
pub mod svg;
pub mod view;
