pub mod claim;
pub mod dropdown;
pub mod input;
pub mod line_item;
pub mod note;
pub mod notification;
pub mod returns;
pub mod simple_event;
pub mod swap;
pub mod tag_input;
pub mod timeline;
pub mod toast;
