mod bubble;
mod reply;
mod view;

pub use view::Chat;
