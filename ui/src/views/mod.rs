mod home;
pub use home::Home;
pub(crate) use home::SERVICES;
