mod landing;
mod not_found;
mod users;

pub use landing::LandingPage;
pub use not_found::NotFound;
pub use users::Users;
