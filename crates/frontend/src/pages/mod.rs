pub mod about;
pub mod contact;
pub mod gallery;
pub mod home;
pub mod occasion;
pub mod state;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use gallery::GalleryPage;
pub use home::HomePage;
pub use occasion::OccasionPage;
