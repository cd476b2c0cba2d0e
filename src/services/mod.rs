pub mod crypto;
pub mod pages;
pub mod uploads;

pub use pages::PageService;
pub use uploads::UploadService;
