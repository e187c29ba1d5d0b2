pub mod boot;
pub mod configure_backend;
pub mod mount_root;
pub mod suppress_banner;

pub use boot::{BootCoordinator, BootCoordinatorDeps};
pub use configure_backend::ConfigureBackend;
pub use mount_root::MountRoot;
pub use suppress_banner::SuppressStartupBanner;
