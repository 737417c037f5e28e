mod portal;

pub use portal::PortalHttpController;
