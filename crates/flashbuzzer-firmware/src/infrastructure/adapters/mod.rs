mod http_server;
mod trigger_button;

pub(crate) use http_server::run_http_server;
pub use trigger_button::TriggerButton;
