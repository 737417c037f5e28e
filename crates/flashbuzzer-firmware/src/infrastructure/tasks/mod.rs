mod animation;
mod dhcp_server;
mod dns_server;
mod http_server;

pub use animation::animation_task;
pub use dhcp_server::dhcp_server_task;
pub use dns_server::dns_server_task;
pub use http_server::http_server_task;
