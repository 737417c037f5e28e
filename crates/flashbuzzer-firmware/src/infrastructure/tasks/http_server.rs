use embassy_net::Stack;

use crate::controllers::PortalHttpController;
use crate::infrastructure::adapters::run_http_server;

#[embassy_executor::task]
pub async fn http_server_task(stack: Stack<'static>, handler: &'static PortalHttpController) {
    run_http_server(stack, handler).await;
}
