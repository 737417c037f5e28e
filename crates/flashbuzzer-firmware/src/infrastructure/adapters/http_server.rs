//! HTTP Server Adapter
//!
//! Allocates the socket buffers on the stack and runs the
//! `listen_and_serve` loop with the given handler. Meant to be called from
//! a task such as `http_server_task`.

use embassy_net::Stack;

use crate::net::http::{HttpHandler, HttpServer};

const HTTP_PORT: u16 = 80;
const RX_BUFFER_SIZE: usize = 4096;
const TX_BUFFER_SIZE: usize = 4096;

/// Run the HTTP server with the given handler.
///
/// This function allocates 8KB of buffers on the stack (4KB RX + 4KB TX).
pub(crate) async fn run_http_server<H: HttpHandler>(stack: Stack<'static>, handler: &H) {
    let server = HttpServer::<H, TX_BUFFER_SIZE, RX_BUFFER_SIZE>::new(handler);
    let mut rx_buffer = [0u8; RX_BUFFER_SIZE];
    let mut tx_buffer = [0u8; TX_BUFFER_SIZE];

    log::info!("http_server: listening on port {}", HTTP_PORT);
    if let Err(e) = server
        .listen_and_serve(stack, HTTP_PORT, &mut rx_buffer, &mut tx_buffer)
        .await
    {
        log::error!("http_server: stopped: {}", e);
    }
}
