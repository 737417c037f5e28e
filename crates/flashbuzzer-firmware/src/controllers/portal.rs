use alloc::string::String;

use flashbuzzer_portal::{Portal, Response};

use crate::infrastructure::services::SharedRegistry;
use crate::net::http::{Error as HttpError, HttpConnection, HttpHandler, HttpResult};

/// Serves the captive configuration portal over the shared registry.
pub struct PortalHttpController {
    portal: Portal,
    registry: &'static SharedRegistry,
}

impl PortalHttpController {
    pub fn new(portal: Portal, registry: &'static SharedRegistry) -> Self {
        Self { portal, registry }
    }
}

impl HttpHandler for PortalHttpController {
    async fn handle_request(&self, conn: HttpConnection<'_>) -> HttpResult {
        let mut conn = conn;
        let response = match conn.read_body().await {
            Ok(()) => {
                let request = conn.request()?;
                log::debug!(
                    "portal_http: {} {}",
                    request.head.method.as_str(),
                    request.head.path
                );
                // the driver loop sees either none or all of a submission
                let mut registry = self.registry.lock().await;
                self.portal.handle(&request, &mut *registry)
            }
            Err(HttpError::TooLarge) => {
                log::warn!("portal_http: request body too large");
                Response::text(413, String::from("Request Entity Too Large\n"))
            }
            Err(e) => return Err(e),
        };

        conn.respond(&response).await
    }
}
