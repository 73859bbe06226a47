//! Method dispatch for the schedule endpoint.

use lambda_http::http::Method;
use lambda_http::{Body, Request, RequestExt, Response};
use std::sync::Arc;
use tracing::info;

use shared::http::{json_response, text_response};
use shared::{ApiResponse, Error, IpLookup, Result, RouterVariant, ScheduleStore};

use crate::handlers::{self, Reply};

/// Routes GET and POST to the schedule handlers.
pub struct Router {
    store: Arc<dyn ScheduleStore>,
    ip_lookup: Arc<dyn IpLookup>,
    variant: RouterVariant,
    table_name: String,
}

impl Router {
    pub fn new(
        store: Arc<dyn ScheduleStore>,
        ip_lookup: Arc<dyn IpLookup>,
        variant: RouterVariant,
        table_name: impl Into<String>,
    ) -> Self {
        Self {
            store,
            ip_lookup,
            variant,
            table_name: table_name.into(),
        }
    }

    pub async fn route(&self, event: &Request) -> Result<Reply> {
        let params = event.path_parameters();
        let sid = params.first("sid");
        let method = event.method();

        info!("Routing {} sid={:?} variant={:?}", method, sid, self.variant);

        match (method, self.variant) {
            (&Method::GET, _) => handlers::get_schedule(self.store.as_ref(), sid).await,
            (&Method::POST, RouterVariant::Store) => {
                handlers::put_schedule(self.store.as_ref(), &self.table_name, sid, event.body().as_ref())
                    .await
            }
            (&Method::POST, RouterVariant::IpEcho) => handlers::echo_ip(self.ip_lookup.as_ref()).await,
            _ => Err(Error::MethodNotAllowed(method.to_string())),
        }
    }
}

impl Reply {
    /// Render as a 200 response.
    pub fn into_response(self) -> std::result::Result<Response<Body>, lambda_http::Error> {
        match self {
            Reply::Record(schedule) => json_response(200, &ApiResponse::success(schedule)),
            Reply::Text(text) => text_response(200, text),
        }
    }
}
