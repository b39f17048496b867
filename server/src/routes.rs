use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::Extension,
    http::{header, HeaderMap},
    routing::get,
    AddExtensionLayer, Router,
};

use crate::negotiation::Format;
use crate::resource::{CreateError, Representation, WidgetsResource, PATH};

pub fn router(resource: Arc<WidgetsResource>) -> Router {
    Router::new()
        .route(PATH, get(list_widgets).post(create_widget))
        .layer(AddExtensionLayer::new(resource))
}

async fn list_widgets(
    Extension(resource): Extension<Arc<WidgetsResource>>,
    headers: HeaderMap,
) -> Representation {
    let accept = headers.get(header::ACCEPT).and_then(|h| h.to_str().ok());
    resource.list(Format::from_accept(accept))
}

async fn create_widget(
    Extension(resource): Extension<Arc<WidgetsResource>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Representation, CreateError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|h| h.to_str().ok());

    match resource.create(content_type, &body) {
        Ok(representation) => {
            tracing::info!("created widget");
            Ok(representation)
        }
        Err(err @ CreateError::UnsupportedContentType(_)) => {
            tracing::warn!(error = %err, "rejected widget submission");
            Err(err)
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to create widget");
            Err(err)
        }
    }
}
