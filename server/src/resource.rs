use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::Value;
use widgets_api::{escape_html, ErrorMessage, Widget};

use crate::negotiation::{is_form_content_type, Format};
use crate::store::{StoreError, WidgetStore};

/// Where the widget collection lives.
pub const PATH: &str = "/widgets";

/// A rendered body together with its media type.
#[derive(Debug, Clone, PartialEq)]
pub struct Representation {
    content_type: &'static str,
    body: Vec<u8>,
}

impl Representation {
    fn new(format: Format, body: impl Into<Vec<u8>>) -> Self {
        Representation {
            content_type: format.content_type(),
            body: body.into(),
        }
    }

    fn json(value: Value) -> Self {
        Self::new(Format::Json, value.to_string())
    }

    fn html(body: String) -> Self {
        Self::new(Format::Html, body)
    }

    pub fn content_type(&self) -> &'static str {
        self.content_type
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

impl IntoResponse for Representation {
    fn into_response(self) -> Response {
        let mut response = self.body.into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(self.content_type),
        );
        response
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CreateError {
    #[error("Expected a form encoded body, got {0:?}")]
    UnsupportedContentType(Option<String>),
    #[error("Malformed form body: {0}")]
    MalformedForm(#[from] serde_urlencoded::de::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CreateError {
    pub fn status(&self) -> StatusCode {
        match self {
            CreateError::UnsupportedContentType(_) => StatusCode::BAD_REQUEST,
            CreateError::MalformedForm(_) | CreateError::Store(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for CreateError {
    fn into_response(self) -> Response {
        self.status().into_response()
    }
}

/// The widget collection, backed by whatever store it was built with.
pub struct WidgetsResource {
    store: Arc<dyn WidgetStore>,
}

impl WidgetsResource {
    pub fn new(store: Arc<dyn WidgetStore>) -> Self {
        WidgetsResource { store }
    }

    /// Render the whole collection.
    ///
    /// A store with no collection yields an error message in the requested
    /// format rather than a failure status.
    pub fn list(&self, format: Format) -> Representation {
        let widgets = match self.store.fetch() {
            Some(widgets) => widgets,
            None => {
                tracing::warn!(?format, "widget collection is not provisioned");
                return represent_error(format, &ErrorMessage::default());
            }
        };
        tracing::debug!(count = widgets.len(), ?format, "listing widgets");

        match format {
            Format::Json => {
                Representation::json(Value::Array(widgets.iter().map(Widget::to_json).collect()))
            }
            Format::Html => Representation::html(render_page(&widgets)),
        }
    }

    /// Create a widget from a form encoded body.
    ///
    /// The response is always the compact HTML rendering of the new widget.
    pub fn create(
        &self,
        content_type: Option<&str>,
        body: &[u8],
    ) -> Result<Representation, CreateError> {
        if !is_form_content_type(content_type) {
            return Err(CreateError::UnsupportedContentType(
                content_type.map(str::to_owned),
            ));
        }

        let form: Vec<(String, String)> = serde_urlencoded::from_bytes(body)?;
        let name = form
            .into_iter()
            .find(|(key, _)| key == "name")
            .map(|(_, value)| value)
            .unwrap_or_default();

        let widget = Widget::new(name);
        let html = widget.to_html(false);
        self.store.save(widget)?;

        Ok(Representation::html(html))
    }
}

fn represent_error(format: Format, em: &ErrorMessage) -> Representation {
    match format {
        Format::Json => Representation::json(em.to_json()),
        Format::Html => Representation::html(em.to_string()),
    }
}

fn render_page(widgets: &[Widget]) -> String {
    let mut s = String::new();

    s += "<html><head><title>Widget Resources</title></head><body>";
    s += "<h1>Widget Resources</h1>";
    s += &format!(
        "<form name=\"input\" action=\"{}\" method=\"POST\">",
        escape_html(PATH)
    );
    s += "Widget name: ";
    s += "<input type=\"text\" name=\"name\" />";
    s += "<input type=\"submit\" value=\"Create\" />";
    s += "</form>";
    s += &format!("<br/><h2> There are {} total.</h2>", widgets.len());
    for widget in widgets {
        s += &widget.to_html(true);
    }
    s += "</body></html>";

    s
}
