//! Uniform diagnostic responses for accessor failures.

use http::header::CONTENT_TYPE;
use http::{HeaderValue, Response, StatusCode};
use refract_core::Failure;

use crate::json::Json;

/// Renders accessor failures as uniform JSON error responses.
///
/// The renderer is a pure constructor over a [`Json`] backend: the same
/// failures always produce the same body, byte for byte.
#[derive(Debug, Clone)]
pub struct ErrorResponseRenderer<J> {
    json: J,
}

impl<J: Json> ErrorResponseRenderer<J> {
    /// Build a renderer over the given backend.
    pub const fn new(json: J) -> Self {
        Self { json }
    }

    /// A 400 response listing every failed accessor, in failure order.
    ///
    /// Body shape:
    /// `{"message":"Missing/invalid parameters","params":[{"name":…,"type":…,"required":…,"reason":…},…]}`
    pub fn bad_request(&self, failures: &[Failure]) -> Response<String> {
        tracing::debug!(count = failures.len(), "rendering bad request");
        let params = failures.iter().map(|failure| {
            self.json
                .obj(vec![
                    ("name", self.json.string(Some(failure.meta().name()))),
                    (
                        "type",
                        self.json.string(Some(failure.meta().location().as_str())),
                    ),
                    ("required", self.json.boolean(Some(failure.meta().required()))),
                    ("reason", self.json.string(Some(failure.reason()))),
                ])
                .into()
        });
        let params: Vec<J::Node> = params.collect();
        let body = self.json.obj(vec![
            (
                "message",
                self.json.string(Some("Missing/invalid parameters")),
            ),
            ("params", self.json.array(params).into()),
        ]);
        json_response(StatusCode::BAD_REQUEST, self.json.compact(&body))
    }

    /// The fixed 404 response for an unmatched route.
    pub fn not_found(&self) -> Response<String> {
        let body = self.json.obj(vec![(
            "message",
            self.json.string(Some(
                "No route found on this path. Have you used the correct HTTP verb?",
            )),
        )]);
        json_response(StatusCode::NOT_FOUND, self.json.compact(&body))
    }
}

fn json_response(status: StatusCode, body: String) -> Response<String> {
    let mut response = Response::new(body);
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}

#[cfg(test)]
mod tests {
    use refract_core::{AccessorMeta, Location, ParamKind};

    use super::*;
    use crate::backend::SerdeJson;

    fn renderer() -> ErrorResponseRenderer<SerdeJson> {
        ErrorResponseRenderer::new(SerdeJson)
    }

    #[test]
    fn bad_request_lists_every_failure_in_order() {
        let missing = Failure::Missing(AccessorMeta::new(
            "session",
            Location::Cookie,
            true,
            ParamKind::String,
        ));
        let invalid = Failure::Invalid(AccessorMeta::new(
            "page",
            Location::Query,
            false,
            ParamKind::Integer,
        ));

        let response = renderer().bad_request(&[missing, invalid]);

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(CONTENT_TYPE),
            Some(&HeaderValue::from_static("application/json"))
        );
        assert_eq!(
            response.body(),
            concat!(
                r#"{"message":"Missing/invalid parameters","params":["#,
                r#"{"name":"session","type":"cookie","required":true,"reason":"Missing"},"#,
                r#"{"name":"page","type":"query","required":false,"reason":"Invalid"}]}"#
            )
        );
    }

    #[test]
    fn bad_request_with_no_failures_renders_empty_params() {
        let response = renderer().bad_request(&[]);
        assert_eq!(
            response.body(),
            r#"{"message":"Missing/invalid parameters","params":[]}"#
        );
    }

    #[test]
    fn not_found_is_fixed() {
        let response = renderer().not_found();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.body(),
            r#"{"message":"No route found on this path. Have you used the correct HTTP verb?"}"#
        );
    }
}
