//! JSON body accessors.
//!
//! [`json_body`] turns the raw body-text accessor group into one that parses
//! and prints whole documents through any [`Json`] backend. A document that
//! fails to parse surfaces as the single `Invalid` failure of that accessor
//! application; nothing field-level is attempted on a malformed body.

use refract_core::{body_text, BiDiLensSpec, Carrier, ParamKind};

use crate::json::Json;

/// An accessor group over the carrier body, decoding to a parsed document
/// and encoding back to compact text.
///
/// ```
/// use refract_formats::{json_body, Json, SerdeJson};
/// # use refract_testing::TestMessage;
///
/// let j = SerdeJson;
/// let body = json_body::<TestMessage, _>(j).required("body");
///
/// let document = j.obj(vec![("hello", j.string(Some("world")))]);
/// let request = body.inject(document.clone(), TestMessage::new());
///
/// assert_eq!(body.extract(&request), Ok(document));
/// ```
#[must_use]
pub fn json_body<C, J>(json: J) -> BiDiLensSpec<C, J::Root>
where
    C: Carrier + 'static,
    J: Json + Clone + Send + Sync + 'static,
    J::Root: Send + Sync + 'static,
{
    let printer = json.clone();
    body_text::<C>().with_kind(ParamKind::Object).try_map(
        move |raw: String| json.parse(&raw),
        move |document: J::Root| printer.compact(&document),
    )
}
