//! Gallery engine: server-side URL extraction and page rendering pipeline.
mod escape;
mod extract;
mod payload;
mod render;

pub use escape::escape_html;
pub use extract::{
    extract_urls, ExtractReport, ExtractSettings, SplitPolicy, DEFAULT_URL_LIMIT,
    LARGE_LIST_URL_LIMIT,
};
pub use payload::{decode_script_payload, encode_script_payload, PayloadError};
pub use render::{render_page, RenderError, GALLERY_CONTAINER_ID, PAYLOAD_ELEMENT_ID};
