use thiserror::Error;

use crate::escape::escape_html;
use crate::payload::{encode_script_payload, PayloadError};

/// Element id of the reorderable gallery container.
pub const GALLERY_CONTAINER_ID: &str = "sortable";
/// Element id of the embedded JSON payload consumed by the client loader.
pub const PAYLOAD_ELEMENT_ID: &str = "gallery-data";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("embedded payload failed: {0}")]
    Payload(#[from] PayloadError),
}

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Image URL Viewer</title>
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <!-- Bootstrap CSS for styling -->
    <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css" rel="stylesheet">
    <style>
      body {
        background-color: #f8f9fa;
      }
      .container {
        max-width: 1200px;
        margin-top: 50px;
      }
      .image-container {
        display: grid;
        grid-template-columns: repeat(5, 1fr);
        gap: 15px;
        margin-top: 20px;
      }
      .image-container figure {
        margin: 0;
        position: relative;
        cursor: grab;
      }
      .image-container figure:active {
        cursor: grabbing;
      }
      .image-container img {
        width: 100%;
        height: auto;
        object-fit: cover;
        border: 1px solid #ccc;
        border-radius: 5px;
        transition: transform 0.3s ease, box-shadow 0.3s ease;
        transform-origin: center center;
        position: relative;
        z-index: 1;
        pointer-events: auto;
        will-change: transform;
      }
      .image-container img:hover {
        transform: scale(1.5);
        z-index: 10;
        box-shadow: 0 8px 16px rgba(0, 0, 0, 0.3);
      }
      .position-label {
        position: absolute;
        top: 4px;
        left: 4px;
        z-index: 11;
        padding: 1px 6px;
        border-radius: 4px;
        background-color: rgba(33, 37, 41, 0.75);
        color: #fff;
        font-size: 0.8rem;
      }
      #loading-indicator {
        margin-top: 20px;
        text-align: center;
      }
      /* Placeholder styling while dragging */
      .sortable-ghost {
        opacity: 0.6;
        background-color: #ffeeba;
        border: 2px dashed #ffc107;
        border-radius: 5px;
        height: 100%;
      }
      .sortable-chosen {
        box-shadow: 0 8px 16px rgba(0, 0, 0, 0.3);
      }
      @media (max-width: 1200px) {
        .image-container {
          grid-template-columns: repeat(4, 1fr);
        }
      }
      @media (max-width: 992px) {
        .image-container {
          grid-template-columns: repeat(3, 1fr);
        }
      }
      @media (max-width: 768px) {
        .image-container {
          grid-template-columns: repeat(2, 1fr);
        }
      }
      @media (max-width: 576px) {
        .image-container {
          grid-template-columns: repeat(1, 1fr);
        }
      }
    </style>
</head>
"#;

/// Reorder-capability bootstrap: SortableJS over the gallery container,
/// persisting the scanned order to local storage on every drag end and
/// renumbering the positional labels.
const SORTABLE_BOOTSTRAP: &str = r#"<script>
  document.addEventListener('DOMContentLoaded', function () {
    var container = document.getElementById('sortable');
    if (!container || typeof Sortable === 'undefined') return;
    Sortable.create(container, {
      animation: 150,
      ghostClass: 'sortable-ghost',
      chosenClass: 'sortable-chosen',
      dragClass: 'sortable-drag',
      forceFallback: false,
      swapThreshold: 0.65,
      filter: '.no-drag',
      onEnd: function () {
        var order = Array.prototype.map.call(
          container.querySelectorAll('img'),
          function (img) { return img.getAttribute('src'); }
        );
        localStorage.setItem('gallery.image-order', JSON.stringify(order));
        Array.prototype.forEach.call(
          container.querySelectorAll('.position-label'),
          function (label, idx) { label.textContent = idx + 1; }
        );
      }
    });
  });
</script>
"#;

const PAGE_FOOT: &str = r#"</div>
<!-- Bootstrap JS -->
<script src="https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/js/bootstrap.bundle.min.js"></script>
<!-- SortableJS Library -->
<script src="https://cdn.jsdelivr.net/npm/sortablejs@1.15.0/Sortable.min.js"></script>
</body>
</html>
"#;

/// Pure, deterministic page renderer. The raw input is echoed back into the
/// form and every URL lands in an image-source attribute; both go through
/// the fixed escaping table. The gallery region, including the embedded
/// payload, is emitted only for a non-empty list.
pub fn render_page(urls: &[String], raw_echo: &str) -> Result<String, RenderError> {
    let mut doc = String::with_capacity(PAGE_HEAD.len() + 2048 + urls.len() * 192);
    doc.push_str(PAGE_HEAD);
    doc.push_str("<body>\n<div class=\"container\">\n<h1 class=\"mb-4\">Image URL Viewer</h1>\n");
    doc.push_str(&render_form(raw_echo));
    if !urls.is_empty() {
        doc.push_str(&render_gallery(urls)?);
    }
    doc.push_str(PAGE_FOOT);
    Ok(doc)
}

fn render_form(raw_echo: &str) -> String {
    format!(
        concat!(
            "<form method=\"POST\">\n",
            "  <div class=\"mb-3\">\n",
            "    <label for=\"urls\" class=\"form-label\">",
            "Enter Image URLs (one per line or separated by spaces):</label>\n",
            "    <textarea class=\"form-control\" id=\"urls\" name=\"urls\" rows=\"5\" ",
            "placeholder=\"Paste image URLs here...\">{echo}</textarea>\n",
            "  </div>\n",
            "  <button class=\"btn btn-primary\" type=\"submit\">Show Images</button>\n",
            "</form>\n",
        ),
        echo = escape_html(raw_echo)
    )
}

fn render_gallery(urls: &[String]) -> Result<String, RenderError> {
    let mut region = String::new();
    region.push_str(&format!(
        "<div id=\"{GALLERY_CONTAINER_ID}\" class=\"image-container\">\n"
    ));
    for (idx, url) in urls.iter().enumerate() {
        let position = idx + 1;
        let src = escape_html(url);
        // The figure is the atomic drag unit; the broken-image handler hides
        // the whole unit, label included.
        region.push_str(&format!(
            concat!(
                "  <figure class=\"gallery-item\">",
                "<span class=\"position-label no-drag\">{position}</span>",
                "<img src=\"{src}\" alt=\"Image\" loading=\"lazy\" ",
                "onerror=\"this.parentElement.style.display='none'\"/>",
                "</figure>\n",
            ),
            position = position,
            src = src
        ));
    }
    region.push_str("</div>\n");
    region.push_str("<div id=\"loading-indicator\" class=\"d-none text-muted\">Loading...</div>\n");

    let payload = encode_script_payload(urls)?;
    region.push_str(&format!(
        "<script type=\"application/json\" id=\"{PAYLOAD_ELEMENT_ID}\">{payload}</script>\n"
    ));
    region.push_str(SORTABLE_BOOTSTRAP);
    Ok(region)
}
