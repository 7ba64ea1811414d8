//! Directory listing synthesis.

use std::path::Path;

use bytes::Bytes;
use tokio::fs;

/// Renders a minimal HTML listing for `dir`, linking each entry under
/// `/<request_dir>/<name>`. Entries are sorted; names starting with `.` are
/// hidden. The document is rendered in memory and served through the normal
/// framing pipeline as `text/html`.
pub async fn render(dir: &Path, request_dir: &str) -> std::io::Result<Bytes> {
    let mut names = Vec::new();
    let mut entries = fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        names.push(name);
    }
    names.sort();

    let mut document = String::new();
    document.push_str(
        "<html><head><style>.contain{max-width:800px;margin:0 auto;\
         border:1px solid #ddd;border-radius:5px;padding:20px;} \
         .hd{font-weight:bold;font-size:16px;}</style>\n",
    );
    document.push_str(&format!(
        "</head><body><div class=\"contain\">\
         <div class=\"hd\">Directory listing for {request_dir}</div>\n<ol>\n"
    ));
    for name in &names {
        document.push_str(&format!(
            "<li><a href=\"/{request_dir}/{name}\">{name}</a></li>\n"
        ));
    }
    document.push_str("</ol></div></body></html>");

    Ok(Bytes::from(document))
}
