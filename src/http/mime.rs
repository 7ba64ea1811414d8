//! Extension-to-MIME whitelist.
//!
//! Only paths whose suffix matches a registered extension are ever served;
//! everything else is rejected before the file is opened. The table is
//! scanned in order and the first match wins, so overlapping suffixes must
//! be ordered deliberately.

/// Ordered extension whitelist, constant for the process lifetime.
pub const EXTENSIONS: &[(&str, &str)] = &[
    (".css", "text/css"),
    (".csv", "text/csv"),
    (".gif", "image/gif"),
    (".gz", "image/gz"),
    (".html", "text/html"),
    (".htm", "text/html"),
    (".ico", "image/ico"),
    (".jpeg", "image/jpeg"),
    (".jpg", "image/jpg"),
    (".json", "application/json"),
    (".js", "text/javascript"),
    (".log", "text/plain"),
    (".mp3", "audio/mpeg"),
    (".ogg", "audio/ogg"),
    (".png", "image/png"),
    (".pdf", "application/pdf"),
    (".svg", "image/svg+xml"),
    (".tar", "image/tar"),
    (".ttf", "application/font-ttf"),
    (".txt", "text/plain"),
    (".wav", "audio/wav"),
    (".woff", "application/font-woff"),
    (".zip", "image/zip"),
];

/// Returns the MIME type registered for `path`'s suffix, or `None` when no
/// table entry matches. The comparison is case-sensitive.
pub fn lookup(path: &str) -> Option<&'static str> {
    EXTENSIONS
        .iter()
        .find(|(ext, _)| path.ends_with(ext))
        .map(|&(_, filetype)| filetype)
}
