//! Asset URL resolution
//!
//! Backend records store uploads as paths relative to the API origin
//! (`uploads/a.jpg`). Static files are served from the origin root, not from
//! under the `/api` prefix.

/// Image shown when a record has no asset path
pub const PLACEHOLDER_IMAGE_URL: &str = "https://placehold.co/600x400?text=No+Image";

const API_PATH_SUFFIX: &str = "/api";
const ABSOLUTE_PREFIXES: [&str; 4] = ["http://", "https://", "data:", "blob:"];

/// Whether `path` is already a fetchable URL
fn is_absolute(path: &str) -> bool {
    path.starts_with("//")
        || ABSOLUTE_PREFIXES.iter().any(|prefix| {
            path.get(..prefix.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
        })
}

/// Origin static assets are served from: `base_url` without the trailing `/api`
pub fn asset_origin(base_url: &str) -> &str {
    let trimmed = base_url.trim_end_matches('/');
    trimmed
        .strip_suffix(API_PATH_SUFFIX)
        .unwrap_or(trimmed)
        .trim_end_matches('/')
}

/// Map a stored asset path to an absolute URL
///
/// Surrounding whitespace is ignored. Missing or blank paths give
/// [`PLACEHOLDER_IMAGE_URL`], absolute URLs are returned trimmed and relative
/// paths are joined onto the asset origin with exactly one slash.
pub fn resolve_asset_url(base_url: &str, path: Option<&str>) -> String {
    let path = match path.map(str::trim) {
        Some(path) if !path.is_empty() => path,
        _ => return PLACEHOLDER_IMAGE_URL.to_string(),
    };

    if is_absolute(path) {
        return path.to_string();
    }

    format!("{}/{}", asset_origin(base_url), path.trim_start_matches('/'))
}
