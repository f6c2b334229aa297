//! Secret path rewriting and URL path joining.

use envault_core::{API_VERSION_SEGMENT, KV_DATA_SEGMENT, KV_MOUNT, KV_SHORTHAND_PREFIX};

/// Rewrite a `kvv2/<path>` shorthand into the KV v2 data path.
///
/// When `address` already ends in `/v1` the version segment is implied and
/// left out, so `kvv2/app/env` becomes `kvv2/data/app/env`; otherwise it
/// becomes `v1/kvv2/data/app/env`. A single leading slash on `requested` is
/// preserved. Paths without the shorthand prefix are returned unchanged.
pub fn normalize_secret_path(address: &str, requested: &str) -> String {
    if requested.is_empty() {
        return String::new();
    }

    let had_slash = requested.starts_with('/');
    let sanitized = requested.strip_prefix('/').unwrap_or(requested);
    let Some(suffix) = sanitized.strip_prefix(KV_SHORTHAND_PREFIX) else {
        return requested.to_string();
    };

    let version_suffix = format!("/{API_VERSION_SEGMENT}");
    let base = if address.trim_end_matches('/').ends_with(&version_suffix) {
        join_segments(&[KV_MOUNT, KV_DATA_SEGMENT])
    } else {
        join_segments(&[API_VERSION_SEGMENT, KV_MOUNT, KV_DATA_SEGMENT])
    };
    let rewritten = join_segments(&[&base, suffix]);

    if had_slash {
        format!("/{rewritten}")
    } else {
        rewritten
    }
}

/// Join `relative` onto `base` and return an absolute, cleaned path.
///
/// Empty and `.` segments are dropped, `..` removes the previous segment, and
/// no trailing slash is kept.
pub fn join_url_path(base: &str, relative: &str) -> String {
    format!("/{}", join_segments(&[base, relative]))
}

fn join_segments(parts: &[&str]) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for part in parts {
        for segment in part.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    segments.pop();
                }
                s => segments.push(s),
            }
        }
    }
    segments.join("/")
}
