//! HTML safety checks
//!
//! These are pattern heuristics over the raw markup, not DOM validation.
//! They over-reject: any hit discards the whole document.

use std::sync::LazyLock;

use regex::Regex;

use crate::generate::FALLBACK_HTML;

/// Restrictive policy injected when a document carries none
pub(crate) const CSP_META: &str = r#"<meta http-equiv="Content-Security-Policy" content="default-src 'none'; img-src data:; style-src 'unsafe-inline'; script-src 'unsafe-inline'; font-src data:;">"#;

/// Tag body up to the closing `>`; a `>` inside a quoted value doesn't end it
const TAG_BODY: &str = r#"(?:[^>"']|"[^"]*"|'[^']*')*"#;

/// URL literals, stylesheet/icon links, external scripts
static EXTERNAL_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)https?://|<link\b|<script\b{TAG_BODY}\bsrc\s*="))
        .expect("valid regex")
});

static IMG_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"(?i)<img\b{TAG_BODY}")).expect("valid regex"));

static SRC_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\bsrc\s*=\s*["']?"#).expect("valid regex"));

static CSP_META_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<meta[^>]+Content-Security-Policy").expect("valid regex")
});

/// First `<head>` or `<html ...>` opening tag
static CSP_ANCHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<head>|<html[^>]*>").expect("valid regex"));

pub(crate) fn has_external_reference(html: &str) -> bool {
    if EXTERNAL_REF.is_match(html) {
        return true;
    }
    IMG_TAG.find_iter(html).any(|tag| {
        let tag = tag.as_str();
        SRC_ATTR
            .find_iter(tag)
            .any(|src| !is_data_uri(&tag[src.end()..]))
    })
}

fn is_data_uri(value: &str) -> bool {
    value
        .get(..5)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("data:"))
}

pub(crate) fn has_csp_meta(html: &str) -> bool {
    CSP_META_TAG.is_match(html)
}

/// Insert the CSP meta tag after the first `<head>`/`<html ...>` tag, or at
/// the top of the document when neither exists. No-op if a CSP meta exists.
pub(crate) fn ensure_csp(html: &str) -> String {
    if has_csp_meta(html) {
        return html.to_string();
    }
    match CSP_ANCHOR.find(html) {
        Some(anchor) => {
            let (head, tail) = html.split_at(anchor.end());
            format!("{head}\n{CSP_META}{tail}")
        }
        None => format!("{CSP_META}\n{html}"),
    }
}

/// Replace unsafe or empty documents with the fallback, then enforce CSP.
pub(crate) fn sanitize_html(html: &str) -> String {
    let candidate = if html.is_empty() {
        tracing::warn!("generated HTML is empty, using fallback demo");
        FALLBACK_HTML
    } else if has_external_reference(html) {
        tracing::warn!("generated HTML references external resources, using fallback demo");
        FALLBACK_HTML
    } else {
        html
    };
    ensure_csp(candidate)
}
