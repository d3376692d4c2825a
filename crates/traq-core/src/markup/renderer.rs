//! Markup renderer - three staged rewrite passes over raw message text

use std::borrow::Cow;

use regex::{Captures, Regex};
use url::Url;

use super::catalogue::StampCatalogue;

/// Rewrites raw traQ message text into markdown.
///
/// Three passes run in a fixed order, each a single linear scan replacing
/// all non-overlapping matches of the pass's pattern in the output of the
/// previous pass:
///
/// 1. file URLs on the configured server become inline thumbnails,
/// 2. `:name:` stamp/mention shorthand becomes inline images,
/// 3. `!{"type":...}` embedded entity references become bold links.
///
/// The order matters: pass 1 must see URLs before anything else touches the
/// text, and pass 3's literal braces and quotes must reach it unmangled.
/// Unmatched input always passes through verbatim, so rendering is total.
pub struct MarkupRenderer {
    base: Url,
    /// `base` without its trailing slash, ready for path concatenation
    prefix: String,
    file_link: Regex,
    stamp_shorthand: Regex,
    entity_ref: Regex,
}

impl MarkupRenderer {
    /// Create a renderer bound to the configured server.
    ///
    /// The base URL is fixed for the renderer's lifetime; generated image
    /// and link targets all point at it.
    #[must_use]
    pub fn new(server_base: Url) -> Self {
        let prefix = server_base.as_str().trim_end_matches('/').to_string();
        Self {
            base: server_base,
            prefix,
            file_link: Regex::new(r"https://.+/files/(?P<file_id>[0-9a-f-]+)")
                .expect("hard-coded pattern compiles"),
            stamp_shorthand: Regex::new(r":(?P<name>[@0-9a-zA-Z_-]+)(?:\.[a-z-]+)*:")
                .expect("hard-coded pattern compiles"),
            entity_ref: Regex::new(
                r#"!\{"type":"(?P<kind>channel|group|user)","raw":"(?P<raw>[^"]*)","id":"(?P<id>[0-9a-f-]+)"\}"#,
            )
            .expect("hard-coded pattern compiles"),
        }
    }

    /// Rewrite `raw` into markdown, resolving stamp names via `stamps`.
    ///
    /// Total function: input that matches none of the three patterns is
    /// returned unchanged, and no pass can fail.
    #[must_use]
    pub fn render(&self, raw: &str, stamps: &StampCatalogue) -> String {
        let with_thumbnails = self.rewrite_file_links(raw);
        let with_stamps = self.rewrite_stamp_shorthand(&with_thumbnails, stamps);
        self.rewrite_entity_refs(&with_stamps).into_owned()
    }

    /// Pass 1: file URLs on the configured host become markdown thumbnails.
    ///
    /// Host comparison is exact - a URL on any other host keeps its original
    /// text, so foreign links can never render as trusted images.
    fn rewrite_file_links<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.file_link.replace_all(text, |caps: &Captures| {
            let matched = &caps[0];
            let Ok(parsed) = Url::parse(matched) else {
                return matched.to_string();
            };
            if parsed.host_str() != self.base.host_str() {
                return matched.to_string();
            }
            let file_id = &caps["file_id"];
            format!("![]({}/files/{file_id}/thumbnail)", self.prefix)
        })
    }

    /// Pass 2: `:name:` shorthand becomes an inline image.
    ///
    /// A leading `@` marks a user mention and is always rewritten to the
    /// public icon endpoint with no existence check. Anything else is looked
    /// up in the catalogue by exact name; unknown names keep their original
    /// text. `.modifier` suffixes are effect-only and ignored for lookup,
    /// but the image alt text keeps the full shorthand.
    fn rewrite_stamp_shorthand<'a>(
        &self,
        text: &'a str,
        stamps: &StampCatalogue,
    ) -> Cow<'a, str> {
        self.stamp_shorthand.replace_all(text, |caps: &Captures| {
            let raw = &caps[0];
            let name = &caps["name"];

            if let Some(user) = name.strip_prefix('@') {
                return format!("![{raw}]({}/public/icon/{user})", self.prefix);
            }

            match stamps.get(name) {
                Some(stamp) => format!("![{raw}]({}/stamps/{}/image)", self.prefix, stamp.id),
                None => raw.to_string(),
            }
        })
    }

    /// Pass 3: embedded entity references become bold markdown links.
    ///
    /// The link path pluralizes the type mechanically: `channel` links to
    /// `/channels/<id>`, `group` to `/groups/<id>`, `user` to `/users/<id>`.
    fn rewrite_entity_refs<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.entity_ref.replace_all(text, |caps: &Captures| {
            let kind = &caps["kind"];
            let raw = &caps["raw"];
            let id = &caps["id"];
            format!("**[{raw}]({}/{kind}s/{id})**", self.prefix)
        })
    }
}
