//! The embedded blank skeleton.
//!
//! The blank site ships inside the binary so `new:site` works with no
//! on-disk template collection. File contents are compile-time strings;
//! placeholders are rendered by the generator through its `RenderContext`.

use spress_core::{application::ports::SkeletonSource, domain::SkeletonTree, error::SpressResult};

const CONFIG_YML: &str = "\
# Site configuration.
#
# The \"name\" key records the theme this site was generated with; it is
# rewritten when a different theme is installed.
name: {{theme_name}}
title: {{site_title}}
description: ''
url: ''
markdown_ext: [md, mkd, mkdn, markdown]
";

const INDEX_HTML: &str = "\
---
layout: default
---
<!DOCTYPE html>
<html>
  <head>
    <meta charset=\"utf-8\">
    <title>{{site_title}}</title>
  </head>
  <body>
    <h1>Welcome to {{site_title}}</h1>
    <p>Your new site is ready. Add posts under <code>src/content/posts</code>.</p>
  </body>
</html>
";

/// The built-in blank site, always applied as the first skeleton layer.
///
/// A theme later augments this tree; it never removes the baseline
/// directories, so every generated site has the standard content, layout,
/// include, plugin, and asset areas.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlankSkeleton;

impl BlankSkeleton {
    pub fn new() -> Self {
        Self
    }
}

impl SkeletonSource for BlankSkeleton {
    fn tree(&self) -> SpressResult<SkeletonTree> {
        Ok(SkeletonTree::new()
            .with_file("config.yml", CONFIG_YML)
            .with_file("src/content/index.html", INDEX_HTML)
            .with_dir("src/content/assets")
            .with_dir("src/content/posts")
            .with_dir("src/layouts")
            .with_dir("src/includes")
            .with_dir("src/plugins"))
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use spress_core::domain::{RenderContext, SkeletonEntry};

    use super::*;

    #[test]
    fn tree_contains_standard_layout() {
        let tree = BlankSkeleton::new().tree().unwrap();

        assert!(tree.file("config.yml").is_some());
        assert!(tree.file("src/content/index.html").is_some());
        for dir in [
            "src/content/assets",
            "src/content/posts",
            "src/layouts",
            "src/includes",
            "src/plugins",
        ] {
            assert!(
                tree.entries()
                    .iter()
                    .any(|e| matches!(e, SkeletonEntry::Dir(p) if p == Path::new(dir))),
                "missing directory: {dir}"
            );
        }
    }

    #[test]
    fn config_template_carries_the_theme_placeholder() {
        let tree = BlankSkeleton::new().tree().unwrap();
        assert!(tree.file("config.yml").unwrap().contains("{{theme_name}}"));
    }

    #[test]
    fn rendered_config_has_a_name_line() {
        let tree = BlankSkeleton::new()
            .tree()
            .unwrap()
            .render(&RenderContext::new("vendor/name"));
        assert!(tree.file("config.yml").unwrap().contains("name: vendor/name"));
    }
}
