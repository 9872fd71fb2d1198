use crate::error::{ExtractError, MissingAnchorReason};
use crate::extract::{ExtractMode, TileLinkExtractor};
use crate::sink::MemorySink;
use crate::tree::HtmlTree;
use url::Url;

#[cfg(test)]
mod tests {
    use super::*;

    /// A trimmed-down copy of the listing page markup
    const LISTING: &str = r#"<!DOCTYPE html>
<html>
<body>
    <article class="fixed-recipe-card">
        <div class="grid-card-image-container">
            <a class="ng-isolate-scope" href="https://www.allrecipes.com/recipe/23395/beef-stroganoff-iii/?internalSource=hub%20recipe&amp;referringContentType=Search">
                <img src="stroganoff.jpg">
            </a>
            <a href="https://www.allrecipes.com/cook/1234/">cook</a>
        </div>
    </article>
    <article class="fixed-recipe-card">
        <div class="grid-card-image-container">
            <!-- FirstElementChild is the anchor -->
            <a class="ng-isolate-scope" href="https://www.allrecipes.com/recipe/14415/russian-blini/">
                <img src="blini.jpg">
            </a>
        </div>
    </article>
    <article class="fixed-recipe-card">
        <div class="grid-card-image-container">
            <a class="ng-isolate-scope" href="https://www.allrecipes.com/recipe/23395/beef-stroganoff-iii/?clickId=cardslot%203">
                <img src="stroganoff.jpg">
            </a>
        </div>
    </article>
</body>
</html>"#;

    #[test]
    fn test_single_tile_example() {
        let tree = HtmlTree::parse_fragment(
            r#"<div class="grid-card-image-container"><a href="https://allrecipes.com/recipe/123?clickId=abc">x</a></div>"#,
        );
        let extraction = TileLinkExtractor::new().extract(&tree).unwrap();
        assert_eq!(extraction.urls, vec!["https://allrecipes.com/recipe/123"]);
    }

    #[test]
    fn test_listing_page_in_document_order_without_dedup() {
        let tree = HtmlTree::parse_document(LISTING);
        let mut sink = MemorySink::default();
        let extraction = TileLinkExtractor::new().extract_all(&tree, &mut sink).unwrap();

        let expected = vec![
            "https://www.allrecipes.com/recipe/23395/beef-stroganoff-iii/".to_string(),
            "https://www.allrecipes.com/recipe/14415/russian-blini/".to_string(),
            "https://www.allrecipes.com/recipe/23395/beef-stroganoff-iii/".to_string(),
        ];
        assert_eq!(extraction.urls, expected);
        assert!(extraction.skipped.is_empty());
        assert_eq!(sink.emitted, vec![expected]);
    }

    #[test]
    fn test_whitespace_first_child_is_skipped() {
        let tree = HtmlTree::parse_fragment(
            "<div class=\"grid-card-image-container\">\n    <a href=\"/recipe/7/\">x</a>\n</div>",
        );
        let extraction = TileLinkExtractor::new().extract(&tree).unwrap();
        assert_eq!(extraction.urls, vec!["/recipe/7/"]);
    }

    #[test]
    fn test_only_first_of_two_anchors_is_used() {
        let tree = HtmlTree::parse_fragment(
            r#"<div class="grid-card-image-container"><a href="/first">1</a><a href="/second">2</a></div>"#,
        );
        let extraction = TileLinkExtractor::new().extract(&tree).unwrap();
        assert_eq!(extraction.urls, vec!["/first"]);
    }

    #[test]
    fn test_no_tiles_is_empty_not_error() {
        let tree = HtmlTree::parse_document("<html><body><p>nothing here</p></body></html>");
        let mut sink = MemorySink::default();
        let extraction = TileLinkExtractor::new().extract_all(&tree, &mut sink).unwrap();
        assert!(extraction.urls.is_empty());
        assert_eq!(sink.emitted, vec![Vec::<String>::new()]);
    }

    #[test]
    fn test_tile_without_element_child_fails() {
        let tree = HtmlTree::parse_fragment(
            r#"<div class="grid-card-image-container"><a href="/ok">ok</a></div>
               <div class="grid-card-image-container">   just text   </div>"#,
        );
        let mut sink = MemorySink::default();
        let err = TileLinkExtractor::new().extract_all(&tree, &mut sink).unwrap_err();

        match err {
            ExtractError::MissingAnchor(missing) => {
                assert_eq!(missing.tile_index, 1);
                assert_eq!(missing.reason, MissingAnchorReason::NoElementChild);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(sink.emitted.is_empty());
    }

    #[test]
    fn test_first_element_child_without_href_fails() {
        let tree = HtmlTree::parse_fragment(
            r#"<div class="grid-card-image-container"><a name="anchor">x</a><a href="/later">y</a></div>"#,
        );
        let err = TileLinkExtractor::new().extract(&tree).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::MissingAnchor(ref missing)
                if missing.reason == MissingAnchorReason::NoLinkAttribute {
                    tag: "a".to_string(),
                    attribute: "href".to_string(),
                }
        ));
    }

    #[test]
    fn test_non_anchor_first_element_child() {
        let tree = HtmlTree::parse_fragment(
            r#"<div class="grid-card-image-container"><div class="overlay"></div><a href="/r">x</a></div>"#,
        );
        let err = TileLinkExtractor::new().extract(&tree).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::MissingAnchor(ref missing)
                if missing.reason == MissingAnchorReason::NoLinkAttribute {
                    tag: "div".to_string(),
                    attribute: "href".to_string(),
                }
        ));
    }

    #[test]
    fn test_lenient_mode_reports_skipped_tiles() {
        let tree = HtmlTree::parse_fragment(
            r#"<div class="grid-card-image-container"><a href="/a?x=1">a</a></div>
               <div class="grid-card-image-container"></div>
               <div class="grid-card-image-container"><a href="/c">c</a></div>"#,
        );
        let mut sink = MemorySink::default();
        let extraction = TileLinkExtractor::new()
            .with_mode(ExtractMode::Lenient)
            .extract_all(&tree, &mut sink)
            .unwrap();

        assert_eq!(extraction.urls, vec!["/a", "/c"]);
        assert_eq!(extraction.skipped.len(), 1);
        assert_eq!(extraction.skipped[0].tile_index, 1);
        assert_eq!(extraction.tiles_seen(), 3);
        assert_eq!(sink.emitted, vec![vec!["/a".to_string(), "/c".to_string()]]);
    }

    #[test]
    fn test_custom_marker_attribute_and_base_url() {
        let tree = HtmlTree::parse_fragment(
            r#"<li class="card"><span data-href="/recipe/9/?utm=x">x</span></li>"#,
        );
        let extractor = TileLinkExtractor::new()
            .with_marker("card")
            .with_link_attribute("data-href")
            .with_base_url(Url::parse("https://www.allrecipes.com/recipes/716/").unwrap());
        let extraction = extractor.extract(&tree).unwrap();
        assert_eq!(extraction.urls, vec!["https://www.allrecipes.com/recipe/9/"]);
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let tree = HtmlTree::parse_document(LISTING);
        let extractor = TileLinkExtractor::new();
        let first = extractor.extract(&tree).unwrap();
        let second = extractor.extract(&tree).unwrap();
        assert_eq!(first, second);
    }
}
