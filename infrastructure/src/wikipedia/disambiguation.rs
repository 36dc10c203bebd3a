//! Candidate extraction from disambiguation pages

use scraper::{Html, Selector};

/// Collect the options listed on a rendered disambiguation page.
///
/// Takes the text of the first link inside every `<li>`, skipping
/// table-of-contents entries, in document order. Duplicates are dropped.
pub(crate) fn parse_disambiguation_options(html: &str) -> Vec<String> {
    let document = Html::parse_fragment(html);
    let (Ok(item_selector), Ok(link_selector)) = (Selector::parse("li"), Selector::parse("a"))
    else {
        return Vec::new();
    };

    let mut options: Vec<String> = Vec::new();

    for item in document.select(&item_selector) {
        let is_toc = item
            .value()
            .classes()
            .any(|class| class.starts_with("tocsection") || class.starts_with("toclevel"));
        if is_toc {
            continue;
        }

        let Some(link) = item.select(&link_selector).next() else {
            continue;
        };

        let text = link.text().collect::<String>();
        let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if !text.is_empty() && !options.contains(&text) {
            options.push(text);
        }
    }

    options
}
