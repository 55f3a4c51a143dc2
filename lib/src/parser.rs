use crate::models::{Bookmark, Folder, Node};
use log::debug;
use scraper::{ElementRef, Html};

/// Parse a Netscape bookmark file into its bookmark tree
///
/// The tree is read from the first `<DL>` of the document; a document without
/// one holds no bookmarks. Exports never close `<DT>` or `<p>`, so the markup
/// goes through a full HTML parser that applies the implied end tags.
pub fn parse_bookmarks(html: &str) -> Vec<Node> {
    let document = Html::parse_document(html);
    let root = document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|element| element.value().name() == "dl");

    match root {
        Some(list) => parse_list(list),
        None => {
            debug!("No <DL> element found, document holds no bookmarks");
            Vec::new()
        }
    }
}

/// Parse the items of one `<DL>` level, in document order
pub fn parse_list(list: ElementRef) -> Vec<Node> {
    child_elements(list)
        .filter(|child| child.value().name() == "dt")
        .filter_map(parse_item)
        .collect()
}

fn child_elements<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    element.children().filter_map(ElementRef::wrap)
}

/// Build the node for one `<DT>` item
///
/// The first direct `<A>` or `<H3>` child decides the kind. A link wins even
/// when the item also carries a nested list, which is then ignored.
fn parse_item(item: ElementRef) -> Option<Node> {
    let Some(title) =
        child_elements(item).find(|child| matches!(child.value().name(), "a" | "h3"))
    else {
        debug!("Skipping list item without a link or heading");
        return None;
    };

    let text: String = title.text().collect();
    let node = if title.value().name() == "a" {
        Node::Bookmark(Bookmark {
            title: text,
            url: title.value().attr("href").unwrap_or_default().to_string(),
            add_date: non_empty_attr(title, "add_date"),
            last_modified: non_empty_attr(title, "last_modified"),
            icon: non_empty_attr(title, "icon"),
        })
    } else {
        let children = child_elements(item)
            .find(|child| child.value().name() == "dl")
            .map(parse_list)
            .unwrap_or_default();
        Node::Folder(Folder {
            title: text,
            add_date: non_empty_attr(title, "add_date"),
            last_modified: non_empty_attr(title, "last_modified"),
            children,
        })
    };

    Some(node)
}

/// Attribute value, `None` when missing or empty. Names are matched
/// case-insensitively since the parser lower-cases them.
fn non_empty_attr(element: ElementRef, name: &str) -> Option<String> {
    element
        .value()
        .attr(name)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
