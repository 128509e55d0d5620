//! Native Element Interfaces
//!
//! Tag name to DOM interface classification for the reference tree. This is
//! what [`prototype_of`](crate::DocumentTree::prototype_of) reports, and what
//! extension validation compares against the unknown fallback.

/// Interface prototype reported for a native element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementInterface {
    /// A recognized HTML element interface, e.g. `HTMLButtonElement`
    Html(&'static str),
    /// Fallback for tag names with no dedicated interface
    Unknown,
}

/// Classify a tag name. The lookup is over the lowercase form.
pub fn interface_for_tag(tag_name: &str) -> ElementInterface {
    use ElementInterface::{Html, Unknown};

    match tag_name.to_lowercase().as_str() {
        "a" => Html("HTMLAnchorElement"),
        "area" => Html("HTMLAreaElement"),
        "audio" => Html("HTMLAudioElement"),
        "base" => Html("HTMLBaseElement"),
        "blockquote" | "q" => Html("HTMLQuoteElement"),
        "body" => Html("HTMLBodyElement"),
        "br" => Html("HTMLBRElement"),
        "button" => Html("HTMLButtonElement"),
        "canvas" => Html("HTMLCanvasElement"),
        "caption" => Html("HTMLTableCaptionElement"),
        "col" | "colgroup" => Html("HTMLTableColElement"),
        "data" => Html("HTMLDataElement"),
        "datalist" => Html("HTMLDataListElement"),
        "details" => Html("HTMLDetailsElement"),
        "dialog" => Html("HTMLDialogElement"),
        "div" => Html("HTMLDivElement"),
        "dl" => Html("HTMLDListElement"),
        "embed" => Html("HTMLEmbedElement"),
        "fieldset" => Html("HTMLFieldSetElement"),
        "form" => Html("HTMLFormElement"),
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => Html("HTMLHeadingElement"),
        "head" => Html("HTMLHeadElement"),
        "hr" => Html("HTMLHRElement"),
        "html" => Html("HTMLHtmlElement"),
        "iframe" => Html("HTMLIFrameElement"),
        "img" => Html("HTMLImageElement"),
        "input" => Html("HTMLInputElement"),
        "label" => Html("HTMLLabelElement"),
        "legend" => Html("HTMLLegendElement"),
        "li" => Html("HTMLLIElement"),
        "link" => Html("HTMLLinkElement"),
        "map" => Html("HTMLMapElement"),
        "menu" => Html("HTMLMenuElement"),
        "meta" => Html("HTMLMetaElement"),
        "meter" => Html("HTMLMeterElement"),
        "object" => Html("HTMLObjectElement"),
        "ol" => Html("HTMLOListElement"),
        "optgroup" => Html("HTMLOptGroupElement"),
        "option" => Html("HTMLOptionElement"),
        "output" => Html("HTMLOutputElement"),
        "p" => Html("HTMLParagraphElement"),
        "picture" => Html("HTMLPictureElement"),
        "pre" => Html("HTMLPreElement"),
        "progress" => Html("HTMLProgressElement"),
        "script" => Html("HTMLScriptElement"),
        "select" => Html("HTMLSelectElement"),
        "slot" => Html("HTMLSlotElement"),
        "source" => Html("HTMLSourceElement"),
        "span" => Html("HTMLSpanElement"),
        "style" => Html("HTMLStyleElement"),
        "table" => Html("HTMLTableElement"),
        "tbody" | "thead" | "tfoot" => Html("HTMLTableSectionElement"),
        "td" | "th" => Html("HTMLTableCellElement"),
        "template" => Html("HTMLTemplateElement"),
        "textarea" => Html("HTMLTextAreaElement"),
        "time" => Html("HTMLTimeElement"),
        "title" => Html("HTMLTitleElement"),
        "tr" => Html("HTMLTableRowElement"),
        "track" => Html("HTMLTrackElement"),
        "ul" => Html("HTMLUListElement"),
        "video" => Html("HTMLVideoElement"),
        // Elements without a dedicated interface
        "abbr" | "address" | "article" | "aside" | "b" | "bdi" | "bdo" | "cite" | "code"
        | "dd" | "dfn" | "dt" | "em" | "figcaption" | "figure" | "footer" | "header"
        | "hgroup" | "i" | "kbd" | "main" | "mark" | "nav" | "noscript" | "rp" | "rt"
        | "ruby" | "s" | "samp" | "section" | "small" | "strong" | "sub" | "summary"
        | "sup" | "u" | "var" | "wbr" => Html("HTMLElement"),
        _ => Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_interfaces() {
        assert_eq!(interface_for_tag("button"), ElementInterface::Html("HTMLButtonElement"));
        assert_eq!(interface_for_tag("INPUT"), ElementInterface::Html("HTMLInputElement"));
        assert_eq!(interface_for_tag("section"), ElementInterface::Html("HTMLElement"));
    }

    #[test]
    fn test_unknown_interfaces() {
        assert_eq!(interface_for_tag("blink"), ElementInterface::Unknown);
        assert_eq!(interface_for_tag("frobnicator"), ElementInterface::Unknown);
    }
}
