use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

/// Renders markdown text as HTML.
#[component]
pub fn Markdown(content: String) -> Element {
    let rendered = use_memo(use_reactive!(|content| to_html(&content)));

    rsx!(div {
        class: "markdown",
        dangerous_inner_html: "{rendered}"
    })
}

fn to_html(source: &str) -> String {
    let parser = Parser::new_ext(source, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH);
    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests markdown conversion of emphasis and lists.
    ///
    /// Expected: Ok with the matching HTML tags
    #[test]
    fn renders_basic_markdown() {
        let html = to_html("**bold**\n\n- one\n- two");

        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<li>one</li>"));
    }
}
