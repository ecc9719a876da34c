use super::*;

#[test]
fn render_markdown_produces_paragraphs() {
    let html = render_markdown("A hackathon.\n\nBring a laptop.");
    assert!(html.contains("<p>A hackathon.</p>"));
    assert!(html.contains("<p>Bring a laptop.</p>"));
}

#[test]
fn render_markdown_supports_headings_and_lists() {
    let html = render_markdown("# Rules\n\n- one\n- two");
    assert!(html.contains("<h1>Rules</h1>"));
    assert!(html.contains("<li>one</li>"));
}

#[test]
fn render_markdown_escapes_raw_text() {
    let html = render_markdown("use `Vec<u8>` buffers");
    assert!(html.contains("<code>Vec&lt;u8&gt;</code>"));
}
