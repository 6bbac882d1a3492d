use maud::{html, Markup, Render};

use crate::content::{markup, Block, Span};

const BULLET: &str = "•";

/// Renders a text field in the markup subset.
pub fn render_content(text: &str) -> Markup {
    html! { (Blocks(&markup::parse(text))) }
}

pub struct Blocks<'a>(pub &'a [Block]);

impl<'a> Render for Blocks<'a> {
    fn render(&self) -> Markup {
        html! {
            c-content-blocks {
                @for block in self.0 {
                    @match block {
                        Block::Paragraph(lines) => {
                            p {
                                @for (i, line) in lines.iter().enumerate() {
                                    @if i > 0 { br; }
                                    (line)
                                }
                            }
                        }
                        Block::List(items) => {
                            ul {
                                @for item in items {
                                    li {
                                        // Decoration only, never part of the item text
                                        span.bullet aria-hidden="true" { (BULLET) }
                                        span {
                                            @for piece in item {
                                                @match piece {
                                                    Span::Plain(text) => { (text) }
                                                    Span::Bold(text) => { strong { (text) } }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
