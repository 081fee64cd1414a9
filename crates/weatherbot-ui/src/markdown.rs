//! Markdown rendering for chat bubbles.
//!
//! Parsing (pulldown-cmark) is kept separate from drawing so the block
//! structure can be unit-tested on native targets. The renderer covers what
//! the weather backend actually emits: paragraphs, headings, bold/italic,
//! inline code, fenced code blocks, bullet lists, links, and rules.

use egui::{Color32, FontId, RichText};
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use crate::theme;

/// A styled run of inline text
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    Text(String),
    Strong(String),
    Emphasis(String),
    Code(String),
    Link { text: String, url: String },
}

/// One block-level element of a rendered message
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(Vec<Fragment>),
    Heading { level: u8, fragments: Vec<Fragment> },
    CodeBlock(String),
    Bullet { depth: usize, fragments: Vec<Fragment> },
    Rule,
}

/// Parse markdown source into renderable blocks.
pub fn parse(source: &str) -> Vec<Block> {
    let mut out = Collector::default();

    for event in Parser::new_ext(source, Options::empty()) {
        match event {
            Event::Start(tag) => match tag {
                Tag::Heading { level, .. } => out.heading = Some(heading_level(level)),
                Tag::CodeBlock(_) => out.code_block = Some(String::new()),
                Tag::List(_) => {
                    // A nested list starts before its parent item ends;
                    // close the parent's inline run first.
                    out.flush_text_block();
                    out.list_depth += 1;
                }
                Tag::Item => out.flush_text_block(),
                Tag::Emphasis => out.emphasis += 1,
                Tag::Strong => out.strong += 1,
                Tag::Link { dest_url, .. } => {
                    out.link = Some((dest_url.to_string(), String::new()));
                }
                _ => {}
            },
            Event::End(tag) => match tag {
                TagEnd::Paragraph => out.flush_text_block(),
                TagEnd::Heading(_) => {
                    let level = out.heading.take().unwrap_or(1);
                    let fragments = std::mem::take(&mut out.fragments);
                    if !fragments.is_empty() {
                        out.blocks.push(Block::Heading { level, fragments });
                    }
                }
                TagEnd::CodeBlock => {
                    if let Some(text) = out.code_block.take() {
                        out.blocks.push(Block::CodeBlock(text.trim_end().to_string()));
                    }
                }
                TagEnd::List(_) => out.list_depth = out.list_depth.saturating_sub(1),
                TagEnd::Item => out.flush_text_block(),
                TagEnd::Emphasis => out.emphasis = out.emphasis.saturating_sub(1),
                TagEnd::Strong => out.strong = out.strong.saturating_sub(1),
                TagEnd::Link => {
                    if let Some((url, text)) = out.link.take() {
                        out.fragments.push(Fragment::Link { text, url });
                    }
                }
                _ => {}
            },
            Event::Text(text) => out.push_text(&text),
            Event::Code(text) => {
                if let Some((_, link_text)) = out.link.as_mut() {
                    link_text.push_str(&text);
                } else {
                    out.fragments.push(Fragment::Code(text.to_string()));
                }
            }
            Event::SoftBreak => out.push_text(" "),
            Event::HardBreak => out.flush_text_block(),
            Event::Rule => {
                out.flush_text_block();
                out.blocks.push(Block::Rule);
            }
            _ => {}
        }
    }

    out.flush_text_block();
    out.blocks
}

#[derive(Default)]
struct Collector {
    blocks: Vec<Block>,
    fragments: Vec<Fragment>,
    strong: u32,
    emphasis: u32,
    heading: Option<u8>,
    list_depth: usize,
    code_block: Option<String>,
    link: Option<(String, String)>,
}

impl Collector {
    fn push_text(&mut self, text: &str) {
        if let Some(code) = self.code_block.as_mut() {
            code.push_str(text);
        } else if let Some((_, link_text)) = self.link.as_mut() {
            link_text.push_str(text);
        } else if self.strong > 0 {
            self.fragments.push(Fragment::Strong(text.to_string()));
        } else if self.emphasis > 0 {
            self.fragments.push(Fragment::Emphasis(text.to_string()));
        } else {
            self.fragments.push(Fragment::Text(text.to_string()));
        }
    }

    /// Close the pending inline run as a bullet inside a list, otherwise
    /// as a plain paragraph.
    fn flush_text_block(&mut self) {
        if self.fragments.is_empty() {
            return;
        }
        let fragments = std::mem::take(&mut self.fragments);
        if self.list_depth > 0 {
            self.blocks.push(Block::Bullet {
                depth: self.list_depth - 1,
                fragments,
            });
        } else {
            self.blocks.push(Block::Paragraph(fragments));
        }
    }
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

// ─── Drawing ─────────────────────────────────────────────────

const BODY_SIZE: f32 = 14.0;

/// Render a markdown message body into the current ui with the given
/// base text color (bubbles on the accent background pass white).
pub fn render(ui: &mut egui::Ui, source: &str, text_color: Color32) {
    for block in parse(source) {
        render_block(ui, &block, text_color);
    }
}

fn render_block(ui: &mut egui::Ui, block: &Block, text_color: Color32) {
    match block {
        Block::Paragraph(fragments) => {
            render_fragments(ui, fragments, text_color, BODY_SIZE);
        }
        Block::Heading { level, fragments } => {
            let size = match level {
                1 => 20.0,
                2 => 17.0,
                _ => 15.0,
            };
            render_fragments(ui, fragments, text_color, size);
        }
        Block::CodeBlock(text) => {
            egui::Frame::default()
                .fill(theme::CODE_BG)
                .corner_radius(theme::CARD_ROUNDING)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.label(
                        RichText::new(text)
                            .monospace()
                            .color(theme::TEXT_PRIMARY),
                    );
                });
        }
        Block::Bullet { depth, fragments } => {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                ui.add_space(12.0 * (*depth as f32 + 1.0));
                ui.label(RichText::new("•  ").color(text_color).size(BODY_SIZE));
                for fragment in fragments {
                    render_fragment(ui, fragment, text_color, BODY_SIZE);
                }
            });
        }
        Block::Rule => {
            ui.separator();
        }
    }
}

fn render_fragments(ui: &mut egui::Ui, fragments: &[Fragment], text_color: Color32, size: f32) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        for fragment in fragments {
            render_fragment(ui, fragment, text_color, size);
        }
    });
}

fn render_fragment(ui: &mut egui::Ui, fragment: &Fragment, text_color: Color32, size: f32) {
    match fragment {
        Fragment::Text(text) => {
            ui.label(RichText::new(text).color(text_color).size(size));
        }
        Fragment::Strong(text) => {
            ui.label(RichText::new(text).color(text_color).size(size).strong());
        }
        Fragment::Emphasis(text) => {
            ui.label(RichText::new(text).color(text_color).size(size).italics());
        }
        Fragment::Code(text) => {
            ui.label(
                RichText::new(text)
                    .font(FontId::monospace(size - 1.0))
                    .color(theme::TEXT_PRIMARY)
                    .background_color(theme::CODE_BG),
            );
        }
        Fragment::Link { text, url } => {
            ui.hyperlink_to(RichText::new(text).size(size), url);
        }
    }
}
