//! Line-oriented renderer for semi-structured brief text.
//!
//! Model responses arrive as loose markup: `#`-style headings, `*`/`-`
//! bullets, and plain paragraphs separated by blank lines. This module
//! classifies each line once, in order, and folds the result into typed
//! blocks ready for a display surface. Rendering is a pure function: it
//! never fails and unrecognized content degrades to paragraph text.

/// Display weight of a heading.
///
/// Marker depth maps *inversely* to display size: `#` is the section title
/// (largest), `###` the finest subdivision (smallest). This mirrors the
/// visual hierarchy the brief persona is prompted to produce and is
/// intentional, not a mix-up of the marker count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    /// `#` — largest display weight.
    Title,
    /// `##` — medium display weight.
    Section,
    /// `###` — smallest display weight.
    Detail,
}

impl HeadingLevel {
    /// Number of marker characters that produce this level.
    pub fn marker_depth(self) -> usize {
        match self {
            HeadingLevel::Title => 1,
            HeadingLevel::Section => 2,
            HeadingLevel::Detail => 3,
        }
    }
}

/// One classified, display-ready unit of content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: HeadingLevel, text: String },
    /// Consecutive bullet lines, merged in source order.
    List { items: Vec<String> },
    Paragraph { text: String },
    /// Markup-like line passed through unchanged.
    Raw { text: String },
}

/// Classification of a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LineKind<'a> {
    Blank,
    Heading { level: HeadingLevel, text: &'a str },
    Bullet { item: &'a str },
    Raw { text: &'a str },
    Text { text: &'a str },
}

/// Classifies one line. Heading prefixes are checked longest-first so that
/// `###` is never read as `#`; bullets require whitespace after the marker,
/// so `-# Title` falls through to plain text.
fn classify(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    for level in [
        HeadingLevel::Detail,
        HeadingLevel::Section,
        HeadingLevel::Title,
    ] {
        let marker = &"###"[..level.marker_depth()];
        if let Some(rest) = trimmed.strip_prefix(marker) {
            return LineKind::Heading {
                level,
                text: rest.trim(),
            };
        }
    }
    if let Some(rest) = trimmed
        .strip_prefix('*')
        .or_else(|| trimmed.strip_prefix('-'))
        && let Some(item) = rest.strip_prefix(|c: char| c.is_whitespace())
    {
        return LineKind::Bullet { item: item.trim() };
    }
    if trimmed.starts_with('<') {
        return LineKind::Raw { text: trimmed };
    }
    LineKind::Text { text: trimmed }
}

/// Renders raw text into an ordered sequence of blocks.
///
/// Single pass, order-preserving. Blank lines are segment boundaries:
/// they close the open paragraph or list. Consecutive bullets merge into
/// one `List`; consecutive plain lines within a segment join into one
/// `Paragraph`. Empty and whitespace-only input yields an empty sequence.
pub fn render(raw: &str) -> Vec<Block> {
    let mut builder = BlockBuilder::default();
    for line in raw.lines() {
        builder.push_line(line);
    }
    builder.finish()
}

/// Finite-state accumulator for block assembly.
///
/// At most one of `list_items` / `paragraph_lines` is non-empty at a time;
/// a line of any other kind flushes the open buffer before being emitted.
#[derive(Debug, Default)]
struct BlockBuilder {
    blocks: Vec<Block>,
    list_items: Vec<String>,
    paragraph_lines: Vec<String>,
}

impl BlockBuilder {
    fn push_line(&mut self, line: &str) {
        match classify(line) {
            LineKind::Blank => {
                self.flush_list();
                self.flush_paragraph();
            }
            LineKind::Heading { level, text } => {
                self.flush_list();
                self.flush_paragraph();
                self.blocks.push(Block::Heading {
                    level,
                    text: text.to_string(),
                });
            }
            LineKind::Bullet { item } => {
                self.flush_paragraph();
                self.list_items.push(item.to_string());
            }
            LineKind::Raw { text } => {
                self.flush_list();
                self.flush_paragraph();
                self.blocks.push(Block::Raw {
                    text: text.to_string(),
                });
            }
            LineKind::Text { text } => {
                self.flush_list();
                self.paragraph_lines.push(text.to_string());
            }
        }
    }

    fn flush_list(&mut self) {
        if self.list_items.is_empty() {
            return;
        }
        let items = std::mem::take(&mut self.list_items);
        self.blocks.push(Block::List { items });
    }

    fn flush_paragraph(&mut self) {
        if self.paragraph_lines.is_empty() {
            return;
        }
        let lines = std::mem::take(&mut self.paragraph_lines);
        self.blocks.push(Block::Paragraph {
            text: lines.join(" "),
        });
    }

    fn finish(mut self) -> Vec<Block> {
        self.flush_list();
        self.flush_paragraph();
        self.blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(level: HeadingLevel, text: &str) -> Block {
        Block::Heading {
            level,
            text: text.to_string(),
        }
    }

    fn list(items: &[&str]) -> Block {
        Block::List {
            items: items.iter().map(ToString::to_string).collect(),
        }
    }

    fn paragraph(text: &str) -> Block {
        Block::Paragraph {
            text: text.to_string(),
        }
    }

    #[test]
    fn empty_input_yields_no_blocks() {
        assert_eq!(render(""), vec![]);
    }

    #[test]
    fn whitespace_only_input_yields_no_blocks() {
        assert_eq!(render("   \n\t\n  \n"), vec![]);
    }

    #[test]
    fn consecutive_bullets_collapse_into_one_list() {
        let blocks = render("- one\n- two\n* three\n");
        assert_eq!(blocks, vec![list(&["one", "two", "three"])]);
    }

    #[test]
    fn non_bullet_line_closes_the_list() {
        let blocks = render("- one\nplain\n- two\n");
        assert_eq!(
            blocks,
            vec![list(&["one"]), paragraph("plain"), list(&["two"])]
        );
    }

    #[test]
    fn heading_then_bullets_then_paragraph() {
        let blocks = render("## Plan\n- a\n- b\n\nClosing thoughts.\n");
        assert_eq!(
            blocks,
            vec![
                heading(HeadingLevel::Section, "Plan"),
                list(&["a", "b"]),
                paragraph("Closing thoughts."),
            ]
        );
    }

    #[test]
    fn marker_precedence_checks_longest_prefix_first() {
        let blocks = render("### Sub");
        assert_eq!(blocks, vec![heading(HeadingLevel::Detail, "Sub")]);
    }

    #[test]
    fn heading_levels_map_inversely_to_marker_depth() {
        let blocks = render("# Big\n## Mid\n### Small\n");
        assert_eq!(
            blocks,
            vec![
                heading(HeadingLevel::Title, "Big"),
                heading(HeadingLevel::Section, "Mid"),
                heading(HeadingLevel::Detail, "Small"),
            ]
        );
    }

    #[test]
    fn bullet_without_trailing_whitespace_is_plain_text() {
        // `-# Title` matches no heading prefix and the bullet marker is not
        // followed by whitespace, so the whole line degrades to a paragraph.
        let blocks = render("-# Title");
        assert_eq!(blocks, vec![paragraph("-# Title")]);
    }

    #[test]
    fn paragraph_lines_join_within_a_segment() {
        let blocks = render("first line\nsecond line\n\nnext segment\n");
        assert_eq!(
            blocks,
            vec![
                paragraph("first line second line"),
                paragraph("next segment"),
            ]
        );
    }

    #[test]
    fn classified_text_is_edge_trimmed_only() {
        let blocks = render("  #   Spaced   Title  \n-  keep  inner   gaps  \n");
        assert_eq!(
            blocks,
            vec![
                heading(HeadingLevel::Title, "Spaced   Title"),
                list(&["keep  inner   gaps"]),
            ]
        );
    }

    #[test]
    fn markup_like_line_passes_through_as_raw() {
        let blocks = render("<hr/>\ntext\n");
        assert_eq!(
            blocks,
            vec![
                Block::Raw {
                    text: "<hr/>".to_string()
                },
                paragraph("text"),
            ]
        );
    }

    #[test]
    fn list_flatten_and_rerender_is_idempotent() {
        let original = render("- Discovery\n- Build\n- Launch\n");
        let Block::List { items } = &original[0] else {
            panic!("expected a list, got {original:?}");
        };
        let flattened: String = items
            .iter()
            .map(|item| format!("- {item}\n"))
            .collect();
        assert_eq!(render(&flattened), original);
    }

    #[test]
    fn full_brief_scenario() {
        let raw = "# Overview\n\nWe propose a phased rollout.\n\n## Milestones\n- Discovery\n- Build\n- Launch\n";
        assert_eq!(
            render(raw),
            vec![
                heading(HeadingLevel::Title, "Overview"),
                paragraph("We propose a phased rollout."),
                heading(HeadingLevel::Section, "Milestones"),
                list(&["Discovery", "Build", "Launch"]),
            ]
        );
    }

    #[test]
    fn rendering_is_deterministic() {
        let raw = "# A\n- x\ntext\n";
        assert_eq!(render(raw), render(raw));
    }
}
