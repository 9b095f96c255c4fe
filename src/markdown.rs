//! Board Post Markdown
//!
//! Renders recruiting-board post bodies with pulldown-cmark, plus:
//! - Custom color syntax: %r%red%r%
//! - Raw HTML in posts is shown as text
//! - Links and images only with http(s) URLs

use pulldown_cmark::{html::push_html, CowStr, Event, LinkType, Options, Parser, Tag, TagEnd};

/// Color codes and their hex values
const COLORS: &[(&str, &str)] = &[
    ("r", "#e74c3c"), // red
    ("g", "#27ae60"), // green
    ("b", "#3498db"), // blue
    ("y", "#f1c40f"), // yellow
    ("o", "#e67e22"), // orange
    ("p", "#9b59b6"), // purple
];

/// Render a post body to HTML
pub fn render_post(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = transform_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

/// First line of a post as plain text, for list previews
pub fn preview(text: &str, max_chars: usize) -> String {
    let line = text
        .lines()
        .map(|l| l.trim_start_matches(['#', '>', '-', '*', ' ']).trim())
        .find(|l| !l.is_empty())
        .unwrap_or_default();
    if line.chars().count() > max_chars {
        let cut: String = line.chars().take(max_chars).collect();
        format!("{}…", cut)
    } else {
        line.to_string()
    }
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

fn is_safe_url(url: &str) -> bool {
    let lower = url.trim().to_lowercase();
    lower.starts_with("https://") || lower.starts_with("http://")
}

// State for the event transformer
enum State {
    Normal,
    /// Dropping everything up to the matching end tag
    Skipping { depth: usize },
}

fn transform_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut state = State::Normal;

    for event in parser {
        match state {
            State::Normal => match event {
                Event::Start(Tag::Image { dest_url, .. }) => {
                    if is_safe_url(&dest_url) {
                        let html = format!(
                            r#"<img src="{}" style="max-width: 100%; max-height: 400px; display: block;" />"#,
                            escape_html(&dest_url)
                        );
                        events.push(Event::Html(CowStr::from(html)));
                    }
                    // Alt text events are dropped either way
                    state = State::Skipping { depth: 0 };
                }
                Event::Start(Tag::Link { link_type, dest_url, title, id }) => {
                    if is_safe_url(&dest_url) || link_type == LinkType::Email {
                        events.push(Event::Start(Tag::Link { link_type, dest_url, title, id }));
                    } else {
                        // Keep the label, lose the link
                        events.push(Event::Start(Tag::Link {
                            link_type,
                            dest_url: CowStr::from("#"),
                            title,
                            id,
                        }));
                    }
                }
                Event::Html(raw) | Event::InlineHtml(raw) => {
                    events.push(Event::Text(raw));
                }
                Event::Text(text) => {
                    if contains_color_syntax(&text) {
                        events.extend(process_color_events(&text));
                    } else {
                        events.push(Event::Text(text));
                    }
                }
                other => events.push(other),
            },

            State::Skipping { ref mut depth } => match event {
                Event::Start(_) => *depth += 1,
                Event::End(TagEnd::Image) if *depth == 0 => state = State::Normal,
                Event::End(_) => *depth = depth.saturating_sub(1),
                _ => {}
            },
        }
    }

    events
}

fn contains_color_syntax(text: &str) -> bool {
    COLORS.iter().any(|(code, _)| text.contains(&format!("%{}%", code)))
}

/// Split text on %c%...%c% markers into colored spans
fn process_color_events(text: &str) -> Vec<Event<'static>> {
    let mut events = Vec::new();
    let mut remaining = text.to_string();

    while !remaining.is_empty() {
        let earliest = COLORS
            .iter()
            .filter_map(|(code, color)| {
                let pattern = format!("%{}%", code);
                remaining.find(&pattern).map(|pos| (pos, pattern, *color))
            })
            .min_by_key(|(pos, _, _)| *pos);

        let Some((pos, pattern, color)) = earliest else {
            events.push(Event::Text(CowStr::from(remaining)));
            break;
        };

        if pos > 0 {
            events.push(Event::Text(CowStr::from(remaining[..pos].to_string())));
        }
        remaining = remaining[pos + pattern.len()..].to_string();

        if let Some(end_pos) = remaining.find(&pattern) {
            events.push(Event::Html(CowStr::from(format!("<span style=\"color: {}\">", color))));
            if end_pos > 0 {
                events.push(Event::Text(CowStr::from(remaining[..end_pos].to_string())));
            }
            events.push(Event::Html(CowStr::from("</span>")));
            remaining = remaining[end_pos + pattern.len()..].to_string();
        } else {
            events.push(Event::Text(CowStr::from(pattern)));
        }
    }
    events
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_syntax() {
        let html = render_post("모집 %r%급구%r% 합니다");
        assert!(html.contains("<span style=\"color: #e74c3c\">급구</span>"));
    }

    #[test]
    fn test_unclosed_color_marker_is_literal() {
        let html = render_post("50%r% off");
        assert!(html.contains("%r%"));
        assert!(!html.contains("<span"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_post("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_javascript_links_are_neutralized() {
        let html = render_post("[click](javascript:alert(1))");
        assert!(!html.contains("javascript:"));
        assert!(html.contains("click"));
    }

    #[test]
    fn test_images_need_http_urls() {
        let html = render_post("![a](https://img.example/a.png) ![b](data:image/png;base64,xx)");
        assert!(html.contains("https://img.example/a.png"));
        assert!(!html.contains("data:image"));
    }

    #[test]
    fn test_preview_skips_heading_marks_and_truncates() {
        assert_eq!(preview("\n## 카멘 하드 구해요\n본문", 40), "카멘 하드 구해요");
        assert_eq!(preview("가나다라마", 3), "가나다…");
        assert_eq!(preview("", 3), "");
    }
}
