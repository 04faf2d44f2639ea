//! Presentation helpers: HTML escaping, the widget's markdown-lite
//! substitutions, and the message bubble templates the page appends to the
//! chat body.

/// Entity-escapes text so user- and model-supplied content can never inject
/// markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Formats model output: escape first, then `**bold**`, `*italic*`,
/// line-leading `1.`-style items to bullets, and newlines to `<br>`.
/// Applied to model output only; user text is escaped verbatim.
pub fn format_model_output(text: &str) -> String {
    let formatted = escape_html(text);
    let formatted = replace_delimited(&formatted, "**", "<strong>", "</strong>");
    let formatted = replace_delimited(&formatted, "*", "<em>", "</em>");
    let formatted = bullet_numbered_lines(&formatted);
    formatted.replace('\n', "<br>")
}

/// Wraps each `{delim}...{delim}` span in `open`/`close`. A delimiter with no
/// closing partner on the same line stays literal.
fn replace_delimited(input: &str, delim: &str, open: &str, close: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find(delim) {
        let after = &rest[start + delim.len()..];
        match after.find(delim) {
            Some(end) if end > 0 && !after[..end].contains('\n') => {
                out.push_str(&rest[..start]);
                out.push_str(open);
                out.push_str(&after[..end]);
                out.push_str(close);
                rest = &after[end + delim.len()..];
            }
            _ => {
                out.push_str(&rest[..start + delim.len()]);
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

fn bullet_numbered_lines(input: &str) -> String {
    input
        .split('\n')
        .map(|line| match numbered_item(line) {
            Some(item) => format!("• {item}"),
            None => line.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `"12. buy milk"` -> `Some("buy milk")`; anything else -> `None`.
fn numbered_item(line: &str) -> Option<&str> {
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let rest = line[digits..].strip_prefix('.')?;
    let item = rest.trim_start();
    if item.is_empty() || item.len() == rest.len() {
        return None;
    }
    Some(item)
}

pub fn user_bubble(message: &str) -> String {
    format!(
        "<div class=\"message user-message\"><div class=\"message-content\">\
         <div class=\"avatar user-avatar\">You</div>\
         <div class=\"bubble user-bubble\"><p>{}</p></div></div></div>",
        escape_html(message)
    )
}

pub fn bot_bubble(message: &str) -> String {
    format!(
        "<div class=\"message bot-message\"><div class=\"message-content\">\
         <div class=\"avatar bot-avatar\">AI</div>\
         <div class=\"bubble bot-bubble\"><p>{}</p></div></div></div>",
        format_model_output(message)
    )
}

pub fn error_bubble(notice: &str) -> String {
    format!(
        "<div class=\"message bot-message error-message\"><div class=\"message-content\">\
         <div class=\"avatar bot-avatar\">!</div>\
         <div class=\"bubble\"><p>{}</p></div></div></div>",
        escape_html(notice)
    )
}
