const GENERATION_TEMPLATE: &str = include_str!("../../prompts/generation.txt");

const TITLE_PLACEHOLDER: &str = "{doc_title}";
const CONSIDERATION_PLACEHOLDER: &str = "{doc_consideration}";

/// Build the user prompt asking for the topics of one document.
///
/// Placeholders are filled in a single pass, so braces inside the title or
/// considerant are copied verbatim.
pub fn build_topic_prompt(title: &str, considerant: &str) -> String {
    render(
        GENERATION_TEMPLATE,
        &[(TITLE_PLACEHOLDER, title), (CONSIDERATION_PLACEHOLDER, considerant)],
    )
}

fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    'scan: while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        rest = &rest[open..];

        for (placeholder, value) in values {
            if let Some(tail) = rest.strip_prefix(placeholder) {
                out.push_str(value);
                rest = tail;
                continue 'scan;
            }
        }

        out.push('{');
        rest = &rest[1..];
    }

    out.push_str(rest);
    out
}
