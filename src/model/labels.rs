use std::collections::BTreeMap;

pub type LabelName = String;

pub type LabelValue = String;

pub type Labels = BTreeMap<LabelName, LabelValue>;

/// Escapes a label value the way the text exposition format expects it.
pub fn escape_label_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            c => escaped.push(c),
        }
    }
    escaped
}
