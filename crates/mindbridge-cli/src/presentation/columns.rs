use mindbridge_engine::VisibilityEntry;

pub fn render(entries: &[VisibilityEntry]) -> String {
    if entries.is_empty() {
        return "No named columns.\n".to_string();
    }

    let mut out = String::new();
    for entry in entries {
        let mark = if entry.omit { " " } else { "x" };
        out.push_str(&format!("[{}] {}\n", mark, entry.name));
    }

    let hidden = entries.iter().filter(|entry| entry.omit).count();
    out.push_str(&format!(
        "\n{} shown, {} hidden\n",
        entries.len() - hidden,
        hidden
    ));
    out
}
