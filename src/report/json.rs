use crate::view::View;

pub fn render_view_json(view: &View) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(view)?;
    out.push('\n');
    Ok(out)
}
