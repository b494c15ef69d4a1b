//! C# attribute lists (`[Serializable]`).

use csgen_codegen::CodeFragment;

/// Trim attribute names and drop blank ones.
pub(crate) fn clean_attributes<I, S>(attributes: I) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    attributes.into_iter().filter_map(|a| {
        let trimmed = a.as_ref().trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}

/// Render attributes inline, ready to prefix a declaration: `[A, B] `.
pub(crate) fn compact_attributes(attributes: &[String]) -> String {
    if attributes.is_empty() {
        String::new()
    } else {
        format!("[{}] ", attributes.join(", "))
    }
}

/// Render attributes one per line: `[A]`, `[B]`.
pub(crate) fn attribute_lines(attributes: &[String]) -> impl Iterator<Item = CodeFragment> + '_ {
    attributes
        .iter()
        .map(|a| CodeFragment::line(format!("[{}]", a)))
}
