use graft_core::{AttrSet, GraftError, GraftResult, Insertion, PagePatch, Placement};
use graft_dom::Page;

use crate::style::style_element;

/// Apply an accumulated patch to the serialized page. Insertions splice
/// first; attribute stamps run afterwards because they rewrite the anchor's
/// opening tag, which insertions still need to locate verbatim.
pub fn apply_patch(page: &Page, patch: &PagePatch) -> GraftResult<String> {
    let mut html = page.document_html();
    for insertion in &patch.insertions {
        html = splice_insertion(&html, insertion)?;
    }
    for attr_set in &patch.attr_sets {
        html = stamp_attr(&html, attr_set)?;
    }
    if !patch.style_rules.is_empty() {
        html = install_style(&html, &style_element(&patch.style_rules));
    }
    Ok(html)
}

fn splice_insertion(html: &str, insertion: &Insertion) -> GraftResult<String> {
    let pos = html.find(&insertion.anchor).ok_or_else(|| {
        GraftError::Render(format!(
            "insertion anchor vanished from page: {}",
            preview(&insertion.anchor)
        ))
    })?;
    let at = match insertion.placement {
        Placement::BeforeBegin => pos,
        Placement::AfterEnd => pos + insertion.anchor.len(),
    };
    let mut result = String::with_capacity(html.len() + insertion.markup.len());
    result.push_str(&html[..at]);
    result.push_str(&insertion.markup);
    result.push_str(&html[at..]);
    Ok(result)
}

fn stamp_attr(html: &str, attr_set: &AttrSet) -> GraftResult<String> {
    let pos = html.find(&attr_set.anchor).ok_or_else(|| {
        GraftError::Render(format!(
            "attribute anchor vanished from page: {}",
            preview(&attr_set.anchor)
        ))
    })?;
    let open_end = html[pos..]
        .find('>')
        .map(|offset| pos + offset)
        .ok_or_else(|| GraftError::Render("anchor has no opening tag end".to_string()))?;

    let stamp = format!(" {}=\"{}\"", attr_set.name, attr_set.value);
    let mut result = String::with_capacity(html.len() + stamp.len());
    result.push_str(&html[..open_end]);
    result.push_str(&stamp);
    result.push_str(&html[open_end..]);
    Ok(result)
}

/// Install the stylesheet as a single unit: before `</head>` when the page
/// has one, before `</body>` otherwise, appended as a last resort.
fn install_style(html: &str, style: &str) -> String {
    let pos = html.find("</head>").or_else(|| html.find("</body>"));
    match pos {
        Some(pos) => {
            let mut result = String::with_capacity(html.len() + style.len());
            result.push_str(&html[..pos]);
            result.push_str(style);
            result.push_str(&html[pos..]);
            result
        }
        None => format!("{}{}", html, style),
    }
}

fn preview(s: &str) -> String {
    s.chars().take(60).collect()
}
