//! HTML fragments handed to Leaflet for pins, popups and the direction arrow.
//!
//! Leaflet takes icon and popup content as raw HTML, so every user-entered
//! string goes through [`escape_html`] before it is interpolated.

#[cfg(test)]
#[path = "map_markup_test.rs"]
mod map_markup_test;

use std::fmt::Write as _;

use spots::record::{Direction, LocationRecord};

/// Lucide "camera" glyph used for pins.
pub const CAMERA_SVG: &str = concat!(
    r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" "#,
    r#"stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
    r#"<path d="M14.5 4h-5L7 7H4a2 2 0 0 0-2 2v9a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V9a2 2 0 0 0-2-2h-3l-2.5-3z"/>"#,
    r#"<circle cx="12" cy="13" r="3"/></svg>"#
);

/// Escape text for use inside HTML element content or a quoted attribute.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Pin icon body; the selected pin gets a modifier class.
#[must_use]
pub fn pin_icon_html(selected: bool) -> String {
    let modifier = if selected { " spot-pin--selected" } else { "" };
    format!(r#"<div class="spot-pin{modifier}">{CAMERA_SVG}</div>"#)
}

/// Arrow rotated to `direction`, used in the entry form preview.
#[must_use]
pub fn direction_arrow_html(direction: Direction) -> String {
    format!(
        r#"<div class="direction-marker" style="transform: rotate({}deg)"><div class="direction-marker__arrow"></div></div>"#,
        direction.degrees()
    )
}

/// Popup body for a pin: photo, title, description, heading and tags.
#[must_use]
pub fn popup_body_html(record: &LocationRecord) -> String {
    let mut html = String::new();
    if let Some(photo) = record.photo() {
        let _ = write!(
            html,
            r#"<img class="spot-popup__photo" src="{}" alt="{}"/>"#,
            escape_html(photo.src()),
            escape_html(record.title())
        );
    }
    let _ = write!(
        html,
        r#"<h3 class="spot-popup__title">{}</h3><p class="spot-popup__description">{}</p><div class="spot-popup__direction">{}</div>"#,
        escape_html(record.title()),
        escape_html(record.description()),
        escape_html(&record.direction().to_string())
    );
    if !record.tags().is_empty() {
        html.push_str(r#"<div class="spot-popup__tags">"#);
        for tag in record.tags() {
            let _ = write!(html, r#"<span class="tag-chip tag-chip--small">{}</span>"#, escape_html(tag));
        }
        html.push_str("</div>");
    }
    html
}
