//! Small HTML helpers shared by the sections.

use kostyarok_commerce::catalog::full_stars;

pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Icon placeholder resolved by the client-side icon set.
pub(crate) fn icon(name: &str) -> String {
    format!(r#"<i class="icon" data-icon="{}"></i>"#, html_escape(name))
}

/// Five-star rating row with the numeric rating after it.
pub(crate) fn render_stars(rating: f64) -> String {
    let filled = full_stars(rating);
    let stars: String = (0..5)
        .map(|i| {
            let class = if i < filled { "star filled" } else { "star" };
            format!(r#"<span class="{class}">★</span>"#)
        })
        .collect();

    format!(r#"<div class="stars" aria-label="{rating}">{stars}<span class="rating">{rating}</span></div>"#)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_stars() {
        let html = render_stars(4.8);
        assert_eq!(html.matches("star filled").count(), 4);
        assert_eq!(html.matches(r#"class="star""#).count(), 1);
        assert!(html.contains(">4.8<"));
    }
}
