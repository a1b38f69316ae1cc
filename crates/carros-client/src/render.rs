//! Renderer
//!
//! Converts records into card trees. All record text goes through
//! [`Node`](crate::markup::Node), so it is escaped on serialization.

use crate::markup::{Element, Node};
use crate::model::Carro;

/// Shown where a value is missing.
pub const PLACEHOLDER: &str = "—";

pub const EMPTY_MESSAGE: &str = "Nenhum carro encontrado.";
pub const LOAD_ERROR_MESSAGE: &str = "Erro ao carregar a lista de carros.";
pub const INTRO_MESSAGE: &str = "Clique em \"Listar Carros\" para carregar a lista.";

/// At most two initials, one per whitespace-separated token starting with a letter.
pub fn initials(modelo: &str) -> String {
    let letters: String = modelo
        .split_whitespace()
        .filter_map(|token| token.chars().next())
        .filter(|c| c.is_alphabetic())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        letters
    }
}

/// Brazilian real: `R$ 95.000,00`. Non-finite values print as zero.
pub fn format_brl(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let cents = (value.abs() * 100.0).round() as u64;
    let digits = (cents / 100).to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}R$ {},{:02}", sign, grouped, cents % 100)
}

/// Cards for `records`, or a single "no records" placeholder.
pub fn render_cards(records: &[Carro], uploads_base: &str) -> Node {
    if records.is_empty() {
        return empty_placeholder();
    }
    Node::Fragment(records.iter().map(|c| render_card(c, uploads_base)).collect())
}

fn render_card(carro: &Carro, uploads_base: &str) -> Node {
    let title = if carro.modelo.trim().is_empty() { PLACEHOLDER } else { carro.modelo.as_str() };
    let id = carro
        .id
        .as_ref()
        .map(|id| id.to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string());

    let mut thumb = Element::new("div")
        .class("carro-thumb")
        .attr("aria-hidden", "true")
        .child(Element::new("span").class("carro-initials").text(initials(&carro.modelo)));
    if let Some(image) = carro.image.as_deref().filter(|i| !i.is_empty()) {
        thumb = thumb.child(
            Element::new("img")
                .class("carro-image")
                .attr("src", image_url(uploads_base, image))
                .attr("alt", title),
        );
    }

    Element::new("div")
        .class("carro-item")
        .child(thumb)
        .child(
            Element::new("div")
                .class("carro-details")
                .child(
                    Element::new("div")
                        .class("carro-title")
                        .child(Element::new("strong").text(title)),
                )
                .child(Element::new("div").class("carro-meta").text(format!("ID: {}", id)))
                .child(Element::new("div").class("carro-price").text(format_brl(carro.preco))),
        )
        .into()
}

/// Upload references are bare filenames; full paths and URLs pass through.
fn image_url(uploads_base: &str, image: &str) -> String {
    if image.starts_with('/') || image.starts_with("http://") || image.starts_with("https://") {
        image.to_string()
    } else {
        format!("{}/{}", uploads_base, image)
    }
}

pub fn empty_placeholder() -> Node {
    Element::new("div").class("empty").text(EMPTY_MESSAGE).into()
}

/// Inline message shown in place of the list when it failed to load.
pub fn error_placeholder() -> Node {
    Element::new("div").class("empty load-error").text(LOAD_ERROR_MESSAGE).into()
}

pub fn intro_placeholder() -> Node {
    Element::new("div").class("intro").text(INTRO_MESSAGE).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CarroId;

    fn carro(id: i64, modelo: &str, preco: f64) -> Carro {
        Carro { id: Some(CarroId::Number(id)), modelo: modelo.to_string(), preco, image: None }
    }

    fn class_text(tree: &Node, class: &str) -> Vec<String> {
        tree.find_by_class(class)
            .into_iter()
            .map(|el| Node::Element(el.clone()).text_content())
            .collect()
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Civic"), "C");
        assert_eq!(initials("range rover evoque"), "RR");
        assert_eq!(initials("Model 3 long"), "ML");
        assert_eq!(initials("  fiat   uno "), "FU");
        assert_eq!(initials("911"), PLACEHOLDER);
        assert_eq!(initials(""), PLACEHOLDER);
        assert_eq!(initials("émile"), "É");
    }

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(95000.0), "R$ 95.000,00");
        assert_eq!(format_brl(0.5), "R$ 0,50");
        assert_eq!(format_brl(999.999), "R$ 1.000,00");
        assert_eq!(format_brl(1234567.8), "R$ 1.234.567,80");
        assert_eq!(format_brl(-5.0), "-R$ 5,00");
        assert_eq!(format_brl(f64::NAN), "R$ 0,00");
    }

    #[test]
    fn test_render_empty_is_single_placeholder() {
        let tree = render_cards(&[], "/static/uploads");
        assert_eq!(tree.find_by_class("empty").len(), 1);
        assert!(tree.find_by_class("carro-item").is_empty());
        assert_eq!(tree.text_content(), EMPTY_MESSAGE);
    }

    #[test]
    fn test_render_single_card() {
        let tree = render_cards(&[carro(1, "Civic", 95000.0)], "/static/uploads");

        assert_eq!(tree.find_by_class("carro-item").len(), 1);
        assert!(tree.find_by_class("empty").is_empty());
        assert_eq!(class_text(&tree, "carro-initials"), vec!["C"]);
        assert_eq!(class_text(&tree, "carro-title"), vec!["Civic"]);
        assert_eq!(class_text(&tree, "carro-meta"), vec!["ID: 1"]);
        assert_eq!(class_text(&tree, "carro-price"), vec!["R$ 95.000,00"]);
        assert!(tree.find_by_class("carro-image").is_empty());
    }

    #[test]
    fn test_render_missing_fields_use_placeholder() {
        let record = Carro { id: None, modelo: String::new(), preco: 1.0, image: None };
        let tree = render_cards(&[record], "/static/uploads");
        assert_eq!(class_text(&tree, "carro-title"), vec![PLACEHOLDER]);
        assert_eq!(class_text(&tree, "carro-meta"), vec![format!("ID: {}", PLACEHOLDER)]);
    }

    #[test]
    fn test_render_escapes_record_text() {
        let mut hostile = carro(7, r#"<img src=x onerror="alert('&')">"#, 1.0);
        hostile.image = Some(r#"a.png" onload="x"#.to_string());
        let html = render_cards(&[hostile], "/static/uploads").to_html();

        assert!(!html.contains("<img src=x"));
        assert!(!html.contains("onerror=\""));
        assert!(!html.contains("a.png\" onload"));
        assert!(html.contains("&lt;img src=x onerror=&quot;alert(&#39;&amp;&#39;)&quot;&gt;"));
    }

    #[test]
    fn test_render_image_reference() {
        let mut with_image = carro(2, "Corolla", 1.0);
        with_image.image = Some("1700000000_corolla.png".to_string());
        let tree = render_cards(&[with_image], "/static/uploads");

        let images = tree.find_by_class("carro-image");
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].get_attr("src"), Some("/static/uploads/1700000000_corolla.png"));
        assert_eq!(images[0].get_attr("alt"), Some("Corolla"));
    }
}
