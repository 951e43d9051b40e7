use crate::domain::Product;

pub const PAGE_TITLE: &str = "Produtos";

/// One product as a card: image, name, description and the raw price.
/// A missing field renders as empty text.
pub fn product_card(product: &Product) -> String {
    let name = escape_html(product.name.as_deref().unwrap_or_default());
    let price = product.price.map(|p| p.to_string()).unwrap_or_default();

    format!(
        concat!(
            r#"<div class="product-card" data-id="{id}">"#,
            r#"<img src="{src}" alt="{alt}"/>"#,
            "<h3>{name}</h3>",
            "<p>{description}</p>",
            "<p>{price}</p>",
            "</div>"
        ),
        id = product.id,
        src = escape_html(product.image_url.as_deref().unwrap_or_default()),
        alt = name,
        name = name,
        description = escape_html(product.description.as_deref().unwrap_or_default()),
        price = price,
    )
}

/// The whole home page, cards in the order given.
pub fn home_page(products: &[Product]) -> String {
    let cards: String = products.iter().map(product_card).collect();

    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html>\n",
            "<head><meta charset=\"utf-8\"><title>{title}</title></head>\n",
            "<body>\n",
            "<h1>{title}</h1>\n",
            "<div class=\"product-list\">{cards}</div>\n",
            "</body>\n",
            "</html>\n"
        ),
        title = PAGE_TITLE,
        cards = cards,
    )
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
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
