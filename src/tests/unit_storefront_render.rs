use crate::domain::{Price, Product};
use crate::storefront::render::{escape_html, home_page, product_card};
use crate::tests::{keyboard, mock_product};

#[test]
fn test_card_shows_every_field() {
    let card = product_card(&keyboard());

    assert_eq!(
        card,
        concat!(
            r#"<div class="product-card" data-id="1">"#,
            r#"<img src="/img/kb.png" alt="Teclado Gamer"/>"#,
            "<h3>Teclado Gamer</h3>",
            "<p>Mecânico RGB</p>",
            "<p>250</p>",
            "</div>"
        )
    );
}

// no currency symbol, no rounding
#[test]
fn test_card_price_is_raw_number() {
    let card = product_card(&mock_product(4, 1999.99));
    assert!(card.contains("<p>1999.99</p>"));
    assert!(!card.contains("R$"));
}

#[test]
fn test_page_has_one_card_per_product_in_order() {
    let products: Vec<Product> = (1..=5).map(|i| mock_product(i, i as f64)).collect();

    let page = home_page(&products);

    assert_eq!(page.matches(r#"class="product-card""#).count(), 5);
    assert!(page.contains("<h1>Produtos</h1>"));

    let positions: Vec<usize> = products
        .iter()
        .map(|p| page.find(&format!("<h3>{}</h3>", p.name.as_deref().unwrap())).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_empty_page_has_no_cards() {
    let page = home_page(&[]);

    assert!(page.contains(r#"<div class="product-list"></div>"#));
    assert_eq!(page.matches("product-card").count(), 0);
}

// markup in a field is shown as text, not interpreted
#[test]
fn test_card_escapes_markup() {
    let product = Product {
        id: 9,
        name: Some("<script>alert(1)</script>".to_string()),
        description: Some("Tom & Jerry \"edição\"".to_string()),
        price: Some(Price(10.0)),
        image_url: Some("/img/a.png\" onerror=\"x".to_string()),
    };

    let card = product_card(&product);

    assert!(!card.contains("<script>"));
    assert!(card.contains("<h3>&lt;script&gt;alert(1)&lt;/script&gt;</h3>"));
    assert!(card.contains("<p>Tom &amp; Jerry &quot;edição&quot;</p>"));
    assert!(card.contains(r#"src="/img/a.png&quot; onerror=&quot;x""#));
}

#[test]
fn test_card_with_missing_fields_renders_empty_text() {
    let product = Product {
        id: 3,
        name: Some("Mouse".to_string()),
        description: None,
        price: None,
        image_url: None,
    };

    assert_eq!(
        product_card(&product),
        concat!(
            r#"<div class="product-card" data-id="3">"#,
            r#"<img src="" alt="Mouse"/>"#,
            "<h3>Mouse</h3>",
            "<p></p>",
            "<p></p>",
            "</div>"
        )
    );
}

#[test]
fn test_escape_leaves_plain_text_alone() {
    assert_eq!(escape_html("Mecânico RGB"), "Mecânico RGB");
    assert_eq!(escape_html("it's"), "it&#39;s");
}
