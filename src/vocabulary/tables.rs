//! Built-in word lists.
//!
//! Entries are stored lower-case; the generator preserves their casing as-is.
//! Tier extras are per-tier deltas: a tier's full list is the union of its own
//! entries and those of every lower tier.

pub(super) struct LanguageWords {
    pub modifiers: &'static [&'static str],
    pub categories: &'static [&'static str],
    pub basic: &'static [&'static str],
    pub intermediate: &'static [&'static str],
    pub advanced: &'static [&'static str],
}

pub(super) const SPANISH: LanguageWords = LanguageWords {
    modifiers: &[
        "barato",
        "nuevo",
        "original",
        "mejor",
        "económico",
        "online",
        "precio",
    ],
    categories: &[
        "para hombre",
        "para mujer",
        "para niños",
        "unisex",
        "deportivas",
        "de moda",
    ],
    basic: &["oferta", "descuento", "envío gratis"],
    intermediate: &["más vendido", "tienda oficial", "calidad premium", "cuotas sin interés"],
    advanced: &["exclusivo", "edición limitada", "profesional", "de lujo", "hecho a mano"],
};

pub(super) const ENGLISH: LanguageWords = LanguageWords {
    modifiers: &["cheap", "new", "original", "best", "affordable", "online", "price"],
    categories: &["for men", "for women", "kids", "unisex", "sports", "trendy"],
    basic: &["sale", "discount", "free shipping"],
    intermediate: &["best seller", "official store", "premium quality", "top rated"],
    advanced: &["exclusive", "limited edition", "professional", "luxury", "handmade"],
};

pub(super) const PORTUGUESE: LanguageWords = LanguageWords {
    modifiers: &["barato", "novo", "original", "melhor", "econômico", "online", "preço"],
    categories: &["masculino", "feminino", "infantil", "unissex", "esportivo", "da moda"],
    basic: &["promoção", "desconto", "frete grátis"],
    intermediate: &["mais vendido", "loja oficial", "qualidade premium", "parcelado sem juros"],
    advanced: &["exclusivo", "edição limitada", "profissional", "de luxo", "artesanal"],
};
