//! # Built-in Storefront Rule Table
//!
//! File: cli/src/selector/catalog.rs
//!
//! The canonical rule table shipped with pawsbot. Rules are listed in
//! priority order: the specific shopping questions (size, shipping,
//! recommendations, color) come first, general store topics after them, and
//! greetings last so that "hello, do you ship?" is answered as a shipping
//! question.
//!
use super::rules::{RuleBook, TopicRule};
use super::Category;

pub const SIZE_GUIDE: &str = "\
Finding the perfect fit is easy! 🐾
• Measure your pet's neck, chest (widest part) and back length (collar to tail base).
• Compare with the size chart on each product page: XS (toy breeds) up to XXL (giant breeds).
• Between two sizes? Go one size up for comfort.
Medium breeds like Beagles usually wear an M, Labradors and Retrievers an L.";

pub const SHIPPING_INFO: &str = "\
We ship worldwide! 📦
• Standard delivery: 3-5 business days (free on orders over $50).
• Express delivery: 1-2 business days.
• International orders: 7-14 business days, duties calculated at checkout.
You'll receive a tracking number by email as soon as your order leaves our studio.";

pub const RECOMMENDATIONS: &str = "\
Here are our current favourites! ✨
• Cozy Knit Sweater: perfect for chilly walks.
• Classic Plaid Raincoat: waterproof and reflective.
• Velvet Party Bow Tie: for special occasions.
• Denim Explorer Harness: everyday comfort and style.
Tell me about your pet's breed and personality and I can narrow it down.";

pub const COLOR_OPTIONS: &str = "\
Most of our pieces come in several colorways! 🎨
• Classics: black, navy, charcoal and camel.
• Brights: coral, sunflower yellow and mint.
• Seasonal: limited shades that change every collection.
Available colors are shown as swatches on each product page.";

pub const RETURNS_POLICY: &str = "\
Not quite right? No problem! 🔄
• Free exchanges and returns within 30 days of delivery.
• Items must be unworn with their tags attached.
• Refunds go back to your original payment method within 5-7 business days.
Start a return from the Orders section of your account.";

pub const PROMOTIONS: &str = "\
Great timing! 🎉
• New customers get 15% off their first order with code WELCOME15.
• Free shipping on every order over $50.
• Join our newsletter for early access to seasonal sales.
Check the Sale section of the shop for this week's markdowns.";

pub const MATERIALS_CARE: &str = "\
Our pieces are made to be loved (and washed)! 🧼
• Fabrics: organic cotton, recycled polyester fleece and soft merino blends.
• Machine wash cold on a gentle cycle, inside out.
• Lay flat to dry; avoid tumble drying knitwear.
Care details for each item are listed on its product page.";

pub const GREETING: &str = "\
Hello and welcome! 👋
I can help with sizing, shipping, returns, colors and outfit ideas for your furry friend.
What are you shopping for today?";

pub const FALLBACK_REPLIES: [&str; 5] = [
    "I'm not sure I understood that. I can help with sizes, shipping, returns, colors and recommendations!",
    "Could you tell me a bit more? For example, ask me about sizing or our latest arrivals.",
    "Great question! Our customer care team can help with that at hello@pawsandthreads.shop.",
    "Hmm, I don't have an answer for that yet. Try asking about shipping, sizes or current offers.",
    "I'm still learning! Meanwhile, you can browse our new collection or ask me for a recommendation.",
];

/// Declared priority order of the built-in rules.
fn builtin_rules() -> Vec<TopicRule> {
    let table: [(&str, Category, &[&str], &str); 8] = [
        (
            "size",
            Category::Informational,
            &["size", "sizing", "fit", "measure"],
            SIZE_GUIDE,
        ),
        (
            "shipping",
            Category::Informational,
            &["ship", "deliver", "tracking"],
            SHIPPING_INFO,
        ),
        (
            "recommendations",
            Category::Promotional,
            &["recommend", "suggest", "popular", "best seller", "bestseller"],
            RECOMMENDATIONS,
        ),
        (
            "color",
            Category::Informational,
            &["color", "colour"],
            COLOR_OPTIONS,
        ),
        (
            "returns",
            Category::Informational,
            &["return", "refund", "exchange"],
            RETURNS_POLICY,
        ),
        (
            "promotions",
            Category::Promotional,
            &["discount", "sale", "promo", "coupon", "offer"],
            PROMOTIONS,
        ),
        (
            "materials",
            Category::Informational,
            &["material", "fabric", "wash", "care"],
            MATERIALS_CARE,
        ),
        (
            "greeting",
            Category::Informational,
            &["hello", "good morning", "good evening"],
            GREETING,
        ),
    ];

    table
        .into_iter()
        .map(|(name, category, triggers, response)| {
            TopicRule::new(name, category, triggers, response)
                .expect("built-in rule table is valid")
        })
        .collect()
}

impl RuleBook {
    /// The canonical storefront rule table and fallback pool.
    ///
    /// Goes through the same validation as a loaded table; the data is
    /// static, so a failure here is a programming error.
    pub fn builtin() -> Self {
        let fallback = FALLBACK_REPLIES.iter().map(|r| r.to_string()).collect();
        RuleBook::new(builtin_rules(), fallback).expect("built-in fallback pool is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_passes_validation() {
        let builtin = RuleBook::builtin();
        let rebuilt_rules = builtin
            .rules()
            .iter()
            .map(|r| TopicRule::new(r.name(), r.category(), r.triggers(), r.response()))
            .collect::<Result<Vec<_>, _>>()
            .expect("built-in rules are valid");
        let rebuilt = RuleBook::new(rebuilt_rules, builtin.fallback().to_vec())
            .expect("built-in rule book is valid");
        assert_eq!(rebuilt, builtin);
    }

    #[test]
    fn builtin_fallback_pool_matches_constants() {
        let book = RuleBook::builtin();
        assert_eq!(book.fallback().len(), FALLBACK_REPLIES.len());
        assert!(book
            .fallback()
            .iter()
            .zip(FALLBACK_REPLIES)
            .all(|(loaded, constant)| loaded == constant));
    }

    #[test]
    fn builtin_priority_order() {
        let book = RuleBook::builtin();
        let names: Vec<&str> = book.rules().iter().map(|r| r.name()).collect();
        assert_eq!(
            names,
            vec![
                "size",
                "shipping",
                "recommendations",
                "color",
                "returns",
                "promotions",
                "materials",
                "greeting"
            ]
        );
    }

    #[test]
    fn builtin_triggers_are_lowercase() {
        for rule in RuleBook::builtin().rules() {
            for trigger in rule.triggers() {
                assert_eq!(trigger, &trigger.to_lowercase(), "rule {}", rule.name());
            }
        }
    }
}
