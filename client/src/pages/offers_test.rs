use super::*;

fn quote(fallback: Option<bool>) -> RateQuote {
    RateQuote {
        success: true,
        rate: 83.0,
        currency: "INR".to_owned(),
        base: "USD".to_owned(),
        timestamp: "2026-01-01T00:00:00Z".to_owned(),
        fallback,
    }
}

#[test]
fn discount_label_formats_percent() {
    let offer = Offer {
        id: "o1".to_owned(),
        title: "Launch".to_owned(),
        description: String::new(),
        discount_percent: 15,
        code: None,
        valid_until: None,
        active: true,
    };
    assert_eq!(discount_label(&offer), "15% off");
}

#[test]
fn discount_label_clamps_out_of_range() {
    let offer = Offer {
        id: "o2".to_owned(),
        title: String::new(),
        description: String::new(),
        discount_percent: 250,
        code: None,
        valid_until: None,
        active: true,
    };
    assert_eq!(discount_label(&offer), "100% off");
}

#[test]
fn rate_caption_hidden_without_quote() {
    assert_eq!(rate_caption(None), None);
}

#[test]
fn rate_caption_marks_fallback_as_approximate() {
    let caption = rate_caption(Some(&quote(Some(true)))).unwrap();
    assert!(caption.contains("approximate"));
    assert!(caption.contains("83.00"));
}

#[test]
fn rate_caption_live_quote() {
    assert_eq!(rate_caption(Some(&quote(None))).unwrap(), "1 USD = 83.00 INR");
}
