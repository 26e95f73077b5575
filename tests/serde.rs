//! Serialization tests.

#![cfg(feature = "serde")]

use bjcard::{Card, Rank, Suit};

#[test]
fn card_serializes_codes() {
    let mut card = Card::new(Suit::Spades, Rank::King, "king_spades.png");
    card.hide();

    let json = serde_json::to_string(&card).unwrap();
    assert_eq!(
        json,
        r#"{"suit":3,"rank":13,"image_name":"king_spades.png","visible":false}"#
    );

    let back: Card = serde_json::from_str(&json).unwrap();
    assert_eq!(back, card);
}

#[test]
fn missing_visibility_defaults_to_face_up() {
    let card: Card =
        serde_json::from_str(r#"{"suit":0,"rank":1,"image_name":"ace_hearts.png"}"#).unwrap();
    assert!(card.is_visible());
    assert_eq!(card.score(), 11);
}

#[test]
fn invalid_codes_fail_to_deserialize() {
    let err = serde_json::from_str::<Card>(r#"{"suit":0,"rank":14,"image_name":"x.png"}"#)
        .unwrap_err();
    assert!(err.to_string().contains("invalid rank code 14"));

    assert!(serde_json::from_str::<Suit>("4").is_err());
}
