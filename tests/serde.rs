use largeint::LargeInteger;
use serde_derive::{Deserialize, Serialize};

fn int(s: &str) -> LargeInteger {
    s.parse().unwrap()
}

#[derive(Serialize, Deserialize, PartialEq, Debug)]
struct Account {
    id: u32,
    balance: LargeInteger,
}

#[test]
fn test_serialize() {
    assert_eq!(serde_json::to_string(&int("-5")).unwrap(), "-5");
    assert_eq!(
        serde_json::to_string(&int("18446744073709551615")).unwrap(),
        "18446744073709551615",
    );
    assert_eq!(
        serde_json::to_string(&int("18446744073709551616")).unwrap(),
        "\"18446744073709551616\"",
    );
    assert_eq!(
        serde_json::to_string(&int("-9223372036854775809")).unwrap(),
        "\"-9223372036854775809\"",
    );
}

#[test]
fn test_deserialize() {
    let x: LargeInteger = serde_json::from_str("123").unwrap();
    assert_eq!(x, int("123"));
    let x: LargeInteger = serde_json::from_str("-9223372036854775808").unwrap();
    assert_eq!(x, LargeInteger::from(i64::MIN));
    let x: LargeInteger = serde_json::from_str("\"-123456789012345678901234567890\"").unwrap();
    assert_eq!(x, int("-123456789012345678901234567890"));

    assert!(serde_json::from_str::<LargeInteger>("\"12x\"").is_err());
    assert!(serde_json::from_str::<LargeInteger>("1.5").is_err());
    assert!(serde_json::from_str::<LargeInteger>("null").is_err());
}

#[test]
fn test_struct_round_trip() {
    let account = Account {
        id: 7,
        balance: int("-340282366920938463463374607431768211456"),
    };
    let json = serde_json::to_string(&account).unwrap();
    assert_eq!(
        json,
        "{\"id\":7,\"balance\":\"-340282366920938463463374607431768211456\"}",
    );
    let back: Account = serde_json::from_str(&json).unwrap();
    assert_eq!(back, account);
}
