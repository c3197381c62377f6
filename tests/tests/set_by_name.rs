use tests::*;

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use pretty_assertions::assert_eq;
use rowmap::{RowMapper, Value};
use rust_decimal::Decimal;
use uuid::Uuid;

fn date(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

#[test]
fn primitive_types_assign() {
    init_tracing();

    let mut o = MyObject::new();

    o.set_by_name("Id", 123);
    assert_eq!(o.id, 123);

    // Widening
    o.set_by_name("Id", 25u8);
    assert_eq!(o.id, 25);

    o.set_by_name("LaBoolissimmo", true);
    assert!(o.la_boolissimmo);

    o.set_by_name("ByteMyAss", 123u8);
    assert_eq!(o.byte_my_ass, 123);

    // Narrowing within range
    o.set_by_name("ByteMyAss", 124);
    assert_eq!(o.byte_my_ass, 124);

    o.set_by_name("AssByte", 123);
    assert_eq!(o.ass_byte, 123);

    o.set_by_name("SnapChar", 123);
    assert_eq!(o.snap_char, '{');

    o.set_by_name("Decl", 123);
    assert_eq!(o.decl, Decimal::from(123));

    o.set_by_name("DoubleKick", 123);
    assert_eq!(o.double_kick, 123.0);

    o.set_by_name("Floating", 123);
    assert_eq!(o.floating, 123.0);

    o.set_by_name("What", 123);
    assert_eq!(o.what, 123);

    o.set_by_name("ImBored", 123isize);
    assert_eq!(o.im_bored, 123);

    o.set_by_name("LOOOOOoong", 123);
    assert_eq!(o.looooooong, 123);

    o.set_by_name("Shrt", 123);
    assert_eq!(o.shrt, 123);

    let span = TimeDelta::seconds(123);
    o.set_by_name("Elapsed", span);
    assert_eq!(o.elapsed, span);

    let guid = Uuid::new_v4();
    o.set_by_name("MyGuid", guid);
    assert_eq!(o.my_guid, guid);
}

#[test]
fn names_match_ignoring_case() {
    let mut o = MyObject::new();

    o.set_by_name("fLOAtInG", 124);
    assert_eq!(o.floating, 124.0);

    o.set_by_name("looooooong", 7);
    assert_eq!(o.looooooong, 7);

    o.set_by_name("ID", 9);
    assert_eq!(o.id, 9);
}

#[test]
fn floats_round_half_to_even() {
    let mut o = MyObject::new();

    o.set_by_name("Id", 2.5);
    assert_eq!(o.id, 2);

    o.set_by_name("Id", 3.5);
    assert_eq!(o.id, 4);

    o.set_by_name("Floating", 2.25f64);
    assert_eq!(o.floating, 2.25);
}

#[test]
fn booleans_from_numbers() {
    let mut o = MyObject::new();

    o.set_by_name("LaBoolissimmo", 1);
    assert!(o.la_boolissimmo);

    o.set_by_name("LaBoolissimmo", 0u8);
    assert!(!o.la_boolissimmo);
}

#[test]
fn string_assign() {
    let mut o = MyObject::new();

    o.set_by_name("Name", "ggg");
    assert_eq!(o.name, "ggg");

    o.set_by_name("Name", String::from("hhh"));
    assert_eq!(o.name, "hhh");

    // Other values are never formatted into text
    o.set_by_name("Name", 123);
    assert_eq!(o.name, "");
}

#[test]
fn dates_assign() {
    let mut o = MyObject::new();
    let dt = date(2022, 9, 9);

    o.set_by_name("BirthDay", dt);
    assert_eq!(o.birth_day, dt);

    o.set_by_name("NUllableBirthDay", dt);
    assert_eq!(o.nullable_birth_day, Some(dt));

    o.set_by_name("NullableBirthDay", Value::Null);
    assert_eq!(o.nullable_birth_day, None);

    o.set_by_name("NullableBirthDay", Some(dt));
    assert_eq!(o.nullable_birth_day, Some(dt));

    o.set_by_name("NullableBirthDay", None::<NaiveDateTime>);
    assert_eq!(o.nullable_birth_day, None);
}

#[test]
fn arrays_assign() {
    let mut o = MyObject::new();

    o.set_by_name("ByeArray", &[1u8, 2, 3][..]);
    assert_eq!(o.bye_array, [1, 2, 3]);

    o.set_by_name("ByeArray", vec![4u8, 5]);
    assert_eq!(o.bye_array, [4, 5]);

    o.set_by_name("IntArray", vec![1, 2, 3]);
    assert_eq!(o.int_array, [1, 2, 3]);

    o.set_by_name("StringArray", vec!["1", "2", "3"]);
    assert_eq!(o.string_array, ["1", "2", "3"]);

    o.set_by_name("LongArray", vec![1i64, 2, 3]);
    assert_eq!(o.long_array, [1, 2, 3]);
}

#[test]
fn array_items_are_not_coerced() {
    let mut o = MyObject::new();
    o.long_array = vec![9];

    // `I32` items do not widen into `Vec<i64>`
    o.set_by_name("LongArray", vec![1i32, 2]);
    assert!(o.long_array.is_empty());

    o.int_array = vec![9];
    o.set_by_name("IntArray", 5);
    assert!(o.int_array.is_empty());
}

#[test]
fn enums_assign_from_any_integer() {
    let mut o = MyObject::new();

    o.set_by_name("Dude", 1);
    assert_eq!(o.dude, Dude::SecondDude);

    o.set_by_name("Dude", 2u8);
    assert_eq!(o.dude, Dude::Third);

    o.set_by_name("Dude", 0i64);
    assert_eq!(o.dude, Dude::FirstDude);

    o.set_by_name("NullableDude", 1);
    assert_eq!(o.nullable_dude, Some(Dude::SecondDude));

    o.set_by_name("NullableDude", Value::Null);
    assert_eq!(o.nullable_dude, None);
}

#[test]
fn enums_assign_from_enums() {
    let mut o = MyObject::new();

    o.set_by_name("Dude", Dude::Third);
    assert_eq!(o.dude, Dude::Third);

    o.set_by_name("NullableDude", Dude::FirstDude);
    assert_eq!(o.nullable_dude, Some(Dude::FirstDude));

    // Another enum converts through its ordinal
    o.set_by_name("Dude", Color::Green);
    assert_eq!(o.dude, Dude::Third);
}

#[test]
fn read_only_fields_are_not_assigned() {
    let mut o = MyObject::new();
    assert_eq!(o.get_only, 123);

    o.set_by_name("GetOnly", 321);
    assert_eq!(o.get_only, 123);
}

#[test]
fn unknown_names_are_ignored() {
    let mut o = MyObject::new();
    o.set_by_name("Id", 5);

    let before = o.clone();

    o.set_by_name("NonExistingProperty", 123);
    o.set_by_name("", "abc");
    o.set_by_name("Id ", 6);

    assert_eq!(o, before);
}

#[test]
fn incompatible_values_reset_to_default() {
    let mut o = MyObject::new();

    o.set_by_name("Id", 5);
    o.set_by_name("Id", "abc");
    assert_eq!(o.id, 0);

    o.set_by_name("Id", 5);
    o.set_by_name("Id", Value::Null);
    assert_eq!(o.id, 0);

    // Out of range
    o.set_by_name("Id", 3_000_000_000i64);
    assert_eq!(o.id, 0);

    o.set_by_name("ByteMyAss", 7);
    o.set_by_name("ByteMyAss", -1);
    assert_eq!(o.byte_my_ass, 0);

    o.set_by_name("Decl", 1);
    o.set_by_name("Decl", "1.5");
    assert_eq!(o.decl, Decimal::ZERO);

    o.set_by_name("BirthDay", date(2022, 9, 9));
    o.set_by_name("BirthDay", "2022-09-09");
    assert_eq!(o.birth_day, NaiveDateTime::default());

    o.set_by_name("MyGuid", Uuid::new_v4());
    o.set_by_name("MyGuid", Uuid::nil().to_string());
    assert_eq!(o.my_guid, Uuid::nil());

    o.set_by_name("Name", "x");
    o.set_by_name("Name", Value::Null);
    assert_eq!(o.name, "");

    o.set_by_name("NullableBirthDay", date(2022, 9, 9));
    o.set_by_name("NullableBirthDay", 5);
    assert_eq!(o.nullable_birth_day, None);
}

#[test]
fn incompatible_enum_values_reset_to_zero() {
    let mut o = MyObject::new();

    o.set_by_name("Dude", Dude::Third);
    o.set_by_name("Dude", 7);
    assert_eq!(o.dude, Dude::FirstDude);

    o.set_by_name("Dude", Dude::Third);
    o.set_by_name("Dude", "Third");
    assert_eq!(o.dude, Dude::FirstDude);

    o.set_by_name("NullableDude", Dude::Third);
    o.set_by_name("NullableDude", -1);
    assert_eq!(o.nullable_dude, None);
}

#[test]
fn setter_and_direct_assignment_agree() {
    let mut direct = MyObject::new();
    direct.id = 42;
    direct.name = "direct".to_string();
    direct.dude = Dude::SecondDude;
    direct.int_array = vec![1, 2];

    let mut by_name = MyObject::new();
    by_name.set_by_name("Id", 42);
    by_name.set_by_name("Name", "direct");
    by_name.set_by_name("Dude", Dude::SecondDude);
    by_name.set_by_name("IntArray", vec![1, 2]);

    assert_eq!(by_name, direct);
}
