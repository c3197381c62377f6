use tests::*;

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use pretty_assertions::assert_eq;
use rowmap::{FromRow, RowExt, Table, Value};
use rust_decimal::Decimal;

fn date() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2022, 9, 9)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

#[test]
fn table_rows_materialize() {
    init_tracing();

    let table = Table::new([
        "ID",
        "Name",
        "LaBoolissimmo",
        "Floating",
        "LOOOOOoong",
        "BirthDay",
        "Elapsed",
        "ByeArray",
    ])
    .with_row([
        Value::from(123),
        Value::from("ggg"),
        Value::from(true),
        Value::from(3213f32),
        Value::from(123i64),
        Value::from(date()),
        Value::from(TimeDelta::seconds(123)),
        Value::from(&[3u8, 2, 1][..]),
    ])
    .unwrap();

    let list: Vec<MyObject> = table.materialize_all_as().unwrap();
    assert_eq!(list.len(), 1);

    let o = &list[0];
    assert_eq!(o.id, 123);
    assert_eq!(o.name, "ggg");
    assert!(o.la_boolissimmo);
    assert_eq!(o.floating, 3213.0);
    assert_eq!(o.looooooong, 123);
    assert_eq!(o.birth_day, date());
    assert_eq!(o.elapsed, TimeDelta::seconds(123));
    assert_eq!(o.bye_array, [3, 2, 1]);

    // Constructed through `MyObject::new`, and never bound
    assert_eq!(o.get_only, 123);
}

#[test]
fn column_order_does_not_matter() {
    let table = Table::new(["LaBoolissimmo", "Name", "ID"])
        .with_row([Value::from(true), Value::from("ggg"), Value::from(123)])
        .unwrap()
        .with_row([Value::from(false), Value::from("hhh"), Value::from(321)])
        .unwrap();

    let list: Vec<MyObject> = table.materialize_all_as().unwrap();

    let summary: Vec<_> = list
        .iter()
        .map(|o| (o.id, o.name.as_str(), o.la_boolissimmo))
        .collect();
    assert_eq!(summary, [(123, "ggg", true), (321, "hhh", false)]);
}

#[test]
fn every_column_order_binds_the_same_instance() {
    let columns = [
        ("ID", Value::from(7)),
        ("Name", Value::from("seven")),
        ("LaBoolissimmo", Value::from(true)),
        ("decl", Value::from(2.5)),
    ];

    let orders: [[usize; 4]; 5] = [
        [0, 1, 2, 3],
        [3, 2, 1, 0],
        [1, 3, 0, 2],
        [2, 0, 3, 1],
        [3, 0, 1, 2],
    ];

    let expected = MyObject::from_row(&columns).unwrap();
    assert_eq!(expected.id, 7);
    assert_eq!(expected.decl, Decimal::new(25, 1));

    for order in orders {
        let row: Vec<_> = order.iter().map(|&i| columns[i].clone()).collect();
        assert_eq!(MyObject::from_row(&row).unwrap(), expected);

        let table = Table::new(row.iter().map(|(name, _)| *name))
            .with_row(row.iter().map(|(_, value)| value.clone()))
            .unwrap();
        let list: Vec<MyObject> = table.materialize_all_as().unwrap();
        assert_eq!(list, [expected.clone()]);
    }
}

#[test]
fn single_row() {
    let row = [
        ("Active", Value::from(true)),
        ("Name", Value::from("ann")),
        ("Id", Value::from(7)),
    ];

    let person = Person::from_row(&row).unwrap();
    assert_eq!(
        person,
        Person {
            id: 7,
            name: "ann".to_string(),
            active: true,
        }
    );

    let person: Person = row.materialize_as().unwrap();
    assert_eq!(person.id, 7);
}

#[test]
fn missing_columns_keep_constructed_values() {
    let row = [("name", Value::from("bob"))];

    let o = MyObject::from_row(&row).unwrap();
    assert_eq!(o.name, "bob");
    assert_eq!(o.id, 0);
    assert_eq!(o.get_only, 123);
}

#[test]
fn extra_columns_are_ignored() {
    let row = vec![
        ("Id".to_string(), Value::from(1)),
        ("Unknown".to_string(), Value::from("x")),
        ("GetOnly".to_string(), Value::from(999)),
    ];

    let o = MyObject::from_row(&row).unwrap();
    assert_eq!(o.id, 1);

    // Read only fields have no column
    assert_eq!(o.get_only, 123);
}

#[test]
fn empty_row() {
    let row: [(&str, Value); 0] = [];
    assert_eq!(Person::from_row(&row).unwrap(), Person::default());
}

#[test]
fn conversion_failures_are_errors() {
    let row = [("Id", Value::from(1)), ("Active", Value::from("yes"))];

    let err = Person::from_row(&row).unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot bind column `Active`: cannot convert String \"yes\" to bool"
    );
    assert!(err.is_type_conversion());
    assert_eq!(err.field(), Some("Active"));
    assert_eq!(err.value(), Some(&Value::from("yes")));
}

#[test]
fn null_into_non_nullable_is_an_error() {
    let row = [("Name", Value::Null)];

    let err = Person::from_row(&row).unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot bind column `Name`: cannot convert null to String"
    );
}

#[test]
fn null_into_nullable_binds_none() {
    let row = [
        ("NullableBirthDay", Value::Null),
        ("NullableDude", Value::Null),
    ];

    let o = MyObject::from_row(&row).unwrap();
    assert_eq!(o.nullable_birth_day, None);
    assert_eq!(o.nullable_dude, None);

    let row = [("NullableDude", Value::from(Dude::SecondDude))];
    let o = MyObject::from_row(&row).unwrap();
    assert_eq!(o.nullable_dude, Some(Dude::SecondDude));
}

#[test]
fn rows_bind_with_the_same_coercions_as_setters() {
    let row = [
        ("Id", Value::from(25u8)),
        ("Decl", Value::from(2)),
        ("SnapChar", Value::from(65)),
        ("Dude", Value::from(2)),
        ("IntArray", Value::from(vec![4, 5])),
    ];

    let o = MyObject::from_row(&row).unwrap();
    assert_eq!(o.id, 25);
    assert_eq!(o.decl, Decimal::from(2));
    assert_eq!(o.snap_char, 'A');
    assert_eq!(o.dude, Dude::Third);
    assert_eq!(o.int_array, [4, 5]);
}

#[test]
fn invalid_enum_values_are_errors() {
    let row = [("Dude", Value::from(9))];

    let err = MyObject::from_row(&row).unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot bind column `Dude`: cannot convert Isize 9 to Dude"
    );
}

#[test]
fn array_mismatches_are_errors() {
    let row = [("LongArray", Value::from(vec![1i32]))];

    let err = MyObject::from_row(&row).unwrap_err();
    assert_eq!(err.field(), Some("LongArray"));
    assert!(err.is_type_conversion());
}
