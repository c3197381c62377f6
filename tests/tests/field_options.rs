use tests::*;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc};
use pretty_assertions::assert_eq;
use rowmap::{FromRow, RowMapper, Value};
use rust_decimal::Decimal;
use std::time::Duration;

fn at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 2, 29)
        .unwrap()
        .and_hms_opt(12, 30, 0)
        .unwrap()
}

#[test]
fn write_only_fields_assign_by_name_only() {
    let mut account = Account::default();

    account.set_by_name("password", "hunter2");
    assert_eq!(account.password, "hunter2");

    let row = [("id", Value::from(1u64)), ("password", Value::from("x"))];
    let account = Account::from_row(&row).unwrap();
    assert_eq!(account.id, 1);
    assert_eq!(account.password, "");
}

#[test]
fn read_only_and_skipped_fields_are_never_assigned() {
    let mut account = Account {
        balance: Decimal::from(10),
        cache: vec!["kept".to_string()],
        ..Account::default()
    };

    account.set_by_name("balance", 5);
    account.set_by_name("cache", vec!["x"]);

    assert_eq!(account.balance, Decimal::from(10));
    assert_eq!(account.cache, ["kept"]);
}

#[test]
fn raw_identifiers_bind_without_prefix() {
    let mut account = Account::default();

    account.set_by_name("type", "admin");
    assert_eq!(account.r#type, "admin");

    account.set_by_name("TYPE", "user");
    assert_eq!(account.r#type, "user");

    account.set_by_name("r#type", "ignored");
    assert_eq!(account.r#type, "user");
}

#[test]
fn other_types_convert_through_try_from() {
    let mut account = Account::default();

    account.set_by_name("temperature", 21.5);
    assert_eq!(account.temperature, Celsius(21.5));

    account.set_by_name("temperature", 20);
    assert_eq!(account.temperature, Celsius(20.0));

    account.set_by_name("temperature", "hot");
    assert_eq!(account.temperature, Celsius::default());

    let row = [("temperature", Value::from("hot"))];
    let err = Account::from_row(&row).unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot bind column `temperature`: cannot convert String \"hot\" to f64"
    );
}

#[test]
fn value_fields_take_anything() {
    let mut account = Account::default();

    account.set_by_name("raw", "text");
    assert_eq!(account.raw, Value::from("text"));

    account.set_by_name("raw", Value::Null);
    assert_eq!(account.raw, Value::Null);

    let row = [("raw", Value::from(vec![1, 2]))];
    let account = Account::from_row(&row).unwrap();
    assert_eq!(account.raw, Value::from(vec![1, 2]));
}

#[test]
fn naive_dates_do_not_take_offsets() {
    let mut moments = Moments::default();

    moments.set_by_name("at", at());
    assert_eq!(moments.at, at());

    moments.set_by_name("at", at().and_utc());
    assert_eq!(moments.at, NaiveDateTime::default());
}

#[test]
fn offsets_and_utc() {
    let mut moments = Moments::default();
    let offset = FixedOffset::east_opt(2 * 3600)
        .unwrap()
        .from_local_datetime(&at())
        .unwrap();

    moments.set_by_name("offset", offset);
    assert_eq!(moments.offset, offset);

    moments.set_by_name("utc", offset);
    assert_eq!(moments.utc, Some(offset.with_timezone(&Utc)));

    let utc: DateTime<Utc> = at().and_utc();
    moments.set_by_name("utc", utc);
    assert_eq!(moments.utc, Some(utc));

    moments.set_by_name("utc", Value::Null);
    assert_eq!(moments.utc, None);

    moments.set_by_name("offset", at());
    assert_eq!(moments.offset, DateTime::<FixedOffset>::default());
}

#[test]
fn spans_and_durations() {
    let mut moments = Moments::default();

    moments.set_by_name("span", TimeDelta::minutes(-2));
    assert_eq!(moments.span, TimeDelta::minutes(-2));

    moments.set_by_name("uptime", Duration::from_secs(5));
    assert_eq!(moments.uptime, Duration::from_secs(5));

    moments.set_by_name("uptime", TimeDelta::milliseconds(1500));
    assert_eq!(moments.uptime, Duration::from_millis(1500));

    // A negative span is not a duration
    moments.set_by_name("uptime", TimeDelta::seconds(-1));
    assert_eq!(moments.uptime, Duration::ZERO);

    moments.set_by_name("span", 5);
    assert_eq!(moments.span, TimeDelta::zero());
}

#[test]
fn moments_materialize() {
    let row = [
        ("Uptime", Value::from(Duration::from_secs(60))),
        ("At", Value::from(at())),
        ("Utc", Value::Null),
    ];

    let moments = Moments::from_row(&row).unwrap();
    assert_eq!(moments.uptime, Duration::from_secs(60));
    assert_eq!(moments.at, at());
    assert_eq!(moments.utc, None);
}

#[test]
fn retyped_temporal_arrays() {
    let mut readings = Readings::default();
    let stamps = vec![at().and_utc(), (at() + TimeDelta::hours(1)).and_utc()];

    readings.set_by_name("stamps", stamps.clone());
    assert_eq!(readings.stamps, stamps);

    readings.set_by_name("uptimes", vec![Duration::from_secs(1), Duration::from_millis(5)]);
    assert_eq!(
        readings.uptimes,
        [Duration::from_secs(1), Duration::from_millis(5)]
    );

    // One negative span fails the whole array
    readings.set_by_name("uptimes", vec![TimeDelta::seconds(1), TimeDelta::seconds(-1)]);
    assert!(readings.uptimes.is_empty());

    // Naive dates are not offsets
    readings.set_by_name("stamps", vec![at()]);
    assert!(readings.stamps.is_empty());
}

#[test]
fn user_type_arrays_convert_each_item() {
    let mut readings = Readings::default();

    readings.set_by_name("temperatures", vec![21.5, 20.0]);
    assert_eq!(readings.temperatures, [Celsius(21.5), Celsius(20.0)]);

    readings.set_by_name("temperatures", vec![Value::from(1), Value::from("hot")]);
    assert!(readings.temperatures.is_empty());

    readings.set_by_name("gaps", vec![Some(1.5), None]);
    assert_eq!(readings.gaps, Some(vec![Some(Celsius(1.5)), None]));

    readings.set_by_name("gaps", Value::Null);
    assert_eq!(readings.gaps, None);

    let raw = vec![Value::from(1), Value::Null, Value::from("x")];
    readings.set_by_name("raw", raw.clone());
    assert_eq!(readings.raw, raw);
}

#[test]
fn arrays_materialize() {
    let row = [
        ("stamps", Value::from(vec![at().and_utc()])),
        ("uptimes", Value::from(vec![Duration::from_secs(3)])),
        ("temperatures", Value::from(vec![18.0])),
        ("raw", Value::from(vec![true])),
    ];

    let readings = Readings::from_row(&row).unwrap();
    assert_eq!(
        readings,
        Readings {
            stamps: vec![at().and_utc()],
            uptimes: vec![Duration::from_secs(3)],
            temperatures: vec![Celsius(18.0)],
            gaps: None,
            raw: vec![Value::from(true)],
        }
    );

    let row = [("temperatures", Value::from(vec!["hot"]))];
    let err = Readings::from_row(&row).unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot bind column `temperatures`: cannot convert String \"hot\" to f64"
    );
}
