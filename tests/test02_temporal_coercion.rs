use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::{America::New_York, Tz};
use sql_bean_params::prelude::*;

#[derive(Default)]
struct Event {
    d: Option<NaiveDate>,
    t: Option<NaiveTime>,
    ts: Option<NaiveDateTime>,
    odt: Option<DateTime<FixedOffset>>,
    zdt: Option<DateTime<Tz>>,
}

sql_bean_params::bean_fields!(Event { d, t, ts, odt, zdt });

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn wall(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    date(y, mo, d).and_hms_opt(h, mi, s).unwrap()
}

fn offset(hours: i32) -> FixedOffset {
    FixedOffset::east_opt(hours * 3600).unwrap()
}

#[test]
fn local_date_becomes_sql_date() -> Result<(), ParameterSourceError> {
    let event = Event {
        d: Some(date(2023, 1, 15)),
        ..Event::default()
    };
    let source = BeanParameterSource::new(&event).with_zone(DefaultZone::utc());
    assert_eq!(source.value("d")?, Some(RowValues::Date(date(2023, 1, 15))));
    Ok(())
}

#[test]
fn local_time_becomes_sql_time() -> Result<(), ParameterSourceError> {
    let event = Event {
        t: Some(NaiveTime::from_hms_opt(9, 30, 0).unwrap()),
        ..Event::default()
    };
    let source = BeanParameterSource::new(&event).with_zone(DefaultZone::utc());
    assert_eq!(
        source.value("t")?,
        Some(RowValues::Time(NaiveTime::from_hms_opt(9, 30, 0).unwrap()))
    );
    Ok(())
}

#[test]
fn local_date_time_becomes_sql_timestamp() -> Result<(), ParameterSourceError> {
    let event = Event {
        ts: Some(wall(2023, 1, 15, 9, 30, 0)),
        ..Event::default()
    };
    let source = BeanParameterSource::new(&event).with_zone(DefaultZone::Fixed(offset(-7)));
    assert_eq!(
        source.value("ts")?,
        Some(RowValues::Timestamp(wall(2023, 1, 15, 9, 30, 0)))
    );
    Ok(())
}

#[test]
fn offset_date_time_is_shifted_into_default_zone() -> Result<(), ParameterSourceError> {
    let event = Event {
        odt: Some(offset(0).with_ymd_and_hms(2023, 1, 15, 9, 30, 0).unwrap()),
        ..Event::default()
    };
    let source = BeanParameterSource::new(&event).with_zone(DefaultZone::Fixed(offset(2)));
    assert_eq!(
        source.value("odt")?,
        Some(RowValues::Timestamp(wall(2023, 1, 15, 11, 30, 0)))
    );
    Ok(())
}

#[test]
fn zoned_date_time_is_shifted_into_default_zone() -> Result<(), ParameterSourceError> {
    let event = Event {
        zdt: Some(New_York.with_ymd_and_hms(2023, 6, 15, 12, 0, 0).unwrap()),
        ..Event::default()
    };
    let source = BeanParameterSource::new(&event).with_zone(DefaultZone::utc());
    assert_eq!(
        source.value("zdt")?,
        Some(RowValues::Timestamp(wall(2023, 6, 15, 16, 0, 0)))
    );
    Ok(())
}

#[test]
fn absent_temporals_stay_absent() -> Result<(), ParameterSourceError> {
    let event = Event::default();
    let source = BeanParameterSource::new(&event).with_zone(DefaultZone::utc());
    for name in ["d", "t", "ts", "odt", "zdt"] {
        assert!(source.has_value(name));
        assert_eq!(source.value(name)?, None, "{name}");
    }
    Ok(())
}

#[test]
fn zone_bearing_values_keep_their_instant() -> Result<(), ParameterSourceError> {
    let odt = offset(-5).with_ymd_and_hms(2024, 3, 10, 1, 45, 30).unwrap();
    let zdt = New_York.with_ymd_and_hms(2024, 11, 3, 0, 30, 0).unwrap();
    let event = Event {
        odt: Some(odt),
        zdt: Some(zdt),
        ..Event::default()
    };

    let zones = [
        DefaultZone::utc(),
        DefaultZone::Fixed(offset(9)),
        DefaultZone::Named(chrono_tz::Europe::Berlin),
    ];
    for zone in zones {
        let source = BeanParameterSource::new(&event).with_zone(zone);
        for (name, instant) in [("odt", odt.with_timezone(&Utc)), ("zdt", zdt.with_timezone(&Utc))] {
            let Some(RowValues::Timestamp(ts)) = source.value(name)? else {
                panic!("{name} did not bind as a timestamp");
            };
            let reparsed = match zone {
                DefaultZone::Fixed(off) => off.from_local_datetime(&ts).single(),
                DefaultZone::Named(tz) => tz.from_local_datetime(&ts).single().map(|dt| dt.fixed_offset()),
                DefaultZone::System => None,
            }
            .unwrap();
            assert_eq!(reparsed.with_timezone(&Utc), instant, "{name} in {zone}");
        }
    }
    Ok(())
}

#[test]
fn local_values_round_trip_field_by_field() -> Result<(), ParameterSourceError> {
    let ts = date(1999, 12, 31).and_hms_nano_opt(23, 59, 59, 999_000_000).unwrap();
    let event = Event {
        d: Some(date(1970, 1, 1)),
        t: Some(NaiveTime::from_hms_opt(0, 0, 1).unwrap()),
        ts: Some(ts),
        ..Event::default()
    };
    let source = BeanParameterSource::new(&event).with_zone(DefaultZone::Fixed(offset(14)));

    assert_eq!(source.value("d")?.and_then(|v| v.as_date()), event.d);
    assert_eq!(source.value("t")?.and_then(|v| v.as_time()), event.t);
    assert_eq!(source.value("ts")?.and_then(|v| v.as_timestamp()), Some(ts));
    Ok(())
}

#[test]
fn zone_bearing_value_past_the_calendar_is_an_error() {
    let event = Event {
        odt: Some(NaiveDateTime::MAX.and_utc().fixed_offset()),
        zdt: Some(NaiveDateTime::MIN.and_utc().with_timezone(&Tz::UTC)),
        ..Event::default()
    };
    let source = BeanParameterSource::new(&event).with_zone(DefaultZone::Fixed(offset(1)));
    assert!(matches!(
        source.value("odt"),
        Err(ParameterSourceError::TemporalOutOfRange { .. })
    ));
    assert!(source.value("zdt").is_ok());

    let source = BeanParameterSource::new(&event).with_zone(DefaultZone::Fixed(offset(-1)));
    assert!(matches!(
        source.value("zdt"),
        Err(ParameterSourceError::TemporalOutOfRange { .. })
    ));
}
