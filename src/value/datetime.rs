//! `chrono` date/time → Typst `datetime(..)` conversion.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use super::Value;

impl From<NaiveDate> for Value {
    fn from(date: NaiveDate) -> Self {
        Value::Raw(format!(
            "datetime(year: {}, month: {}, day: {})",
            date.year(),
            date.month(),
            date.day()
        ))
    }
}

impl From<NaiveTime> for Value {
    fn from(time: NaiveTime) -> Self {
        Value::Raw(format!(
            "datetime(hour: {}, minute: {}, second: {})",
            time.hour(),
            time.minute(),
            time.second()
        ))
    }
}

impl From<NaiveDateTime> for Value {
    fn from(datetime: NaiveDateTime) -> Self {
        Value::Raw(format!(
            "datetime(year: {}, month: {}, day: {}, hour: {}, minute: {}, second: {})",
            datetime.year(),
            datetime.month(),
            datetime.day(),
            datetime.hour(),
            datetime.minute(),
            datetime.second()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(
            Value::from(date),
            Value::Raw("datetime(year: 2024, month: 1, day: 15)".into())
        );
    }

    #[test]
    fn test_datetime() {
        let datetime = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        assert_eq!(
            Value::from(datetime),
            Value::Raw(
                "datetime(year: 2024, month: 1, day: 15, hour: 9, minute: 30, second: 0)".into()
            )
        );
    }
}
