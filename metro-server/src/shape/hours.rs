//! Station opening hours.

use chrono::Weekday;
use serde::{Serialize, Serializer};

use crate::domain::to_twelve_hour;
use crate::wmata::StationTimesResponse;

use super::ShapeError;

/// Opening time upstream reports for a day the station does not open.
pub const CLOSED_SENTINEL: &str = "00:00";

/// Calendar order, as clients display it.
const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Opening hours for one day, with times in 12-hour form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationHoursEntry {
    #[serde(serialize_with = "serialize_day")]
    pub day: Weekday,
    pub opening: String,
    pub first_train: String,
    pub last_train: String,
}

fn serialize_day<S: Serializer>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(day_name(*day))
}

fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Build the weekly opening hours for a station.
///
/// Days that open at [`CLOSED_SENTINEL`] are left out. The first listed
/// first train and last train are used for each day.
pub fn shape_station_hours(
    raw: &StationTimesResponse,
) -> Result<Vec<StationHoursEntry>, ShapeError> {
    let times = match raw.station_times.as_slice() {
        [times] => times,
        records => return Err(ShapeError::TimingRecordCount(records.len())),
    };

    let mut entries = Vec::with_capacity(WEEK.len());

    for day in WEEK {
        let day_times = times.day(day);
        if day_times.opening_time == CLOSED_SENTINEL {
            continue;
        }

        let first_train = day_times
            .first_trains
            .first()
            .ok_or(ShapeError::MissingTrain {
                day,
                which: "first",
            })?;
        let last_train = day_times
            .last_trains
            .first()
            .ok_or(ShapeError::MissingTrain { day, which: "last" })?;

        entries.push(StationHoursEntry {
            day,
            opening: to_twelve_hour(&day_times.opening_time)?,
            first_train: to_twelve_hour(&first_train.time)?,
            last_train: to_twelve_hour(&last_train.time)?,
        });
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wmata::{DayTimes, StationTimes, TrainTime};
    use serde_json::json;

    fn day(opening: &str, first: &str, last: &str) -> DayTimes {
        DayTimes {
            opening_time: opening.to_string(),
            first_trains: vec![TrainTime { time: first.to_string() }],
            last_trains: vec![TrainTime { time: last.to_string() }],
        }
    }

    fn closed() -> DayTimes {
        DayTimes {
            opening_time: "00:00".to_string(),
            first_trains: vec![],
            last_trains: vec![],
        }
    }

    fn station_times(days: [DayTimes; 7]) -> StationTimes {
        let [monday, tuesday, wednesday, thursday, friday, saturday, sunday] = days;
        StationTimes {
            monday,
            tuesday,
            wednesday,
            thursday,
            friday,
            saturday,
            sunday,
        }
    }

    fn weekday_times() -> DayTimes {
        day("05:14", "05:29", "23:44")
    }

    fn response(times: Vec<StationTimes>) -> StationTimesResponse {
        StationTimesResponse {
            station_times: times,
        }
    }

    #[test]
    fn full_week_in_calendar_order() {
        let raw = response(vec![station_times(std::array::from_fn(|_| weekday_times()))]);

        let entries = shape_station_hours(&raw).unwrap();
        let days: Vec<_> = entries.iter().map(|e| e.day).collect();
        assert_eq!(days, WEEK.to_vec());
        assert_eq!(
            entries[0],
            StationHoursEntry {
                day: Weekday::Mon,
                opening: "05:14 am".into(),
                first_train: "05:29 am".into(),
                last_train: "11:44 pm".into(),
            }
        );
    }

    #[test]
    fn closed_wednesday_is_omitted() {
        let raw = response(vec![station_times([
            weekday_times(),
            weekday_times(),
            closed(),
            weekday_times(),
            weekday_times(),
            day("07:00", "07:15", "01:00"),
            day("08:00", "08:15", "23:00"),
        ])]);

        let entries = shape_station_hours(&raw).unwrap();
        let days: Vec<_> = entries.iter().map(|e| e.day).collect();
        assert_eq!(
            days,
            vec![
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Thu,
                Weekday::Fri,
                Weekday::Sat,
                Weekday::Sun
            ]
        );
        assert_eq!(entries[4].last_train, "01:00 am");
        assert_eq!(entries[5].opening, "08:00 am");
    }

    #[test]
    fn closed_every_day_is_empty() {
        let raw = response(vec![station_times(std::array::from_fn(|_| closed()))]);
        assert!(shape_station_hours(&raw).unwrap().is_empty());
    }

    #[test]
    fn multiple_records_are_rejected() {
        let times = station_times(std::array::from_fn(|_| weekday_times()));
        let raw = response(vec![times.clone(), times]);
        assert_eq!(
            shape_station_hours(&raw),
            Err(ShapeError::TimingRecordCount(2))
        );
    }

    #[test]
    fn no_records_are_rejected() {
        assert_eq!(
            shape_station_hours(&response(vec![])),
            Err(ShapeError::TimingRecordCount(0))
        );
    }

    #[test]
    fn open_day_without_trains_is_rejected() {
        let mut days: [DayTimes; 7] = std::array::from_fn(|_| weekday_times());
        days[3].last_trains.clear();
        let raw = response(vec![station_times(days)]);

        assert_eq!(
            shape_station_hours(&raw),
            Err(ShapeError::MissingTrain {
                day: Weekday::Thu,
                which: "last"
            })
        );
    }

    #[test]
    fn malformed_time_is_rejected() {
        let mut days: [DayTimes; 7] = std::array::from_fn(|_| weekday_times());
        days[0].first_trains[0].time = "5:29".into();
        let raw = response(vec![station_times(days)]);

        assert!(matches!(
            shape_station_hours(&raw),
            Err(ShapeError::Time(_))
        ));
    }

    #[test]
    fn serializes_with_day_names() {
        let entry = StationHoursEntry {
            day: Weekday::Wed,
            opening: "05:00 am".into(),
            first_train: "05:15 am".into(),
            last_train: "11:30 pm".into(),
        };
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({
                "day": "Wednesday",
                "opening": "05:00 am",
                "firstTrain": "05:15 am",
                "lastTrain": "11:30 pm"
            })
        );
    }

    #[test]
    fn shaping_is_idempotent() {
        let raw = response(vec![station_times([
            weekday_times(),
            closed(),
            weekday_times(),
            weekday_times(),
            weekday_times(),
            day("07:00", "07:15", "01:00"),
            closed(),
        ])]);
        assert_eq!(shape_station_hours(&raw), shape_station_hours(&raw));
    }
}
