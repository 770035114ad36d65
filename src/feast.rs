use serde::Serialize;

use crate::{
    CalendarDate, EASTER_MONDAY_OFFSET, EasterSunday, GOOD_FRIDAY_OFFSET, PALM_SUNDAY_OFFSET,
    prelude::*,
};

/// The movable feasts anchored on Easter Sunday, in calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
pub enum Feast {
    #[display(fmt = "Palm Sunday")]
    PalmSunday,
    #[display(fmt = "Good Friday")]
    GoodFriday,
    #[display(fmt = "Easter Sunday")]
    EasterSunday,
    #[display(fmt = "Easter Monday")]
    EasterMonday,
}

impl Feast {
    pub const ALL: [Self; 4] = [
        Self::PalmSunday,
        Self::GoodFriday,
        Self::EasterSunday,
        Self::EasterMonday,
    ];

    /// Days from Easter Sunday to this feast
    pub const fn offset_days(self) -> i64 {
        match self {
            Self::PalmSunday => PALM_SUNDAY_OFFSET,
            Self::GoodFriday => GOOD_FRIDAY_OFFSET,
            Self::EasterSunday => 0,
            Self::EasterMonday => EASTER_MONDAY_OFFSET,
        }
    }

    /// Finnish name of the feast
    pub const fn finnish_name(self) -> &'static str {
        match self {
            Self::PalmSunday => "Palmusunnuntai",
            Self::GoodFriday => "Pitkäperjantai",
            Self::EasterSunday => "1. pääsiäispäivä",
            Self::EasterMonday => "2. pääsiäispäivä",
        }
    }
}

/// Palm Sunday, Good Friday, Easter Sunday and Easter Monday of one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FeastSet {
    palm_sunday: CalendarDate,
    good_friday: CalendarDate,
    easter_sunday: CalendarDate,
    easter_monday: CalendarDate,
}

impl FeastSet {
    pub const fn palm_sunday(&self) -> CalendarDate {
        self.palm_sunday
    }

    pub const fn good_friday(&self) -> CalendarDate {
        self.good_friday
    }

    pub const fn easter_sunday(&self) -> CalendarDate {
        self.easter_sunday
    }

    pub const fn easter_monday(&self) -> CalendarDate {
        self.easter_monday
    }

    pub const fn get(&self, feast: Feast) -> CalendarDate {
        match feast {
            Feast::PalmSunday => self.palm_sunday,
            Feast::GoodFriday => self.good_friday,
            Feast::EasterSunday => self.easter_sunday,
            Feast::EasterMonday => self.easter_monday,
        }
    }

    /// Feasts with their dates, earliest first.
    pub fn iter(&self) -> impl Iterator<Item = (Feast, CalendarDate)> + '_ {
        Feast::ALL.into_iter().map(move |feast| (feast, self.get(feast)))
    }
}

/// Derives the feast dates around an Easter Sunday.
///
/// Easter falls between 22 March and 25 April, so every derived date stays
/// in the same year and the derivation cannot fail.
pub fn derive_feast_set(easter_sunday: EasterSunday) -> FeastSet {
    let easter = easter_sunday.date();
    FeastSet {
        palm_sunday: easter.shifted_within_year(Feast::PalmSunday.offset_days()),
        good_friday: easter.shifted_within_year(Feast::GoodFriday.offset_days()),
        easter_sunday: easter,
        easter_monday: easter.shifted_within_year(Feast::EasterMonday.offset_days()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{APRIL, MARCH, Weekday, compute_easter_sunday};

    fn feasts(year: i32) -> FeastSet {
        derive_feast_set(compute_easter_sunday(year).unwrap())
    }

    fn ymd(date: CalendarDate) -> (i32, u8, u8) {
        (date.year(), date.month(), date.day())
    }

    #[test]
    fn test_feasts_2024() {
        let set = feasts(2024);
        assert_eq!(ymd(set.palm_sunday()), (2024, 3, 24));
        assert_eq!(ymd(set.good_friday()), (2024, 3, 29));
        assert_eq!(ymd(set.easter_sunday()), (2024, 3, 31));
        assert_eq!(ymd(set.easter_monday()), (2024, 4, 1));
    }

    #[test]
    fn test_crosses_month_boundary() {
        // Easter on 1 April 2018
        let set = feasts(2018);
        assert_eq!(ymd(set.good_friday()), (2018, 3, 30));
        assert_eq!(ymd(set.palm_sunday()), (2018, 3, 25));

        // Earliest possible Easter, 22 March 1818
        let set = feasts(1818);
        assert_eq!(ymd(set.palm_sunday()), (1818, 3, 15));

        // Easter on 31 March 2024 rolls Monday into April
        assert_eq!(ymd(feasts(2024).easter_monday()), (2024, APRIL, 1));
    }

    #[test]
    fn test_offsets_match_general_day_arithmetic() {
        for year in 1583..=2600 {
            let set = feasts(year);
            let easter = set.easter_sunday();
            for (feast, date) in set.iter() {
                assert_eq!(
                    easter.checked_add_days(feast.offset_days()),
                    Some(date),
                    "{feast} {year}"
                );
            }
        }
    }

    #[test]
    fn test_strictly_increasing_with_fixed_gaps() {
        for year in [-271_820, -1, 0, 1900, 2000, 2024, 2100, 275_760] {
            let set = feasts(year);
            let days: Vec<i64> = set.iter().map(|(_, d)| d.to_epoch_days()).collect();
            assert_eq!(
                days.windows(2).map(|w| w[1] - w[0]).collect::<Vec<_>>(),
                vec![5, 2, 1]
            );
            assert_eq!(days[2] - days[0], 7);
        }
    }

    #[test]
    fn test_palm_sunday_same_weekday_as_easter() {
        for year in (1900..=2100).chain([-271_820, 275_760]) {
            let set = feasts(year);
            assert_eq!(set.palm_sunday().weekday(), Weekday::Sunday);
            assert_eq!(set.easter_sunday().weekday(), Weekday::Sunday);
            assert_eq!(set.good_friday().weekday(), Weekday::Friday);
            assert_eq!(set.easter_monday().weekday(), Weekday::Monday);
        }
    }

    #[test]
    fn test_palm_sunday_never_before_march() {
        for year in 1900..=2100 {
            assert!(feasts(year).palm_sunday().month() >= MARCH);
        }
    }

    #[test]
    fn test_iter_order_and_get() {
        let set = feasts(2000);
        let order: Vec<Feast> = set.iter().map(|(f, _)| f).collect();
        assert_eq!(order, Feast::ALL.to_vec());
        assert_eq!(set.get(Feast::EasterSunday), set.easter_sunday());
        assert_eq!(set.get(Feast::GoodFriday), set.good_friday());
    }

    #[test]
    fn test_feast_names() {
        assert_eq!(Feast::GoodFriday.to_string(), "Good Friday");
        assert_eq!(Feast::PalmSunday.finnish_name(), "Palmusunnuntai");
        assert_eq!(Feast::EasterMonday.finnish_name(), "2. pääsiäispäivä");
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&feasts(2000)).unwrap();
        assert_eq!(
            json,
            r#"{"palm_sunday":"2000-04-16","good_friday":"2000-04-21","easter_sunday":"2000-04-23","easter_monday":"2000-04-24"}"#
        );
    }
}
