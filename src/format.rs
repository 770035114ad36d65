use crate::{CalendarDate, FeastSet, MAX_MONTH, Month};

/// A table of twelve month names, January first.
///
/// The table length is fixed by the type, and a month always indexes it at
/// `month - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthNames([&'static str; MAX_MONTH as usize]);

impl MonthNames {
    /// Finnish month names in the genitive, as used after a day number
    pub const FINNISH: Self = Self([
        "tammikuuta",
        "helmikuuta",
        "maaliskuuta",
        "huhtikuuta",
        "toukokuuta",
        "kesäkuuta",
        "heinäkuuta",
        "elokuuta",
        "syyskuuta",
        "lokakuuta",
        "marraskuuta",
        "joulukuuta",
    ]);

    pub const ENGLISH: Self = Self([
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ]);

    pub const fn new(names: [&'static str; MAX_MONTH as usize]) -> Self {
        Self(names)
    }

    pub const fn name(&self, month: Month) -> &'static str {
        self.0[month.index0()]
    }
}

impl Default for MonthNames {
    fn default() -> Self {
        Self::FINNISH
    }
}

/// Formats a date as `<day>. <month-name> <year>`, e.g. `31. maaliskuuta 2024`.
pub fn format_date(date: CalendarDate, names: &MonthNames) -> String {
    format!(
        "{}. {} {}",
        date.day(),
        names.name(date.month_typed()),
        date.year()
    )
}

/// Title line for the Easter feasts of a year.
pub fn heading(year: i32) -> String {
    format!("Pääsiäinen vuonna {year}")
}

/// One `<feast>: <date>` line per feast, earliest first, with Finnish labels.
pub fn format_feast_set(set: &FeastSet, names: &MonthNames) -> Vec<String> {
    set.iter()
        .map(|(feast, date)| format!("{}: {}", feast.finnish_name(), format_date(date, names)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{compute_easter_sunday, derive_feast_set};

    fn date(y: i32, m: u8, d: u8) -> CalendarDate {
        CalendarDate::from_parts(y, m, d).unwrap()
    }

    #[test]
    fn test_format_date_finnish() {
        let names = MonthNames::FINNISH;
        assert_eq!(format_date(date(2024, 3, 31), &names), "31. maaliskuuta 2024");
        assert_eq!(format_date(date(2000, 1, 1), &names), "1. tammikuuta 2000");
        assert_eq!(format_date(date(1999, 12, 24), &names), "24. joulukuuta 1999");
    }

    #[test]
    fn test_format_date_english_and_custom() {
        assert_eq!(
            format_date(date(2000, 4, 23), &MonthNames::ENGLISH),
            "23. April 2000"
        );
        let roman = MonthNames::new([
            "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII",
        ]);
        assert_eq!(format_date(date(2100, 3, 28), &roman), "28. III 2100");
    }

    #[test]
    fn test_format_negative_year() {
        assert_eq!(
            format_date(date(-44, 3, 15), &MonthNames::ENGLISH),
            "15. March -44"
        );
    }

    #[test]
    fn test_every_month_has_a_name() {
        for m in 1..=MAX_MONTH {
            let month = Month::new(m).unwrap();
            assert!(!MonthNames::FINNISH.name(month).is_empty());
            assert!(!MonthNames::ENGLISH.name(month).is_empty());
        }
        assert_eq!(MonthNames::FINNISH.name(Month::new(4).unwrap()), "huhtikuuta");
        assert_eq!(MonthNames::default(), MonthNames::FINNISH);
    }

    #[test]
    fn test_format_feast_set() {
        let set = derive_feast_set(compute_easter_sunday(2024).unwrap());
        assert_eq!(
            format_feast_set(&set, &MonthNames::FINNISH),
            vec![
                "Palmusunnuntai: 24. maaliskuuta 2024",
                "Pitkäperjantai: 29. maaliskuuta 2024",
                "1. pääsiäispäivä: 31. maaliskuuta 2024",
                "2. pääsiäispäivä: 1. huhtikuuta 2024",
            ]
        );
    }

    #[test]
    fn test_heading() {
        assert_eq!(heading(2024), "Pääsiäinen vuonna 2024");
    }
}
