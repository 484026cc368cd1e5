use serde::{Serialize, Serializer};
use serde::ser::SerializeStruct;

pub const UNKNOWN_SIGN: &str = "Unknown";

/// A (month, day) calendar boundary, both ends inclusive.
pub type MonthDay = (u32, u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZodiacSign {
    Capricorn,
    Aquarius,
    Pisces,
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
}

impl ZodiacSign {
    /// Scan order. Capricorn comes first so early January resolves to it.
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            ZodiacSign::Capricorn => "♑",
            ZodiacSign::Aquarius => "♒",
            ZodiacSign::Pisces => "♓",
            ZodiacSign::Aries => "♈",
            ZodiacSign::Taurus => "♉",
            ZodiacSign::Gemini => "♊",
            ZodiacSign::Cancer => "♋",
            ZodiacSign::Leo => "♌",
            ZodiacSign::Virgo => "♍",
            ZodiacSign::Libra => "♎",
            ZodiacSign::Scorpio => "♏",
            ZodiacSign::Sagittarius => "♐",
        }
    }

    pub fn start(self) -> MonthDay {
        self.range().0
    }

    pub fn end(self) -> MonthDay {
        self.range().1
    }

    fn range(self) -> (MonthDay, MonthDay) {
        match self {
            ZodiacSign::Capricorn => ((12, 22), (1, 19)),
            ZodiacSign::Aquarius => ((1, 20), (2, 18)),
            ZodiacSign::Pisces => ((2, 19), (3, 20)),
            ZodiacSign::Aries => ((3, 21), (4, 19)),
            ZodiacSign::Taurus => ((4, 20), (5, 20)),
            ZodiacSign::Gemini => ((5, 21), (6, 20)),
            ZodiacSign::Cancer => ((6, 21), (7, 22)),
            ZodiacSign::Leo => ((7, 23), (8, 22)),
            ZodiacSign::Virgo => ((8, 23), (9, 22)),
            ZodiacSign::Libra => ((9, 23), (10, 22)),
            ZodiacSign::Scorpio => ((10, 23), (11, 21)),
            ZodiacSign::Sagittarius => ((11, 22), (12, 21)),
        }
    }

    /// Human readable range, e.g. "Mar 21 - Apr 19".
    pub fn date_range_label(self) -> String {
        let (start, end) = self.range();
        format!(
            "{} {} - {} {}",
            short_month(start.0),
            start.1,
            short_month(end.0),
            end.1
        )
    }

    /// Whether (month, day) lies in this sign's half of its start month or
    /// its half of its end month. This also covers Capricorn, whose start
    /// month is later in the year than its end month.
    pub fn contains(self, month: u32, day: u32) -> bool {
        let ((start_month, start_day), (end_month, end_day)) = self.range();
        (month == start_month && day >= start_day) || (month == end_month && day <= end_day)
    }

    /// Out-of-range months never match. Days are not validated.
    pub fn for_date(month: u32, day: u32) -> Option<ZodiacSign> {
        Self::ALL.iter().copied().find(|sign| sign.contains(month, day))
    }
}

impl std::fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for ZodiacSign {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ZodiacSign", 4)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("symbol", self.symbol())?;
        state.serialize_field("start", &self.start())?;
        state.serialize_field("end", &self.end())?;
        state.end()
    }
}

/// Name of the sign for the date, or "Unknown".
pub fn zodiac_sign_name(month: u32, day: u32) -> &'static str {
    ZodiacSign::for_date(month, day)
        .map(ZodiacSign::name)
        .unwrap_or(UNKNOWN_SIGN)
}

fn short_month(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "?",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_inclusive_for_every_sign() {
        for sign in ZodiacSign::ALL {
            let (start_month, start_day) = sign.start();
            let (end_month, end_day) = sign.end();
            assert_eq!(zodiac_sign_name(start_month, start_day), sign.name());
            assert_eq!(zodiac_sign_name(end_month, end_day), sign.name());
        }
    }

    #[test]
    fn inner_days_resolve() {
        let cases = [
            (1, 10, "Capricorn"),
            (2, 1, "Aquarius"),
            (3, 1, "Pisces"),
            (4, 1, "Aries"),
            (5, 1, "Taurus"),
            (6, 1, "Gemini"),
            (7, 1, "Cancer"),
            (8, 1, "Leo"),
            (9, 1, "Virgo"),
            (10, 1, "Libra"),
            (11, 1, "Scorpio"),
            (12, 1, "Sagittarius"),
        ];
        for (month, day, expected) in cases {
            assert_eq!(zodiac_sign_name(month, day), expected, "{month}/{day}");
        }
    }

    #[test]
    fn day_after_each_end_belongs_to_next_sign() {
        assert_eq!(zodiac_sign_name(2, 19), "Pisces");
        assert_eq!(zodiac_sign_name(4, 20), "Taurus");
        assert_eq!(zodiac_sign_name(8, 23), "Virgo");
        assert_eq!(zodiac_sign_name(12, 22), "Capricorn");
    }

    #[test]
    fn capricorn_wraps_the_new_year() {
        assert_eq!(zodiac_sign_name(12, 25), "Capricorn");
        assert_eq!(zodiac_sign_name(1, 5), "Capricorn");
        assert_eq!(zodiac_sign_name(1, 20), "Aquarius");
        assert_eq!(ZodiacSign::for_date(12, 31), Some(ZodiacSign::Capricorn));
    }

    #[test]
    fn out_of_range_month_is_unknown() {
        assert_eq!(zodiac_sign_name(13, 1), UNKNOWN_SIGN);
        assert_eq!(zodiac_sign_name(0, 15), UNKNOWN_SIGN);
        assert_eq!(ZodiacSign::for_date(13, 1), None);
    }

    #[test]
    fn days_are_not_validated() {
        assert_eq!(zodiac_sign_name(2, 40), "Pisces");
        assert_eq!(zodiac_sign_name(1, 0), "Capricorn");
    }

    #[test]
    fn displays_as_its_name() {
        assert_eq!(ZodiacSign::Aries.to_string(), "Aries");
    }

    #[test]
    fn range_label() {
        assert_eq!(ZodiacSign::Aries.date_range_label(), "Mar 21 - Apr 19");
        assert_eq!(ZodiacSign::Capricorn.date_range_label(), "Dec 22 - Jan 19");
    }
}
