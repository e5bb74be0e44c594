// Tue Feb 10 2026 - Alex

use crate::decode::{DecodeContext, DecodeError, Decoder, ValueHandle};
use crate::display::Sentinel;

/// Julian day number of 1400-01-01, the posix_time epoch.
const PTIME_EPOCH_JDN: i64 = 2_232_400;
const USEC_PER_DAY: i64 = 86_400_000_000;
const USEC_PER_HOUR: i64 = 3_600_000_000;
const USEC_PER_MINUTE: i64 = 60_000_000;
const USEC_PER_SECOND: i64 = 1_000_000;

/// Day numbers in the top sentinel band encode special date values
/// rather than calendar days.
const SPECIAL_DAY_BASE: u32 = 0xffff_ff00;

/// Civil date from a Julian day number, proleptic Gregorian throughout.
/// The library that produced these day counts applies Gregorian rules all
/// the way back to its 1400-01-01 floor, so no Julian-calendar branch.
pub(crate) fn julian_day_to_ymd(jd: i64) -> (i64, u32, u32) {
    let a = jd + 32_044;
    let b = (4 * a + 3) / 146_097;
    let c = a - 146_097 * b / 4;
    let d = (4 * c + 3) / 1_461;
    let e = c - 1_461 * d / 4;
    let m = (5 * e + 2) / 153;
    let day = e - (153 * m + 2) / 5 + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = 100 * b + d - 4_800 + m / 10;
    (year, month as u32, day as u32)
}

fn format_ymd(jd: i64) -> String {
    let (y, m, d) = julian_day_to_ymd(jd);
    format!("{:04}-{:02}-{:02}", y, m, d)
}

/// `boost::gregorian::date`: a bare u32 Julian day number.
pub struct BoostGregorianDate;

impl Decoder for BoostGregorianDate {
    fn name(&self) -> &'static str {
        "boost::gregorian::date"
    }

    fn decode(&self, ctx: &mut DecodeContext<'_>, value: &ValueHandle) -> Result<(), DecodeError> {
        let day = ctx.reader().read_u32(value.address())?;
        match day {
            0 => ctx.put_sentinel(Sentinel::Uninitialized),
            u32::MAX => ctx.put_sentinel(Sentinel::NotADate),
            d if d == u32::MAX - 1 => ctx.put_sentinel(Sentinel::PosInfinity),
            d if d == u32::MAX - 2 => ctx.put_sentinel(Sentinel::NegInfinity),
            d if d >= SPECIAL_DAY_BASE => ctx.put_sentinel(Sentinel::NotADate),
            d => ctx.put_value(format_ymd(d as i64)),
        }
        Ok(())
    }
}

/// `boost::posix_time::ptime`: i64 microseconds since 1400-01-01.
pub struct BoostPtime;

impl Decoder for BoostPtime {
    fn name(&self) -> &'static str {
        "boost::posix_time::ptime"
    }

    fn decode(&self, ctx: &mut DecodeContext<'_>, value: &ValueHandle) -> Result<(), DecodeError> {
        let usec = ctx.reader().read_i64(value.address())?;
        match usec {
            i64::MAX => ctx.put_sentinel(Sentinel::NotADate),
            v if v == i64::MAX - 1 => ctx.put_sentinel(Sentinel::PosInfinity),
            i64::MIN => ctx.put_sentinel(Sentinel::NegInfinity),
            v if v < 0 => ctx.put_sentinel(Sentinel::Invalid),
            v => {
                let days = v / USEC_PER_DAY;
                let mut rem = v % USEC_PER_DAY;
                let (y, m, d) = julian_day_to_ymd(PTIME_EPOCH_JDN + days);
                let hours = rem / USEC_PER_HOUR;
                rem %= USEC_PER_HOUR;
                let minutes = rem / USEC_PER_MINUTE;
                rem %= USEC_PER_MINUTE;
                let seconds = rem / USEC_PER_SECOND;
                let micros = rem % USEC_PER_SECOND;
                ctx.put_value(format!(
                    "{:04}-{:02}-{:02} {:02}:{:02}:{:02}.{:06}",
                    y, m, d, hours, minutes, seconds, micros
                ));
            }
        }
        Ok(())
    }
}

/// `boost::posix_time::time_duration`: i64 microsecond tick count.
pub struct BoostTimeDuration;

impl Decoder for BoostTimeDuration {
    fn name(&self) -> &'static str {
        "boost::posix_time::time_duration"
    }

    fn decode(&self, ctx: &mut DecodeContext<'_>, value: &ValueHandle) -> Result<(), DecodeError> {
        let ticks = ctx.reader().read_i64(value.address())?;
        match ticks {
            i64::MAX => {
                ctx.put_sentinel(Sentinel::NotADate);
                return Ok(());
            }
            v if v == i64::MAX - 1 => {
                ctx.put_sentinel(Sentinel::PosInfinity);
                return Ok(());
            }
            i64::MIN => {
                ctx.put_sentinel(Sentinel::NegInfinity);
                return Ok(());
            }
            _ => {}
        }
        let sign = if ticks < 0 { "-" } else { "" };
        let abs = ticks.unsigned_abs() as i64;
        let hours = abs / USEC_PER_HOUR;
        let minutes = abs % USEC_PER_HOUR / USEC_PER_MINUTE;
        let seconds = abs % USEC_PER_MINUTE / USEC_PER_SECOND;
        let micros = abs % USEC_PER_SECOND;
        ctx.put_value(format!(
            "{}{:02}:{:02}:{:02}.{:06}",
            sign, hours, minutes, seconds, micros
        ));
        Ok(())
    }
}
