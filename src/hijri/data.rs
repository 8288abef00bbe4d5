//! Um Al-Qura month start data.
//!
//! One line per Hijri year from 1318 to 1500, holding the start of each of
//! its twelve months as a modified Julian day (JDN minus
//! [`MJD_OFFSET`](super::MJD_OFFSET)).

use std::num::ParseIntError;
use std::sync::OnceLock;

use super::UM_START_YEAR;

static DATA: OnceLock<Vec<i32>> = OnceLock::new();

static RAW_DATA: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/umalqura.txt"));

/// Returns the unadjusted month starts. Index `0` is month 1 of
/// [`UM_START_YEAR`], index `i` is month `i % 12 + 1` of year
/// `UM_START_YEAR + i / 12`.
pub fn month_starts() -> &'static [i32] {
    DATA.get_or_init(|| {
        parse_raw_data().unwrap_or_else(|e| panic!("error parsing Um Al-Qura data: {:?}", e))
    })
}

fn parse_raw_data() -> Result<Vec<i32>, RawDataError> {
    let mut res = Vec::new();
    let mut expected_year = UM_START_YEAR;
    for (line_num, line) in (1usize..).zip(RAW_DATA.lines()).skip(1) {
        let mut it = line.split_whitespace();
        let year: i32 = match it.next() {
            None => continue,
            Some(s) => s
                .parse()
                .map_err(|e| RawDataError::new(line_num, 1, ErrorType::InvalidInt(e)))?,
        };
        if year != expected_year {
            return Err(RawDataError::new(line_num, 1, ErrorType::UnexpectedYear(year)));
        }
        for field_num in 2..=13 {
            let mjd = it
                .next()
                .ok_or_else(|| RawDataError::new(line_num, field_num, ErrorType::MissingField))?
                .parse()
                .map_err(|e| RawDataError::new(line_num, field_num, ErrorType::InvalidInt(e)))?;
            res.push(mjd);
        }
        expected_year += 1;
    }
    Ok(res)
}

#[derive(Debug)]
#[allow(dead_code)]
struct RawDataError {
    pub line_num: usize,
    pub field_num: usize,
    pub reason: ErrorType,
}

impl RawDataError {
    fn new(line_num: usize, field_num: usize, reason: ErrorType) -> Self {
        Self {
            line_num,
            field_num,
            reason,
        }
    }
}

#[derive(Debug)]
#[allow(dead_code)]
enum ErrorType {
    InvalidInt(ParseIntError),
    UnexpectedYear(i32),
    MissingField,
}
