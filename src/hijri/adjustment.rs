//! Corrections to the Um Al-Qura table, and the merged table they produce.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{MJD_OFFSET, UM_START_YEAR, data};
use crate::error::CalendarError;

/// Caller-supplied corrections to the Um Al-Qura month starts.
///
/// Keys are month indexes counted from month 1 of [`UM_START_YEAR`], values
/// are the corrected month start as a modified Julian day (JDN minus
/// [`MJD_OFFSET`]).
///
/// Deserializes from a JSON object (`{"1526": 46473}`), a JSON array (index
/// is the position), or a string holding either of them. Input that cannot
/// be decoded yields an empty overlay, never an error.
///
/// # Example
///
/// ```
/// use taqwim::hijri::Adjustments;
///
/// let adj = Adjustments::from_json(r#"{"1526": 46473}"#);
/// assert_eq!(Some(46473), adj.get(1526));
///
/// assert!(Adjustments::from_json("not json").is_empty());
/// ```
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(from = "RawAdjustments", into = "BTreeMap<usize, i32>")]
pub struct Adjustments {
    entries: BTreeMap<usize, i32>,
}

impl Adjustments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes adjustments serialized as JSON. Undecodable text gives an
    /// empty overlay.
    pub fn from_json(text: &str) -> Self {
        match serde_json::from_str::<RawAdjustments>(text) {
            Ok(RawAdjustments::Text(_)) => {
                warn!("Nested adjustment text ignored");
                Self::default()
            }
            Ok(raw) => raw.into(),
            Err(e) => {
                warn!(error = %e, "Undecodable adjustment data ignored");
                Self::default()
            }
        }
    }
    /// Serializes to the JSON object form accepted by [`Adjustments::from_json`].
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.entries).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    /// Returns the corrected start of the month at `index`, if any.
    pub fn get(&self, index: usize) -> Option<i32> {
        self.entries.get(&index).copied()
    }
    pub fn iter(&self) -> impl Iterator<Item = (usize, i32)> + '_ {
        self.entries.iter().map(|(&i, &mjd)| (i, mjd))
    }

    /// Sets the start of a month by raw table index, returning the previous
    /// correction if there was one.
    pub fn insert(&mut self, index: usize, mjd: i32) -> Option<i32> {
        self.entries.insert(index, mjd)
    }
    /// Sets the start of Hijri `month` of `year` to the Julian day `jdn`.
    ///
    /// ```
    /// use taqwim::hijri::Adjustments;
    ///
    /// let mut adj = Adjustments::new();
    /// adj.set_month_start(1445, 9, 2460382).unwrap();
    /// assert_eq!(Some(60382), adj.get(1532));
    /// ```
    pub fn set_month_start(
        &mut self,
        year: i32,
        month: u32,
        jdn: i64,
    ) -> Result<(), CalendarError> {
        let index = i64::from(month) - 1 + 12 * (i64::from(year) - i64::from(UM_START_YEAR));
        let out_of_table = CalendarError::OutOfTable { index };
        let index = usize::try_from(index).map_err(|_| out_of_table)?;
        let mjd = i32::try_from(jdn - MJD_OFFSET).map_err(|_| out_of_table)?;
        self.entries.insert(index, mjd);
        Ok(())
    }
}

impl From<BTreeMap<usize, i32>> for Adjustments {
    fn from(entries: BTreeMap<usize, i32>) -> Self {
        Self { entries }
    }
}

impl From<Adjustments> for BTreeMap<usize, i32> {
    fn from(adj: Adjustments) -> Self {
        adj.entries
    }
}

impl FromIterator<(usize, i32)> for Adjustments {
    fn from_iter<I: IntoIterator<Item = (usize, i32)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Every shape adjustment data may arrive in.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAdjustments {
    Map(BTreeMap<String, i64>),
    List(Vec<i64>),
    Text(String),
    Other(serde::de::IgnoredAny),
}

impl From<RawAdjustments> for Adjustments {
    fn from(raw: RawAdjustments) -> Self {
        match raw {
            RawAdjustments::Map(map) => map
                .into_iter()
                .filter_map(|(key, value)| match (key.trim().parse(), i32::try_from(value)) {
                    (Ok(index), Ok(mjd)) => Some((index, mjd)),
                    _ => {
                        warn!(key = %key, value, "Malformed adjustment entry dropped");
                        None
                    }
                })
                .collect(),
            RawAdjustments::List(list) => (0..)
                .zip(list)
                .filter_map(|(index, value)| match i32::try_from(value) {
                    Ok(mjd) => Some((index, mjd)),
                    Err(_) => {
                        warn!(index, value, "Malformed adjustment entry dropped");
                        None
                    }
                })
                .collect(),
            RawAdjustments::Text(text) => Self::from_json(&text),
            RawAdjustments::Other(_) => {
                warn!("Unrecognized adjustment data ignored");
                Self::default()
            }
        }
    }
}

/// Um Al-Qura month starts with [`Adjustments`] applied.
///
/// Entry `i` is the modified Julian day starting month `i % 12 + 1` of year
/// `UM_START_YEAR + i / 12`. Corrections replace base entries; a correction
/// right past the end extends the table, one further away stays addressable
/// by [`MonthStarts::get`] but is not searched.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MonthStarts {
    starts: Vec<i32>,
    detached: BTreeMap<usize, i32>,
}

impl MonthStarts {
    /// The table without any correction.
    pub fn base() -> Self {
        Self {
            starts: data::month_starts().to_vec(),
            detached: BTreeMap::new(),
        }
    }

    /// Copies the base table and applies `adjustments` to it.
    pub fn merged(adjustments: &Adjustments) -> Self {
        let mut table = Self::base();
        for (index, mjd) in adjustments.iter() {
            match index.cmp(&table.starts.len()) {
                std::cmp::Ordering::Less => table.starts[index] = mjd,
                std::cmp::Ordering::Equal => table.starts.push(mjd),
                std::cmp::Ordering::Greater => {
                    table.detached.insert(index, mjd);
                }
            }
        }
        if !table.starts.windows(2).all(|w| w[0] < w[1]) {
            warn!("Adjusted Um Al-Qura table is not strictly increasing");
        }
        table
    }

    /// Returns the month start at `index`.
    pub fn get(&self, index: usize) -> Option<i32> {
        self.starts
            .get(index)
            .copied()
            .or_else(|| self.detached.get(&index).copied())
    }

    /// Number of contiguous entries from index `0`.
    pub fn len(&self) -> usize {
        self.starts.len()
    }
    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }
    /// The contiguous entries from index `0`.
    pub fn as_slice(&self) -> &[i32] {
        &self.starts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_object() {
        let adj = Adjustments::from_json(r#"{"0": 15141, "12": 15495, " 7 ": 15318}"#);
        assert_eq!(3, adj.len());
        assert_eq!(Some(15141), adj.get(0));
        assert_eq!(Some(15495), adj.get(12));
        assert_eq!(Some(15318), adj.get(7));
    }

    #[test]
    fn parse_array() {
        let adj = Adjustments::from_json("[15141, 15170]");
        assert_eq!(Some(15141), adj.get(0));
        assert_eq!(Some(15170), adj.get(1));
    }

    #[test]
    fn malformed_is_empty() {
        for text in ["", "{", "42", "null", r#"{"a": "b"}"#, r#""{\"1\": 2}""#] {
            assert!(Adjustments::from_json(text).is_empty(), "{text}");
        }
    }

    #[test]
    fn malformed_entries_dropped() {
        let adj = Adjustments::from_json(r#"{"x": 1, "-1": 2, "3": 99999999999, "4": 15258}"#);
        assert_eq!(vec![(4, 15258)], adj.iter().collect::<Vec<_>>());
    }

    #[test]
    fn json_round_trip() {
        let adj: Adjustments = [(5, 15288), (2000, 74000)].into_iter().collect();
        assert_eq!(r#"{"5":15288,"2000":74000}"#, adj.to_json());
        assert_eq!(adj, Adjustments::from_json(&adj.to_json()));
    }

    #[test]
    fn set_month_start() {
        let mut adj = Adjustments::new();
        adj.set_month_start(1318, 1, 2415141).unwrap();
        assert_eq!(Some(15141), adj.get(0));
        assert_eq!(
            Err(CalendarError::OutOfTable { index: -1 }),
            adj.set_month_start(1317, 12, 2415111)
        );
    }

    #[test]
    fn merge_replaces() {
        let base = MonthStarts::base();
        let adj: Adjustments = [(1, 15170)].into_iter().collect();
        let merged = MonthStarts::merged(&adj);
        assert_eq!(base.len(), merged.len());
        assert_eq!(Some(15169), base.get(1));
        assert_eq!(Some(15170), merged.get(1));
        assert_eq!(base.get(2), merged.get(2));
        assert_eq!(15169, data::month_starts()[1]);
    }

    #[test]
    fn merge_extends() {
        let len = MonthStarts::base().len();
        let adj: Adjustments = [(len, 79990), (len + 1, 80019), (len + 5, 80137)]
            .into_iter()
            .collect();
        let merged = MonthStarts::merged(&adj);
        assert_eq!(len + 2, merged.len());
        assert_eq!(Some(80019), merged.get(len + 1));
        assert_eq!(None, merged.get(len + 2));
        assert_eq!(Some(80137), merged.get(len + 5));
    }
}
