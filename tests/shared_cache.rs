use std::sync::Arc;
use std::thread;

use taqwim::hijri::{Adjustments, Calendar, HijriDate, TableCache};

#[test]
fn concurrent_calendars_agree() {
    let cache = Arc::new(TableCache::new());
    let adjusted: Adjustments = [(1532, 60382)].into_iter().collect();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let cache = cache.clone();
            let adjustments = if i % 2 == 0 {
                adjusted.clone()
            } else {
                Adjustments::new()
            };
            thread::spawn(move || {
                let calendar = Calendar::with_cache(true, adjustments, cache);
                (i, calendar.day_to_hijri(2460381).unwrap())
            })
        })
        .collect();

    for handle in handles {
        let (i, date) = handle.join().unwrap();
        let expected = if i % 2 == 0 {
            HijriDate::new(1445, 8, 30)
        } else {
            HijriDate::new(1445, 9, 1)
        };
        assert_eq!(expected, date, "thread {i}");
    }
    assert!((2..=8).contains(&cache.rebuilds()));
}

#[test]
fn identical_overlays_share_one_table() {
    let cache = Arc::new(TableCache::new());
    let from_json = Adjustments::from_json(r#"{"1532": 60382}"#);
    let from_pairs: Adjustments = [(1532, 60382)].into_iter().collect();

    let a = Calendar::with_cache(true, from_json, cache.clone());
    let b = Calendar::with_cache(true, from_pairs, cache.clone());

    assert!(Arc::ptr_eq(&a.month_starts(), &b.month_starts()));
    assert_eq!(1, cache.rebuilds());
    for jdn in 2460300..2460500 {
        assert_eq!(a.day_to_hijri(jdn), b.day_to_hijri(jdn));
    }
}

#[test]
fn default_calendars_use_shared_cache() {
    let a = Calendar::default();
    let b = Calendar::new(true, Adjustments::new());
    assert_eq!(*a.month_starts(), *b.month_starts());
    assert_eq!(a.hijri_to_day(1446, 1, 1), b.hijri_to_day(1446, 1, 1));
}
