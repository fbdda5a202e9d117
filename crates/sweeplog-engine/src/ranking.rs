//! Rank rooms by how often they were cleaned

use crate::history::HistoryIndex;
use std::cmp::Ordering;

/// A room and the number of cleaning events recorded for it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomFrequency<'a> {
    /// Room id
    pub room_id: &'a str,
    /// Number of cleaning events
    pub count: usize,
}

impl RoomFrequency<'_> {
    /// Most cleanings first, then ascending room id
    pub fn ranking_order(&self, other: &Self) -> Ordering {
        other
            .count
            .cmp(&self.count)
            .then_with(|| self.room_id.cmp(other.room_id))
    }
}

/// Every room in the index, ordered by event count descending
///
/// Ties are broken by ascending room id, which makes the order total.
pub fn rank_by_frequency<'a>(index: &HistoryIndex<'a>) -> Vec<RoomFrequency<'a>> {
    let mut ranking: Vec<RoomFrequency<'a>> = index
        .iter()
        .map(|(room_id, events)| RoomFrequency {
            room_id,
            count: events.len(),
        })
        .collect();
    ranking.sort_by(RoomFrequency::ranking_order);
    ranking
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweeplog_domain::{parse_timestamp, CleaningEvent, Room};

    fn fixture() -> (Vec<Room>, Vec<CleaningEvent>) {
        let rooms = ["Office", "Kitchen", "Foyer", "Attic"]
            .iter()
            .map(|id| Room::new(*id, 5, 5).unwrap())
            .collect();
        let events = [
            ("Kitchen", "05/01/2021 10:00:00"),
            ("Office", "05/02/2021 10:00:00"),
            ("Kitchen", "05/03/2021 10:00:00"),
            ("Foyer", "05/04/2021 10:00:00"),
            ("Office", "05/05/2021 10:00:00"),
            ("Kitchen", "05/06/2021 10:00:00"),
        ]
        .iter()
        .map(|(id, ts)| CleaningEvent::new(*id, parse_timestamp(ts).unwrap(), 100.0).unwrap())
        .collect();
        (rooms, events)
    }

    #[test]
    fn test_ranking_order() {
        let (rooms, events) = fixture();
        let index = HistoryIndex::build(&rooms, &events);
        let ranking = rank_by_frequency(&index);

        let pairs: Vec<(&str, usize)> = ranking.iter().map(|r| (r.room_id, r.count)).collect();
        assert_eq!(
            pairs,
            vec![("Kitchen", 3), ("Office", 2), ("Foyer", 1), ("Attic", 0)]
        );
    }

    #[test]
    fn test_ties_broken_by_id() {
        let rooms: Vec<Room> = ["Office", "Kitchen"]
            .iter()
            .map(|id| Room::new(*id, 5, 5).unwrap())
            .collect();
        let events = vec![
            CleaningEvent::new("Office", parse_timestamp("01/02/2021 10:00:00").unwrap(), 100.0)
                .unwrap(),
            CleaningEvent::new("Kitchen", parse_timestamp("01/01/2021 08:00:00").unwrap(), 50.0)
                .unwrap(),
        ];
        let index = HistoryIndex::build(&rooms, &events);
        let ids: Vec<&str> = rank_by_frequency(&index).iter().map(|r| r.room_id).collect();
        assert_eq!(ids, vec!["Kitchen", "Office"]);
    }

    #[test]
    fn test_empty_index() {
        let index = HistoryIndex::build(&[], &[]);
        assert!(rank_by_frequency(&index).is_empty());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: adjacent ranked entries are correctly ordered
        #[test]
        fn test_ranking_is_sorted(
            counts in proptest::collection::btree_map("[a-z]{1,4}", 0usize..6, 0..10),
        ) {
            let mut ranking: Vec<RoomFrequency> = counts
                .iter()
                .map(|(id, count)| RoomFrequency { room_id: id.as_str(), count: *count })
                .collect();
            ranking.sort_by(RoomFrequency::ranking_order);

            for pair in ranking.windows(2) {
                prop_assert!(
                    pair[0].count > pair[1].count
                        || (pair[0].count == pair[1].count && pair[0].room_id < pair[1].room_id)
                );
            }
        }
    }
}
