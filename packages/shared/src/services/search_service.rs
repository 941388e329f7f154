use crate::models::filters::SearchFilters;
use crate::models::tournament::Tournament;

/// Keeps the tournaments that satisfy every non-empty criterion, in their
/// original order.
pub fn filter_tournaments(tournaments: &[Tournament], filters: &SearchFilters) -> Vec<Tournament> {
    if filters.is_empty() {
        return tournaments.to_vec();
    }
    tournaments
        .iter()
        .filter(|tournament| filters.matches(tournament))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tournament::TournamentStatus;
    use chrono::Utc;

    fn tournament(id: &str, title: &str, organizer: &str, game: &str) -> Tournament {
        let now = Utc::now();
        Tournament {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            game: game.to_string(),
            format: "Standard".to_string(),
            location: "Downtown Games".to_string(),
            address: "12 Market Street, Springfield".to_string(),
            date: "2026-11-14".to_string(),
            time: "12:00".to_string(),
            max_players: 16,
            entry_fee: 10.0,
            prize_pool: String::new(),
            status: TournamentStatus::Registration,
            organizer_id: "org".to_string(),
            organizer_name: organizer.to_string(),
            registered_players: 0,
            created_at: now,
            updated_at: now,
        }
    }

    fn sample() -> Vec<Tournament> {
        vec![
            tournament("t1", "Spring Open", "Shop A", "Magic: The Gathering"),
            tournament("t2", "Draft Night", "Shop B", "Pokemon TCG"),
        ]
    }

    fn ids(tournaments: &[Tournament]) -> Vec<&str> {
        tournaments.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_empty_filters_return_everything() {
        let list = sample();
        assert_eq!(filter_tournaments(&list, &SearchFilters::default()), list);
    }

    #[test]
    fn test_game_is_exact_match() {
        let filters = SearchFilters {
            game: "Pokemon TCG".to_string(),
            ..Default::default()
        };

        let result = filter_tournaments(&sample(), &filters);
        assert_eq!(ids(&result), vec!["t2"]);

        let partial = SearchFilters {
            game: "Pokemon".to_string(),
            ..Default::default()
        };
        assert!(filter_tournaments(&sample(), &partial).is_empty());
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let filters = SearchFilters {
            query: "open".to_string(),
            ..Default::default()
        };

        let result = filter_tournaments(&sample(), &filters);
        assert_eq!(ids(&result), vec!["t1"]);
    }

    #[test]
    fn test_query_matches_description_and_organizer() {
        let mut list = sample();
        list[1].description = "Booster DRAFT with prizes".to_string();

        let by_organizer = SearchFilters {
            query: "shop a".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_tournaments(&list, &by_organizer)), vec!["t1"]);

        let by_description = SearchFilters {
            query: "prizes".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_tournaments(&list, &by_description)), vec!["t2"]);
    }

    #[test]
    fn test_location_matches_venue_or_address() {
        let mut list = sample();
        list[1].location = "Card Cave".to_string();
        list[1].address = "4 Elm Road, Shelbyville".to_string();

        let by_venue = SearchFilters {
            location: "card cave".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_tournaments(&list, &by_venue)), vec!["t2"]);

        let by_address = SearchFilters {
            location: "SPRINGFIELD".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_tournaments(&list, &by_address)), vec!["t1"]);
    }

    #[test]
    fn test_status_and_format_exact_match() {
        let mut list = sample();
        list[0].status = TournamentStatus::Completed;
        list[1].format = "Sealed".to_string();

        let completed = SearchFilters {
            status: "completed".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_tournaments(&list, &completed)), vec!["t1"]);

        let sealed = SearchFilters {
            format: "Sealed".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_tournaments(&list, &sealed)), vec!["t2"]);
    }

    #[test]
    fn test_criteria_are_combined_with_and() {
        let filters = SearchFilters {
            query: "night".to_string(),
            game: "Magic: The Gathering".to_string(),
            ..Default::default()
        };

        assert!(filter_tournaments(&sample(), &filters).is_empty());
    }

    #[test]
    fn test_filter_preserves_order_and_is_idempotent() {
        let list = vec![
            tournament("t1", "Alpha Open", "Shop A", "Pokemon TCG"),
            tournament("t2", "Beta Cup", "Shop B", "Magic: The Gathering"),
            tournament("t3", "Gamma Open", "Shop C", "Pokemon TCG"),
            tournament("t4", "Delta Open", "Shop D", "Pokemon TCG"),
        ];
        let filters = SearchFilters {
            query: "open".to_string(),
            game: "Pokemon TCG".to_string(),
            ..Default::default()
        };

        let once = filter_tournaments(&list, &filters);
        let twice = filter_tournaments(&once, &filters);

        assert_eq!(ids(&once), vec!["t1", "t3", "t4"]);
        assert_eq!(once, twice);
    }
}
