use super::*;

#[test]
fn win_rate_rounds_down() {
    assert_eq!(CURRENT_SEASON.win_rate_percent(), 71);
    assert_eq!(CURRENT_SEASON.losses(), 4);
}

#[test]
fn win_rate_is_zero_before_first_match() {
    let empty = SeasonStats { matches: 0, wins: 0, pins: 0, takedowns: 0 };
    assert_eq!(empty.win_rate_percent(), 0);
    assert_eq!(empty.losses(), 0);
}

#[test]
fn perfect_season_is_one_hundred_percent() {
    let perfect = SeasonStats { matches: 8, wins: 8, pins: 5, takedowns: 20 };
    assert_eq!(perfect.win_rate_percent(), 100);
}
