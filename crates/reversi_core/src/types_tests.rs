use super::*;

#[test]
fn test_inverse_is_an_involution() {
    assert_eq!(Player::Human.inverse(), Player::Machine);
    assert_eq!(Player::Machine.inverse(), Player::Human);
    assert_eq!(Player::Human.inverse().inverse(), Player::Human);
}

#[test]
fn test_direction_deltas_cover_all_neighbors() {
    let mut seen = Vec::new();
    for dir in Direction::ALL {
        let (dr, dc) = dir.delta();
        assert!((-1..=1).contains(&dr) && (-1..=1).contains(&dc));
        assert!((dr, dc) != (0, 0));
        seen.push((dr, dc));
    }
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), 8);
}

#[test]
fn test_symbols() {
    assert_eq!(Player::Human.symbol(), 'X');
    assert_eq!(Player::Machine.symbol(), 'O');
}
