#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steer {
    Up,
    Right,
    Down,
    Left,
}

/// Maps a keyboard key code to a steering direction: W/A/S/D or the arrow
/// keys. Every other key is ignored.
pub fn steer_for_key(key_code: u32) -> Option<Steer> {
    match key_code {
        87 | 38 => Some(Steer::Up),    // W, ArrowUp
        68 | 39 => Some(Steer::Right), // D, ArrowRight
        65 | 37 => Some(Steer::Left),  // A, ArrowLeft
        83 | 40 => Some(Steer::Down),  // S, ArrowDown
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wasd_and_arrows_map_to_the_same_steers() {
        assert_eq!(steer_for_key(87), Some(Steer::Up));
        assert_eq!(steer_for_key(38), Some(Steer::Up));
        assert_eq!(steer_for_key(68), Some(Steer::Right));
        assert_eq!(steer_for_key(39), Some(Steer::Right));
        assert_eq!(steer_for_key(65), Some(Steer::Left));
        assert_eq!(steer_for_key(37), Some(Steer::Left));
        assert_eq!(steer_for_key(83), Some(Steer::Down));
        assert_eq!(steer_for_key(40), Some(Steer::Down));
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        assert_eq!(steer_for_key(32), None); // Space.
        assert_eq!(steer_for_key(13), None); // Enter.
    }
}
