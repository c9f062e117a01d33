use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{Bounds, GameConfig};
use crate::sprite::{Sprite, SpriteKind};

const PLACEMENT_ATTEMPTS_PER_CHEST: u32 = 64;

pub fn build_walls(config: &GameConfig) -> Vec<Sprite> {
    config
        .walls
        .iter()
        .flat_map(|run| run.positions())
        .map(|(x, y)| Sprite::from_def(SpriteKind::Wall, &config.sprites.wall).at(x, y))
        .collect()
}

/// The open floor inside the walls, or the first screen when there are none.
pub fn play_area(config: &GameConfig, walls: &[Sprite]) -> Bounds {
    let mut edges = walls.iter().map(|w| w.hit_box());
    let Some(first) = edges.next() else {
        return Bounds {
            left: 0.0,
            right: config.screen.width as f32,
            bottom: 0.0,
            top: config.screen.height as f32,
        };
    };
    let (mut min_x, mut max_x, mut min_y, mut max_y) =
        (first.right(), first.left(), first.top(), first.bottom());
    for aabb in edges {
        min_x = min_x.min(aabb.right());
        max_x = max_x.max(aabb.left());
        min_y = min_y.min(aabb.top());
        max_y = max_y.max(aabb.bottom());
    }
    Bounds {
        left: min_x,
        right: max_x,
        bottom: min_y,
        top: max_y,
    }
}

/// Scatter `chest_count` chests over the play area, clear of walls, of each
/// other, and of `keep_clear` (the player's spawn).
pub fn place_chests(config: &GameConfig, walls: &[Sprite], keep_clear: &Sprite) -> Vec<Sprite> {
    let mut rng = match config.chest_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let def = &config.sprites.chest;
    let area = play_area(config, walls);
    let half_w = def.width * 0.5;
    let half_h = def.height * 0.5;
    let (x_min, x_max) = (area.left + half_w, area.right - half_w);
    let (y_min, y_max) = (area.bottom + half_h, area.top - half_h);
    if x_min >= x_max || y_min >= y_max {
        log::warn!("Play area is too small to hold a chest; no chests placed");
        return Vec::new();
    }

    let mut chests: Vec<Sprite> = Vec::new();
    for _ in 0..config.chest_count {
        let placed = (0..PLACEMENT_ATTEMPTS_PER_CHEST).find_map(|_| {
            let candidate = Sprite::from_def(SpriteKind::Chest, def)
                .at(rng.gen_range(x_min..x_max), rng.gen_range(y_min..y_max));
            let blocked = candidate.collides_with(keep_clear)
                || walls.iter().any(|w| candidate.collides_with(w))
                || chests.iter().any(|c| candidate.collides_with(c));
            (!blocked).then_some(candidate)
        });
        match placed {
            Some(chest) => chests.push(chest),
            None => {
                log::warn!(
                    "Could only place {} of {} chests",
                    chests.len(),
                    config.chest_count
                );
                break;
            }
        }
    }
    log::debug!("Placed {} chests", chests.len());
    chests
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn(config: &GameConfig) -> Sprite {
        Sprite::from_def(SpriteKind::Player, &config.sprites.player).at(400.0, 300.0)
    }

    #[test]
    fn stock_walls_enclose_the_start_screen() {
        let config = GameConfig::default();
        let walls = build_walls(&config);
        assert_eq!(walls.len(), 76);

        let area = play_area(&config, &walls);
        assert_eq!(area.left, -668.0);
        assert_eq!(area.right, 1668.0);
        assert_eq!(area.bottom, -268.0);
        assert_eq!(area.top, 993.0);
        assert!(area.contains(400.0, 300.0));
    }

    #[test]
    fn chests_are_inside_and_clear_of_everything() {
        let config = GameConfig {
            chest_seed: Some(7),
            ..GameConfig::default()
        };
        let walls = build_walls(&config);
        let player = spawn(&config);
        let chests = place_chests(&config, &walls, &player);
        let area = play_area(&config, &walls);

        assert_eq!(chests.len(), 10);
        for (i, chest) in chests.iter().enumerate() {
            assert!(chest.left() >= area.left && chest.right() <= area.right);
            assert!(chest.bottom() >= area.bottom && chest.top() <= area.top);
            assert!(!chest.collides_with(&player));
            assert!(walls.iter().all(|w| !chest.collides_with(w)));
            assert!(chests[i + 1..].iter().all(|c| !chest.collides_with(c)));
        }
    }

    #[test]
    fn seeded_placement_is_repeatable() {
        let config = GameConfig {
            chest_seed: Some(1234),
            ..GameConfig::default()
        };
        let walls = build_walls(&config);
        let player = spawn(&config);
        assert_eq!(
            place_chests(&config, &walls, &player),
            place_chests(&config, &walls, &player)
        );
    }

    #[test]
    fn no_walls_uses_the_first_screen() {
        let config = GameConfig {
            walls: Vec::new(),
            chest_count: 3,
            chest_seed: Some(3),
            ..GameConfig::default()
        };
        let area = play_area(&config, &[]);
        assert_eq!((area.left, area.right), (0.0, 800.0));
        let chests = place_chests(&config, &[], &spawn(&config));
        assert_eq!(chests.len(), 3);
    }

    #[test]
    fn crowded_area_places_what_fits() {
        let mut config = GameConfig {
            walls: Vec::new(),
            chest_count: 50,
            chest_seed: Some(9),
            ..GameConfig::default()
        };
        config.screen.width = 100;
        config.screen.height = 100;
        let keep_clear = Sprite::new(SpriteKind::Player, 1.0, 1.0).at(-500.0, -500.0);
        let chests = place_chests(&config, &[], &keep_clear);
        // A 100x100 floor cannot hold more than four 48x40 chests.
        assert!(chests.len() <= 4);
        assert!(!chests.is_empty());
    }

    #[test]
    fn huge_chest_count_stops_once_the_floor_is_full() {
        let mut config = GameConfig {
            walls: Vec::new(),
            chest_count: u32::MAX,
            chest_seed: Some(5),
            ..GameConfig::default()
        };
        config.screen.width = 100;
        config.screen.height = 100;
        let keep_clear = Sprite::new(SpriteKind::Player, 1.0, 1.0).at(-500.0, -500.0);
        let chests = place_chests(&config, &[], &keep_clear);
        assert!(chests.len() <= 4);
    }
}
