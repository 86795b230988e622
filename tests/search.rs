use maze_solver::{
    map::{Map, Tile},
    parse_map, Direction, Position,
};

fn map(lines: &[&str]) -> Map {
    parse_map(lines.iter().copied()).unwrap()
}

fn markers(map: &Map) -> (Position, Position) {
    (
        map.find_tile(Tile::Start).unwrap(),
        map.find_tile(Tile::Finish).unwrap(),
    )
}

#[test]
fn test_shortest_path_around_rock() {
    let map = map(&["S..", ".0.", "..F"]);
    let (start_pos, finish_pos) = markers(&map);

    let path = map.shortest_path(&start_pos, &finish_pos).unwrap();
    assert_eq!(
        path,
        vec![
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(0, 2),
            Position::new(1, 2),
            Position::new(2, 2),
        ]
    );
}

#[test]
fn test_no_path_when_finish_sealed() {
    let map = map(&["S0F", "000"]);
    let (start_pos, finish_pos) = markers(&map);

    assert_eq!(map.shortest_path(&start_pos, &finish_pos), None);
}

#[test]
fn test_adjacent_markers() {
    let map = map(&["SF"]);
    let (start_pos, finish_pos) = markers(&map);

    let path = map.shortest_path(&start_pos, &finish_pos).unwrap();
    assert_eq!(path, vec![Position::new(0, 0), Position::new(0, 1)]);
}

#[test]
fn test_winding_path_has_minimum_length() {
    let map = map(&["S.0.F", "..0.0", "0...0", "....."]);
    let (start_pos, finish_pos) = markers(&map);

    let path = map.shortest_path(&start_pos, &finish_pos).unwrap();
    assert_eq!(path.len(), 9);
    assert_eq!(path[0], start_pos);
    assert_eq!(*path.last().unwrap(), finish_pos);
    for pair in path.windows(2) {
        assert!(Direction::between(&pair[0], &pair[1]).is_some());
    }
}

#[test]
fn test_same_start_and_finish() {
    let map = map(&["S.F"]);
    let pos = Position::new(0, 1);

    assert_eq!(map.shortest_path(&pos, &pos), Some(vec![pos]));
}

#[test]
fn test_blocked_or_outside_endpoints() {
    let map = map(&["S0F"]);

    let rock_pos = Position::new(0, 1);
    let outside_pos = Position::new(1, 0);
    assert_eq!(
        map.shortest_path(&Position::new(0, 0), &rock_pos),
        None
    );
    assert_eq!(
        map.shortest_path(&outside_pos, &Position::new(0, 2)),
        None
    );
}

#[test]
fn test_searched_covers_reachable_component_on_failure() {
    let map = map(&["S.0F"]);
    let (start_pos, finish_pos) = markers(&map);

    let (path, searched) = map.shortest_path_searched(&start_pos, &finish_pos);
    assert_eq!(path, None);
    assert!(searched.contains(&start_pos));
    assert_eq!(searched.len(), 2);
    assert_eq!(map.render_searched(&searched), "Sx0F");
}

#[test]
fn test_render_searched_keeps_markers_visible() {
    let map = map(&["SF"]);
    let (start_pos, finish_pos) = markers(&map);

    let (path, searched) = map.shortest_path_searched(&start_pos, &finish_pos);
    assert!(path.is_some());
    assert_eq!(map.render_searched(&searched), "SF");
}
