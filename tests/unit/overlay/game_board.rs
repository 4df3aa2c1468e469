//! Tests for the value overlay: storage, predicate queries and delegation

#[cfg(test)]
mod tests {
    use gridboard::{
        Board, BoardError, Cell, Direction, GameBoard, SquareBoard, create_game_board,
    };
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::HashMap;
    use std::sync::Arc;

    // Tests a fresh overlay holds no value anywhere
    // Verified by initializing slots with Default::default()
    #[test]
    fn test_new_overlay_is_empty() {
        let board: GameBoard<u8> = create_game_board(4).unwrap();

        for &cell in board.all_cells() {
            assert_eq!(board.get(cell).unwrap(), None);
        }
        assert!(board.all(|value| value.is_none()));
    }

    // Tests set only changes the targeted cell
    // Verified by writing to the transposed position
    #[test]
    fn test_set_affects_only_target() {
        let mut board: GameBoard<char> = create_game_board(3).unwrap();
        let target = board.cell(1, 2).unwrap();

        board.set(target, Some('X')).unwrap();

        assert_eq!(board.get(target).unwrap(), Some(&'X'));
        for &cell in board.all_cells() {
            if cell != target {
                assert_eq!(board.get(cell).unwrap(), None, "cell {cell}");
            }
        }

        board.set(target, None).unwrap();
        assert_eq!(board.get(target).unwrap(), None);
    }

    // Tests writes land on the first and last storage slots
    // Verified by discarding the write when the slot lookup succeeds
    #[test]
    fn test_set_reaches_corner_slots() {
        let mut board: GameBoard<u16> = create_game_board(5).unwrap();
        let first = board.cell(1, 1).unwrap();
        let last = board.cell(5, 5).unwrap();

        board.set(first, Some(1)).unwrap();
        board.set(last, Some(25)).unwrap();

        assert_eq!(board.get(first).unwrap(), Some(&1));
        assert_eq!(board.get(last).unwrap(), Some(&25));
        assert_eq!(board.count(|value| value.is_some()), 2);
    }

    // Tests cells fabricated off the board are rejected
    // Verified by clamping unknown cells onto the board
    #[test]
    fn test_unknown_cell_rejected() {
        let mut board: GameBoard<i32> = create_game_board(2).unwrap();
        let stray = Cell::new(3, 1);

        assert_eq!(
            board.get(stray),
            Err(BoardError::UnknownCell {
                cell: stray,
                width: 2
            })
        );
        assert!(matches!(
            board.set(stray, Some(1)),
            Err(BoardError::UnknownCell { .. })
        ));
    }

    #[test]
    fn test_invalid_width_rejected() {
        for width in [0, -4] {
            assert!(matches!(
                create_game_board::<String>(width),
                Err(BoardError::InvalidWidth { .. })
            ));
        }
    }

    // Tests filter, any and all agree with per-cell predicate evaluation
    // Verified by negating the predicate inside filter
    #[test]
    fn test_queries_match_random_contents() {
        let width = 7;
        let mut board: GameBoard<u32> = create_game_board(width).unwrap();
        let mut expected = HashMap::new();
        let mut rng = StdRng::seed_from_u64(7);

        for &cell in SquareBoard::new(width).unwrap().all_cells() {
            let value = rng.random_bool(0.6).then(|| rng.random_range(0..10));
            board.set(cell, value).unwrap();
            expected.insert(cell, value);
        }

        let is_even = |value: Option<&u32>| value.is_some_and(|v| v % 2 == 0);
        let evens = board.filter(is_even);

        for &cell in board.all_cells() {
            let value = expected.get(&cell).copied().flatten();
            assert_eq!(evens.contains(cell), is_even(value.as_ref()));
        }
        assert_eq!(board.any(is_even), !evens.is_empty());
        assert_eq!(board.count(is_even), evens.len());
        assert_eq!(
            board.all(|value| !is_even(value)),
            evens.is_empty()
        );
    }

    // Tests find returns a matching cell or none
    // Verified by returning the first cell unconditionally
    #[test]
    fn test_find() {
        let mut board: GameBoard<&str> = create_game_board(3).unwrap();
        board.set(Cell::new(2, 3), Some("X")).unwrap();

        assert_eq!(board.find(|value| value == Some(&"X")), Some(Cell::new(2, 3)));
        assert_eq!(board.find(|value| value == Some(&"O")), None);
    }

    #[test]
    fn test_iter_pairs_cells_with_values() {
        let mut board: GameBoard<i32> = create_game_board(2).unwrap();
        board.set(Cell::new(2, 1), Some(5)).unwrap();

        let pairs: Vec<(Cell, Option<i32>)> = board
            .iter()
            .map(|(cell, value)| (cell, value.copied()))
            .collect();

        assert_eq!(
            pairs,
            vec![
                (Cell::new(1, 1), None),
                (Cell::new(1, 2), None),
                (Cell::new(2, 1), Some(5)),
                (Cell::new(2, 2), None),
            ]
        );
    }

    #[test]
    fn test_clear_resets_every_value() {
        let mut board: GameBoard<i32> = create_game_board(3).unwrap();
        for (index, cell) in board.board().all_cells().to_vec().into_iter().enumerate() {
            board.set(cell, Some(index as i32)).unwrap();
        }
        assert!(board.all(|value| value.is_some()));

        board.clear();

        assert!(board.all(|value| value.is_none()));
    }

    // Tests topology queries are forwarded to the wrapped board unchanged
    // Verified by forwarding row to column
    #[test]
    fn test_delegates_topology() {
        let square = SquareBoard::new(4).unwrap();
        let board: GameBoard<u8, &SquareBoard> = GameBoard::new(&square);

        assert_eq!(board.width(), square.width());
        assert_eq!(board.all_cells(), square.all_cells());
        assert_eq!(board.cell_or_none(4, 4), square.cell_or_none(4, 4));
        assert_eq!(board.cell(5, 1), square.cell(5, 1));
        assert_eq!(board.row(2, (1..=4).rev()), square.row(2, (1..=4).rev()));
        assert_eq!(board.column(0..=5, 3), square.column(0..=5, 3));
        for &cell in square.all_cells() {
            for direction in Direction::ALL {
                assert_eq!(
                    board.neighbour(cell, direction),
                    square.neighbour(cell, direction)
                );
            }
        }
    }

    // Tests several overlays can share one board
    // Verified by storing a cloned board inside each overlay
    #[test]
    fn test_overlays_share_board() {
        let shared = Arc::new(SquareBoard::new(3).unwrap());
        let mut letters: GameBoard<char, Arc<SquareBoard>> = GameBoard::new(Arc::clone(&shared));
        let numbers: GameBoard<u8, Arc<SquareBoard>> = GameBoard::new(Arc::clone(&shared));

        letters.set(Cell::new(1, 1), Some('A')).unwrap();

        assert!(std::ptr::eq(letters.board(), numbers.board()));
        assert_eq!(numbers.get(Cell::new(1, 1)).unwrap(), None);
        assert_eq!(Arc::strong_count(&shared), 3);
    }
}
