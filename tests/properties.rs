//! Property tests over random boards and shuffles.

use std::collections::{HashSet, VecDeque};

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use sliding_tiles::{resolve, shuffle, Board, SearchConfig, SearchEngine};

/// Any permutation of a 3x3 board, solvable or not.
fn permutation_strategy() -> impl Strategy<Value = Board> {
    Just((0..9u32).collect::<Vec<_>>())
        .prop_shuffle()
        .prop_map(|cells| Board::new(cells.chunks(3).map(<[u32]>::to_vec).collect()).unwrap())
}

fn shuffled(size: usize, steps: usize, seed: u64) -> Board {
    let mut rng = StdRng::seed_from_u64(seed);
    shuffle(&Board::goal(size), steps, &mut rng)
}

/// Shortest solution length by plain breadth-first search.
fn bfs_distance(start: &Board) -> usize {
    let mut seen = HashSet::from([start.clone()]);
    let mut queue = VecDeque::from([(start.clone(), 0)]);

    while let Some((board, depth)) = queue.pop_front() {
        if board.is_goal() {
            return depth;
        }
        for (_, next) in board.legal_moves() {
            if seen.insert(next.clone()) {
                queue.push_back((next, depth + 1));
            }
        }
    }

    panic!("goal unreachable from {start}");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every legal move swaps the blank with an adjacent tile and is undone
    /// by its opposite.
    #[test]
    fn prop_moves_swap_blank_with_neighbour(
        size in 2..=5usize,
        steps in 0..60usize,
        seed in any::<u64>(),
    ) {
        let board = shuffled(size, steps, seed);
        let moves = board.legal_moves();
        prop_assert!((2..=4).contains(&moves.len()));

        let tags: HashSet<_> = moves.iter().map(|(mv, _)| *mv).collect();
        prop_assert_eq!(tags.len(), moves.len());

        let (row, col) = board.blank();
        for (mv, next) in &moves {
            let (r, c) = next.blank();
            prop_assert_eq!(row.abs_diff(r) + col.abs_diff(c), 1);

            let changed = board
                .cells()
                .iter()
                .zip(next.cells())
                .filter(|(a, b)| a != b)
                .count();
            prop_assert_eq!(changed, 2);
            prop_assert_eq!(next.get(row, col), board.get(r, c));

            prop_assert_eq!(next.apply(mv.opposite()), Some(board.clone()));
        }
    }

    #[test]
    fn prop_heuristic_zero_iff_goal(board in permutation_strategy()) {
        prop_assert_eq!(board.heuristic() == 0, board.is_goal());
    }

    #[test]
    fn prop_key_identifies_board(a in permutation_strategy(), b in permutation_strategy()) {
        prop_assert_eq!(a.key() == b.key(), a == b);
    }

    /// Shuffled boards are always solved, and the path is a well-formed
    /// chain that replays from the initial board.
    #[test]
    fn prop_shuffled_boards_are_solved(steps in 0..40usize, seed in any::<u64>()) {
        let start = shuffled(3, steps, seed);
        let solution = resolve(&start);
        prop_assert!(solution.is_some());
        let solution = solution.unwrap();

        let root = &solution.path[0];
        prop_assert_eq!(root.g, 0);
        prop_assert!(root.parent.is_none());
        prop_assert_eq!(&root.board, &start);

        for pair in solution.path.windows(2) {
            prop_assert_eq!(pair[1].g, pair[0].g + 1);
            prop_assert!(pair[1].parent.is_some());
        }
        prop_assert!(solution.final_board().is_some_and(Board::is_goal));

        let mut board = start.clone();
        for (mv, node) in solution.moves().into_iter().zip(&solution.path[1..]) {
            board = board.apply(mv).unwrap();
            prop_assert_eq!(&board, &node.board);
        }
        prop_assert!(board.is_goal());
        prop_assert_eq!(solution.move_count(), solution.moves().len());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_optimal_mode_finds_shortest_path(steps in 0..16usize, seed in any::<u64>()) {
        let start = shuffled(3, steps, seed);
        let shortest = bfs_distance(&start);

        let mut engine = SearchEngine::new(SearchConfig::optimal());
        let solution = engine.resolve(&start).unwrap();
        prop_assert_eq!(solution.move_count(), shortest);

        let default_len = resolve(&start).unwrap().move_count();
        prop_assert!(default_len >= shortest);
    }
}
