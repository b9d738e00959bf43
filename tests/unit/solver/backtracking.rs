//! Tests for exhaustive backtracking search and its node budget

#[cfg(test)]
mod tests {
    use knights_tour::TourError;
    use knights_tour::board::{Board, Position};
    use knights_tour::solver::{BacktrackingSolver, TourSolver, solve_backtracking};
    use ndarray::arr2;

    // First closed tour reachable from (2, 0) under the fixed move order
    const FIRST_TOUR_FROM_2_0: [[u32; 6]; 6] = [
        [25, 36, 13, 16, 23, 6],
        [34, 17, 24, 7, 12, 15],
        [1, 26, 35, 14, 5, 22],
        [18, 33, 20, 29, 8, 11],
        [27, 2, 31, 10, 21, 4],
        [32, 19, 28, 3, 30, 9],
    ];

    // Tests the search reports the first tour under the fixed move order
    // Verified by trying offsets in reverse order
    #[test]
    fn test_first_tour_in_move_order() {
        let outcome = solve_backtracking(Position::new(2, 0), 6);
        assert!(outcome.success);
        assert!(outcome.board.is_closed_tour());
        assert_eq!(outcome.board.cells(), &arr2(&FIRST_TOUR_FROM_2_0));
        assert_eq!(outcome.steps, 14_020);
    }

    // Tests identical inputs give identical outcomes
    // Verified by shuffling neighbor order per call
    #[test]
    fn test_deterministic() {
        let first = solve_backtracking(Position::new(3, 2), 6);
        let second = solve_backtracking(Position::new(3, 2), 6);
        assert!(first.success);
        assert!(first.board.is_closed_tour());
        assert_eq!(first, second);
    }

    // Tests off-board starts fail without touching the board
    // Verified by clamping the start onto the board
    #[test]
    fn test_out_of_bounds_start() {
        for start in [
            Position::new(-1, 0),
            Position::new(0, -1),
            Position::new(6, 6),
            Position::new(6, 0),
        ] {
            let outcome = solve_backtracking(start, 6);
            assert!(!outcome.success);
            assert_eq!(outcome.board, Board::new(6));
            assert_eq!(outcome.steps, 0);
        }
    }

    // Tests an exhausted search leaves an all-zero board
    // Verified by skipping the undo after the last neighbor
    #[test]
    fn test_exhaustion_restores_board() {
        let outcome = solve_backtracking(Position::new(2, 2), 5);
        assert!(!outcome.success);
        assert!(outcome.board.is_empty());
        assert_eq!(outcome.steps, 641_577);
    }

    // Tests boards too small for a closed tour fail cleanly
    // Verified by reporting success for any complete path
    #[test]
    fn test_small_boards_have_no_closed_tour() {
        for size in 1..=4 {
            let outcome = solve_backtracking(Position::new(0, 0), size);
            assert!(!outcome.success, "size {size} should have no closed tour");
            assert!(outcome.board.is_empty());
        }
        assert!(!solve_backtracking(Position::new(0, 0), 0).success);
    }

    // Tests a budget large enough for the search changes nothing
    // Verified by counting nodes twice per visit
    #[test]
    fn test_sufficient_budget() {
        let budgeted = BacktrackingSolver::with_node_budget(100_000)
            .search(Position::new(2, 0), 6)
            .expect("tour found within budget");
        assert_eq!(budgeted, solve_backtracking(Position::new(2, 0), 6));
    }

    // Tests budget exhaustion is reported as an error
    // Verified by treating budget exhaustion as a dead end
    #[test]
    fn test_budget_exhaustion() {
        let solver = BacktrackingSolver::with_node_budget(1_000);
        assert_eq!(solver.node_budget(), Some(1_000));
        assert_eq!(
            solver.search(Position::new(0, 0), 6),
            Err(TourError::SearchBudgetExhausted { budget: 1_000 })
        );
        assert!(
            BacktrackingSolver::with_node_budget(0)
                .search(Position::new(0, 0), 6)
                .is_err()
        );
    }

    // Tests the solver trait maps budget exhaustion to an empty failure
    // Verified by returning the partially searched board
    #[test]
    fn test_budget_exhaustion_through_trait() {
        let mut solver = BacktrackingSolver::with_node_budget(1_000);
        let outcome = solver.solve(Position::new(0, 0), 6);
        assert!(!outcome.success);
        assert!(outcome.aborted);
        assert_eq!(outcome.steps, 1_000);
        assert!(outcome.board.is_empty());
        assert_eq!(BacktrackingSolver::new().node_budget(), None);
    }

    // Tests exhausted and completed searches are not marked as aborted
    // Verified by marking every failed attempt as aborted
    #[test]
    fn test_settled_searches_are_not_aborted() {
        let budget = BacktrackingSolver::with_node_budget(1_000_000);
        assert!(!budget.attempt(Position::new(2, 2), 5).aborted);
        assert!(!budget.attempt(Position::new(2, 0), 6).aborted);
        assert!(!budget.attempt(Position::new(-1, 0), 6).aborted);
    }

    // Tests deep paths on large boards do not exhaust the thread's stack
    // Verified by recursing once per placed square
    #[test]
    fn test_deep_search_on_large_board() {
        for size in [128, 160] {
            let solver = BacktrackingSolver::with_node_budget(20_000);
            assert_eq!(
                solver.search(Position::new(0, 0), size),
                Err(TourError::SearchBudgetExhausted { budget: 20_000 })
            );
            let outcome = solver.attempt(Position::new(0, 0), size);
            assert!(outcome.aborted);
            assert!(outcome.board.is_empty());
            assert_eq!(outcome.board.size(), size);
        }
    }

    // Tests a long search fits in a thread with a small stack
    // Verified by recursing once per placed square
    #[test]
    fn test_deep_search_runs_in_a_small_thread() {
        let handle = std::thread::Builder::new()
            .stack_size(256 * 1024)
            .spawn(|| {
                BacktrackingSolver::with_node_budget(50_000).attempt(Position::new(0, 0), 200)
            })
            .expect("spawn search thread");
        let outcome = handle.join().expect("search thread completes");
        assert!(outcome.aborted);
        assert_eq!(outcome.steps, 50_000);
    }

    // Tests an off-board start is not an error even with a budget
    // Verified by checking the budget before the start
    #[test]
    fn test_budget_with_out_of_bounds_start() {
        let outcome = BacktrackingSolver::with_node_budget(0)
            .search(Position::new(9, 9), 6)
            .expect("off-board starts are not errors");
        assert!(!outcome.success);
        assert!(outcome.board.is_empty());
    }
}
