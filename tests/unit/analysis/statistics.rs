//! Tests for the trial harness and success rate aggregation

#[cfg(test)]
mod tests {
    use knights_tour::TourError;
    use knights_tour::analysis::statistics::{TrialRunner, run_trials};
    use knights_tour::board::Position;
    use knights_tour::io::configuration::MAX_BOARD_SIZE;
    use knights_tour::solver::TourOutcome;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn succeed(_start: Position, size: usize) -> TourOutcome {
        TourOutcome {
            success: true,
            ..TourOutcome::rejected(size)
        }
    }

    fn succeed_on_first_row(start: Position, size: usize) -> TourOutcome {
        TourOutcome {
            success: start.x == 0,
            ..TourOutcome::rejected(size)
        }
    }

    fn abort_off_first_row(start: Position, size: usize) -> TourOutcome {
        if start.x == 0 {
            succeed(start, size)
        } else {
            TourOutcome::budget_exhausted(size, 10)
        }
    }

    // Tests runner parameter validation
    // Verified by accepting zero trials
    #[test]
    fn test_runner_rejects_invalid_parameters() {
        for (size, trials, parameter) in [
            (0, 10, "size"),
            (MAX_BOARD_SIZE + 1, 10, "size"),
            (8, 0, "trials"),
        ] {
            assert!(matches!(
                TrialRunner::new(size, trials),
                Err(TourError::InvalidParameter { parameter: p, .. }) if p == parameter
            ));
        }
        let runner = TrialRunner::new(8, 10).expect("valid parameters");
        assert_eq!((runner.size(), runner.trials(), runner.seed()), (8, 10, None));
    }

    // Tests the tally and rate for an always-successful solver
    // Verified by dividing by the success count instead of the trial count
    #[test]
    fn test_all_successful() {
        let stats = run_trials(&mut succeed, 6, 40);
        assert_eq!(stats.count, 40);
        assert_eq!(stats.trials, 40);
        assert_eq!(stats.failures(), 0);
        assert!((stats.rate - 1.0).abs() < f64::EPSILON);
        assert!(stats.elapsed_seconds >= 0.0);
    }

    // Tests every trial receives an on-board start and a board of the right size
    // Verified by drawing coordinates in 0..=size
    #[test]
    fn test_starts_are_on_board() {
        let mut starts = Vec::new();
        let mut solver = |start: Position, size: usize| {
            starts.push(start);
            TourOutcome::rejected(size)
        };
        let stats = run_trials(&mut solver, 3, 300);
        assert_eq!(stats.count, 0);
        assert!(stats.rate.abs() < f64::EPSILON);
        assert_eq!(starts.len(), 300);
        assert!(starts.iter().all(|start| start.in_bounds(3)));
        assert!(starts.iter().any(|start| *start == Position::new(2, 2)));
    }

    // Tests empty batches and empty boards report a zero rate without calling the solver
    // Verified by dividing by zero trials
    #[test]
    fn test_degenerate_batches() {
        let mut calls = 0;
        let mut solver = |_start: Position, size: usize| {
            calls += 1;
            TourOutcome::rejected(size)
        };
        let empty = run_trials(&mut solver, 8, 0);
        assert_eq!((empty.count, empty.trials), (0, 0));
        assert!(empty.rate.abs() < f64::EPSILON);

        let no_board = run_trials(&mut solver, 0, 5);
        assert_eq!((no_board.count, no_board.failures()), (0, 5));
        assert_eq!(calls, 0);
    }

    // Tests seeded batches draw the same starts
    // Verified by ignoring the seed in run_with_progress
    #[test]
    fn test_seeded_runs_are_reproducible() {
        let runner = TrialRunner::new(8, 50).expect("valid").with_seed(42);
        let collect = || {
            let mut starts = Vec::new();
            runner.run(&mut |start: Position, size: usize| {
                starts.push(start);
                TourOutcome::rejected(size)
            });
            starts
        };
        assert_eq!(collect(), collect());
        assert_eq!(runner.seed(), Some(42));
    }

    // Tests the progress callback sees every trial result
    // Verified by reporting only successes
    #[test]
    fn test_progress_callback() {
        let runner = TrialRunner::new(4, 64).expect("valid").with_seed(1);
        let mut reported = Vec::new();
        let stats = runner.run_with_progress(&mut succeed_on_first_row, |success| {
            reported.push(success);
        });
        assert_eq!(reported.len(), 64);
        assert_eq!(reported.iter().filter(|&&success| success).count(), stats.count);
    }

    // Tests seeded parallel batches agree with each other
    // Verified by seeding every trial with the same value
    #[test]
    fn test_parallel_seeded_runs_agree() {
        let runner = TrialRunner::new(4, 200).expect("valid").with_seed(9);
        let reported = AtomicUsize::new(0);
        let first = runner.run_parallel(succeed_on_first_row, |_| {
            reported.fetch_add(1, Ordering::Relaxed);
        });
        let second = runner.run_parallel(succeed_on_first_row, |_| {});
        assert_eq!(first.count, second.count);
        assert_eq!(reported.load(Ordering::Relaxed), 200);
        assert!(first.count > 0 && first.count < 200);
    }

    // Tests parallel and sequential runners agree on a deterministic solver
    // Verified by counting failures in the parallel sum
    #[test]
    fn test_parallel_matches_sequential_for_constant_solver() {
        let runner = TrialRunner::new(5, 100).expect("valid");
        let parallel = runner.run_parallel(succeed, |_| {});
        let sequential = runner.run(&mut succeed);
        assert_eq!(parallel.count, sequential.count);
        assert!((parallel.rate - 1.0).abs() < f64::EPSILON);
    }

    // Tests aborted trials are tallied apart from failures in both runners
    // Verified by counting aborted outcomes as plain failures
    #[test]
    fn test_aborted_trials_are_not_failures() {
        let runner = TrialRunner::new(4, 100).expect("valid").with_seed(3);
        let sequential = runner.run(&mut abort_off_first_row);
        let parallel = runner.run_parallel(abort_off_first_row, |_| {});

        for stats in [sequential, parallel] {
            assert_eq!(stats.count + stats.aborted, 100);
            assert_eq!(stats.failures(), 0);
            assert_eq!(stats.decided(), stats.count);
            assert!(stats.aborted > 0);
        }

        let all_aborted = run_trials(
            &mut |_start: Position, size: usize| TourOutcome::budget_exhausted(size, 1),
            4,
            10,
        );
        assert_eq!((all_aborted.count, all_aborted.aborted), (0, 10));
        assert_eq!((all_aborted.failures(), all_aborted.decided()), (0, 0));
    }
}
