//! Tests for rendering progress tracking

#[cfg(test)]
mod tests {
    use texture_generator::io::progress::RenderProgress;

    // Tests rows are counted from the start of a pass
    // Verified by not resetting the position on start
    #[test]
    fn test_progress_counts_rows() {
        let progress = RenderProgress::hidden();
        progress.start(10);
        progress.advance();
        progress.advance();
        assert_eq!(progress.position(), 2);

        progress.start(5);
        assert_eq!(progress.position(), 0);
        progress.finish();
    }

    // Tests advancing from worker threads
    // Verified by requiring exclusive access to advance
    #[test]
    fn test_progress_shared_between_threads() {
        let progress = RenderProgress::default();
        progress.start(8);

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    progress.advance();
                    progress.advance();
                });
            }
        });

        assert_eq!(progress.position(), 8);
    }

    // Tests quiet mode hides the bar while still counting
    // Verified by returning a visible bar when quiet
    #[test]
    fn test_quiet_progress_still_counts() {
        let progress = RenderProgress::for_quiet(true);
        progress.start(3);
        progress.advance();
        assert_eq!(progress.position(), 1);
    }
}
