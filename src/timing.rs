use std::time::{Duration, Instant};

/// Wall-clock timer over the monotonic clock. Successive readings from the
/// same stopwatch never go backwards.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn elapsed_ms(&self) -> f64 {
        as_ms(self.elapsed())
    }
}

pub fn as_ms(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readings_do_not_decrease() {
        let watch = Stopwatch::start();
        let mut last = Duration::ZERO;
        for _ in 0..1000 {
            let now = watch.elapsed();
            assert!(now >= last);
            last = now;
        }
        assert!(watch.elapsed_ms() >= 0.0);
    }

    #[test]
    fn test_as_ms() {
        assert_eq!(as_ms(Duration::from_millis(250)), 250.0);
    }
}
