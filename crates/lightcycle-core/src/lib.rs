pub mod controller;
pub mod events;
pub mod game_trait;
pub mod input;
pub mod player;
pub mod schedule;
pub mod surface;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use std::time::Duration;

    use crate::player::PlayerColor;
    use crate::schedule::TickScheduler;
    use crate::surface::Surface;

    /// Scheduler that never fires on its own. Tests call
    /// `GameController::on_tick` directly and inspect the recorded
    /// start/stop calls.
    #[derive(Debug, Default)]
    pub struct ManualScheduler {
        period: Option<Duration>,
        starts: u32,
        stops: u32,
    }

    impl ManualScheduler {
        /// Number of `start` calls so far.
        pub fn starts(&self) -> u32 {
            self.starts
        }

        /// Number of `stop` calls that actually stopped a running schedule.
        pub fn stops(&self) -> u32 {
            self.stops
        }
    }

    impl TickScheduler for ManualScheduler {
        fn start(&mut self, period: Duration) {
            self.period = Some(period);
            self.starts += 1;
        }

        fn stop(&mut self) {
            if self.period.take().is_some() {
                self.stops += 1;
            }
        }

        fn is_running(&self) -> bool {
            self.period.is_some()
        }

        fn period(&self) -> Option<Duration> {
            self.period
        }
    }

    /// A single call made against a [`RecordingSurface`].
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum DrawOp {
        Clear,
        Fill {
            x: i32,
            y: i32,
            width: u32,
            height: u32,
            color: PlayerColor,
        },
    }

    /// Surface that records every draw call instead of painting pixels.
    #[derive(Debug)]
    pub struct RecordingSurface {
        width: u32,
        height: u32,
        ops: Vec<DrawOp>,
    }

    impl RecordingSurface {
        pub fn new(width: u32, height: u32) -> Self {
            Self {
                width,
                height,
                ops: Vec::new(),
            }
        }

        pub fn ops(&self) -> &[DrawOp] {
            &self.ops
        }

        /// How many times the surface was cleared (one per rendered frame).
        pub fn clears(&self) -> usize {
            self.ops.iter().filter(|op| **op == DrawOp::Clear).count()
        }

        /// Draw calls issued since the most recent clear.
        pub fn last_frame(&self) -> &[DrawOp] {
            match self.ops.iter().rposition(|op| *op == DrawOp::Clear) {
                Some(i) => &self.ops[i + 1..],
                None => &self.ops,
            }
        }

        /// Color of the pixel at `(px, py)` in the last frame, if anything
        /// was painted there.
        pub fn color_at(&self, px: i32, py: i32) -> Option<PlayerColor> {
            self.last_frame().iter().rev().find_map(|op| match *op {
                DrawOp::Fill {
                    x,
                    y,
                    width,
                    height,
                    color,
                } if px >= x
                    && py >= y
                    && px < x + width as i32
                    && py < y + height as i32 =>
                {
                    Some(color)
                },
                _ => None,
            })
        }
    }

    impl Surface for RecordingSurface {
        fn size(&self) -> (u32, u32) {
            (self.width, self.height)
        }

        fn clear(&mut self) {
            self.ops.push(DrawOp::Clear);
        }

        fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: PlayerColor) {
            self.ops.push(DrawOp::Fill {
                x,
                y,
                width,
                height,
                color,
            });
        }
    }
}
