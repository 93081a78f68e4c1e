//! Autoplay state machine for the highlights carousel.
//!
//! The carousel does not own a timer. Scheduling is requested through
//! [`CarouselCommand::Schedule`], tagged with a generation. Whenever the
//! carousel cancels, suspends, resets or advances it bumps the generation,
//! so a firing that was already on its way is recognised and ignored.

use std::time::Duration;

use catalog_logging::catalog_debug;

/// Interval between automatic advances.
pub const AUTOPLAY_DELAY: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CarouselPhase {
    #[default]
    Idle,
    Running,
    Suspended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselCommand {
    Schedule { generation: u64, delay: Duration },
    Cancel,
    MoveTo { index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    phase: CarouselPhase,
    current_index: usize,
    len: usize,
    generation: u64,
    delay: Duration,
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new(AUTOPLAY_DELAY)
    }
}

impl Carousel {
    pub fn new(delay: Duration) -> Self {
        Self {
            phase: CarouselPhase::Idle,
            current_index: 0,
            len: 0,
            generation: 0,
            delay,
        }
    }

    pub fn phase(&self) -> CarouselPhase {
        self.phase
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Swaps in a new highlights list of `len` entries. Always cancels and
    /// returns to index 0; call [`Carousel::start`] afterwards. A carousel
    /// held by the user stays suspended until the interaction ends.
    pub fn replace(&mut self, len: usize) -> Vec<CarouselCommand> {
        let held = self.phase == CarouselPhase::Suspended;
        let commands = self.reset();
        self.len = len;
        if held {
            self.phase = CarouselPhase::Suspended;
        }
        commands
    }

    /// Cancels any pending advance and forgets the highlights list.
    pub fn teardown(&mut self) -> Vec<CarouselCommand> {
        let commands = self.reset();
        self.len = 0;
        commands
    }

    /// Idle -> running. Does nothing when already running, while the user
    /// holds the carousel, or when there is nothing to show.
    pub fn start(&mut self) -> Vec<CarouselCommand> {
        if self.phase != CarouselPhase::Idle || self.len == 0 {
            return Vec::new();
        }
        self.phase = CarouselPhase::Running;
        vec![self.schedule()]
    }

    /// Handles a timer firing tagged with `generation`.
    pub fn fire(&mut self, generation: u64) -> Vec<CarouselCommand> {
        if self.phase != CarouselPhase::Running || generation != self.generation || self.len == 0
        {
            catalog_debug!(
                "carousel ignored firing gen={} (current gen={}, phase={:?})",
                generation,
                self.generation,
                self.phase
            );
            return Vec::new();
        }
        let next = (self.current_index + 1) % self.len;
        self.current_index = next;
        vec![CarouselCommand::MoveTo { index: next }, self.schedule()]
    }

    pub fn on_interaction_start(&mut self) -> Vec<CarouselCommand> {
        match self.phase {
            CarouselPhase::Suspended => Vec::new(),
            CarouselPhase::Idle | CarouselPhase::Running => {
                self.phase = CarouselPhase::Suspended;
                self.generation += 1;
                vec![CarouselCommand::Cancel]
            }
        }
    }

    pub fn on_interaction_end(&mut self) -> Vec<CarouselCommand> {
        if self.phase != CarouselPhase::Suspended {
            return Vec::new();
        }
        self.phase = CarouselPhase::Idle;
        self.start()
    }

    /// Records where a manual swipe came to rest.
    pub fn settle(&mut self, index: usize) {
        if self.len > 0 {
            self.current_index = index.min(self.len - 1);
        }
    }

    fn reset(&mut self) -> Vec<CarouselCommand> {
        self.phase = CarouselPhase::Idle;
        self.current_index = 0;
        self.generation += 1;
        vec![CarouselCommand::Cancel]
    }

    fn schedule(&mut self) -> CarouselCommand {
        self.generation += 1;
        CarouselCommand::Schedule {
            generation: self.generation,
            delay: self.delay,
        }
    }
}
