// Mock draft simulation: the pick clock state machine and the async runner
// that drives it from a wall-clock timer.

pub mod clock;
pub mod runner;
