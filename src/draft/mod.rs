// Draft domain: snake order arithmetic, the immutable draft order, and the
// append-only record of made picks.

pub mod order;
pub mod pick;
pub mod snake;
pub mod state;
