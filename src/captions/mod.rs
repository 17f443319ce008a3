/*!
 * Caption construction: line packing and timeline allocation.
 *
 * - `packer`: splits a sentence's tokens into on-screen lines
 * - `timeline`: gives each line a start and end time
 */

pub mod packer;
pub mod timeline;

pub use packer::LinePacker;
pub use timeline::{DEFAULT_SECONDS_PER_LINE, Timeline, TimelineAllocator};
