//! Reference block position computation for Argon2.
//!
//! When filling a block at position (lane, column), Argon2 needs to
//! select a reference block to mix with the previous block. The selection
//! uses the pseudo-random values J1 and J2, with constraints ensuring the
//! referenced block has already been computed: on the very first slice
//! only earlier blocks of the same lane, afterwards any lane but only
//! positions finished before the current slice began.

use super::memory::MemoryLayout;

/// Computes the reference block position for the Argon2 filling algorithm.
///
/// Given the current position and pseudo-random values J1, J2, determines
/// which previously-computed block is the second input to the compression
/// function G. The mapping over the reference area is non-uniform,
/// biased toward recently computed blocks.
///
/// Returns `(reference_lane, reference_column)`.
pub(crate) fn reference_position(
    pass: u32,
    slice: u32,
    lane: u32,
    index_in_segment: u32,
    layout: &MemoryLayout,
    j1: u32,
    j2: u32,
) -> (u32, u32) {
    let segment_len = layout.segment_len;
    let lane_len = layout.lane_len;

    // The first slice of the first pass may only look back into its own
    // lane; nothing else has been written yet.
    let ref_lane = if pass == 0 && slice == 0 {
        lane
    } else {
        j2 % layout.lanes
    };
    let same_lane = ref_lane == lane;

    let area = match (pass, same_lane) {
        // First pass: everything finished so far this pass.
        (0, true) => slice * segment_len + index_in_segment - 1,
        (0, false) => slice * segment_len - u32::from(index_in_segment == 0),
        // Later passes: the three finished slices, plus progress within
        // the current segment on the same lane.
        (_, true) => lane_len - segment_len + index_in_segment - 1,
        (_, false) => lane_len - segment_len - u32::from(index_in_segment == 0),
    };

    // x = J1² / 2³², then position = area − 1 − (area·x / 2³²). Squaring
    // skews the distribution toward the end of the reference area.
    let j1 = j1 as u64;
    let x = (j1 * j1) >> 32;
    let relative = (area as u64) - 1 - (((area as u64) * x) >> 32);

    let start = if pass == 0 {
        0
    } else {
        ((slice + 1) * segment_len) % lane_len
    };

    let ref_column = (start + relative as u32) % lane_len;

    (ref_lane, ref_column)
}
