//! Memory organization and filling algorithm for Argon2.
//!
//! This module implements the core memory-filling loop of Argon2. Memory
//! is organized as a matrix of lanes (rows) and columns, with each cell
//! containing a 1024-byte block. Within a slice the lanes are filled in
//! parallel; the end of each slice is a synchronization barrier.

use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;

use super::block::Block;
use super::core::Argon2Error;
use super::params::{Argon2Params, Variant, Version};
use super::reference::reference_position;

/// Number of slices per lane, the synchronization granularity.
pub(crate) const SYNC_POINTS: u32 = 4;

/// Pseudo-random words carried by one address block.
const ADDRESSES_PER_BLOCK: u32 = 128;

/// Memory layout parameters for Argon2.
///
/// The memory is organized as follows:
/// - Total memory is divided into `lanes` independent rows.
/// - Each lane contains `lane_len` blocks.
/// - Each lane is divided into 4 slices (sync points).
/// - Each slice contains `segment_len` blocks.
#[derive(Debug, Clone)]
pub(crate) struct MemoryLayout {
    pub lanes: u32,
    pub lane_len: u32,
    pub segment_len: u32,
    pub total_blocks: u32,
}

impl MemoryLayout {
    /// Derives the block geometry from the requested parameters.
    ///
    /// The requested KiB count is raised to the 8-blocks-per-lane minimum
    /// and truncated to a whole number of segments per lane.
    pub(crate) fn new(params: &Argon2Params) -> Self {
        let lanes = params.lanes;
        let min_blocks = 2 * SYNC_POINTS * lanes;
        let requested = params.mem_kib.max(min_blocks);
        let total_blocks = (requested / (SYNC_POINTS * lanes)) * (SYNC_POINTS * lanes);
        let lane_len = total_blocks / lanes;
        let segment_len = lane_len / SYNC_POINTS;

        Self {
            lanes,
            lane_len,
            segment_len,
            total_blocks,
        }
    }

    #[inline]
    pub(crate) fn index(&self, lane: u32, column: u32) -> usize {
        (lane * self.lane_len + column) as usize
    }

    /// Fills all memory blocks over the configured number of passes.
    ///
    /// Each pass iterates through the 4 slices in order, filling every
    /// lane's segment of the slice before moving on; that join is the
    /// barrier which makes cross-lane references well-defined. With a
    /// single lane the fill runs inline on the calling thread.
    ///
    /// A cancellation flag, when provided, is observed once per slice.
    pub(crate) fn fill(
        &self,
        memory: &mut [Block],
        params: &Argon2Params,
        cancel: Option<&AtomicBool>,
    ) -> Result<(), Argon2Error> {
        let shared = SliceView::new(memory);

        for pass in 0..params.time {
            for slice in 0..SYNC_POINTS {
                if let Some(flag) = cancel {
                    if flag.load(Ordering::Relaxed) {
                        return Err(Argon2Error::Cancelled);
                    }
                }

                if self.lanes == 1 {
                    self.fill_segment(&shared, pass, slice, 0, params);
                } else {
                    (0..self.lanes).into_par_iter().for_each(|lane| {
                        self.fill_segment(&shared, pass, slice, lane, params);
                    });
                }
            }
        }

        Ok(())
    }

    /// Fills one segment (the portion of a lane within a slice).
    ///
    /// For each block position, this function:
    /// 1. Determines J1, J2 (from an address block or the previous block)
    /// 2. Computes the reference block position from J1, J2
    /// 3. Computes the new block as G(previous, reference), XOR-folded
    ///    into the existing value on later passes of version 0x13
    fn fill_segment(
        &self,
        shared: &SliceView,
        pass: u32,
        slice: u32,
        lane: u32,
        params: &Argon2Params,
    ) {
        let data_independent = match params.variant {
            Variant::D => false,
            Variant::I => true,
            Variant::Id => pass == 0 && slice < 2,
        };

        let mut address_block = Block::ZERO;
        let mut counter = 0u32;

        if data_independent {
            counter += 1;
            address_block = Block::address_block(
                pass,
                lane,
                slice,
                self.total_blocks,
                params.time,
                params.variant,
                counter,
            );
        }

        // The first two columns of each lane are seeded from H0.
        let start = if pass == 0 && slice == 0 { 2 } else { 0 };

        for i in start..self.segment_len {
            let column = slice * self.segment_len + i;

            let prev_column = if column == 0 {
                self.lane_len - 1
            } else {
                column - 1
            };

            let (j1, j2) = if data_independent {
                if i != 0 && i % ADDRESSES_PER_BLOCK == 0 {
                    counter += 1;
                    address_block = Block::address_block(
                        pass,
                        lane,
                        slice,
                        self.total_blocks,
                        params.time,
                        params.variant,
                        counter,
                    );
                }
                let word = address_block.0[(i % ADDRESSES_PER_BLOCK) as usize];
                (word as u32, (word >> 32) as u32)
            } else {
                // Safety: `prev_column` belongs to this lane and was
                // written earlier in the fill order, so no other worker
                // holds it mutably.
                let word = unsafe { shared.block(self.index(lane, prev_column)) }.0[0];
                (word as u32, (word >> 32) as u32)
            };

            let (ref_lane, ref_column) = reference_position(pass, slice, lane, i, self, j1, j2);

            let cur = self.index(lane, column);
            let prev = self.index(lane, prev_column);
            let reference = self.index(ref_lane, ref_column);

            // Safety: the reference area excludes every position written
            // during the current slice on other lanes, and `prev` precedes
            // `cur` in this lane's fill order; `cur` is written by this
            // worker alone. The reads and the write never alias.
            let compressed = {
                let (prev_block, ref_block) =
                    unsafe { (shared.block(prev), shared.block(reference)) };
                Block::compress(prev_block, ref_block)
            };
            let out = unsafe { shared.block_mut(cur) };

            if pass == 0 || params.version == Version::V0x10 {
                *out = compressed;
            } else {
                out.in_place_xor(&compressed);
            }
        }
    }
}

/// Shared view of the block array used while one slice is being filled.
///
/// Workers share the array without locking: during a slice, lane `l`
/// writes only into its own segment, and every cross-lane read lands on
/// a block finished in an earlier slice (or earlier in `l`'s own fill
/// order). The accessors are unsafe because that invariant lives in the
/// fill schedule, not in the types.
struct SliceView {
    ptr: *mut Block,
    len: usize,
}

unsafe impl Sync for SliceView {}

impl SliceView {
    fn new(blocks: &mut [Block]) -> Self {
        Self {
            ptr: blocks.as_mut_ptr(),
            len: blocks.len(),
        }
    }

    /// Safety: no worker may hold `idx` mutably.
    unsafe fn block(&self, idx: usize) -> &Block {
        debug_assert!(idx < self.len);
        &*self.ptr.add(idx)
    }

    /// Safety: `idx` must be owned exclusively by the calling worker.
    #[allow(clippy::mut_from_ref)]
    unsafe fn block_mut(&self, idx: usize) -> &mut Block {
        debug_assert!(idx < self.len);
        &mut *self.ptr.add(idx)
    }
}
