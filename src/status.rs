//! Weighted random status assignment
//!
//! New applications draw accepted/rejected/pending at 30/20/50. The draw is
//! generic over the RNG so tests can pin outcomes with a seeded generator.

use rand::Rng;

use crate::consts::{WEIGHT_ACCEPTED, WEIGHT_PENDING, WEIGHT_REJECTED};
use crate::record::Status;

/// Draw table, scanned in order against a cumulative weight
const WEIGHTED: [(Status, f32); 3] = [
    (Status::Accepted, WEIGHT_ACCEPTED),
    (Status::Rejected, WEIGHT_REJECTED),
    (Status::Pending, WEIGHT_PENDING),
];

/// Roll a status with the 30/20/50 weighting
pub fn roll_status<R: Rng>(rng: &mut R) -> Status {
    let draw = rng.random::<f32>();

    let mut cumulative = 0.0;
    for (status, weight) in WEIGHTED {
        cumulative += weight;
        if draw <= cumulative {
            return status;
        }
    }

    // f32 rounding can leave the cumulative sum a hair under 1.0
    Status::Pending
}
