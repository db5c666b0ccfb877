//! Linked percentage sliders.
//!
//! The response-length form shows three sliders (short, medium, long) that
//! must always add up to 100. Moving one slider redistributes the difference
//! over the two others:
//!
//! - growing a slider takes the surplus from the others in proportion to
//!   their current share,
//! - shrinking a slider hands the freed amount out in equal parts.
//!
//! Rounding can leave the total one point off; the residue is pushed onto the
//! first other slider that can absorb it. With a balanced input this always
//! succeeds. With an unbalanced input the correction is best effort and the
//! result may still miss 100.

use serde::{Deserialize, Serialize};
use strum::Display;

use super::model::ResponseLength;

const MIN: f64 = 0.0;
const MAX: f64 = ResponseLength::TOTAL as f64;

/// One of the three response-length sliders.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[serde(rename_all = "snake_case")]
pub enum LengthField {
    Short,
    Medium,
    Long,
}

impl LengthField {
    pub const ALL: [LengthField; 3] = [LengthField::Short, LengthField::Medium, LengthField::Long];

    fn index(self) -> usize {
        match self {
            LengthField::Short => 0,
            LengthField::Medium => 1,
            LengthField::Long => 2,
        }
    }

    /// The two sliders that absorb a change of `self`, in display order.
    pub fn others(self) -> [LengthField; 2] {
        match self {
            LengthField::Short => [LengthField::Medium, LengthField::Long],
            LengthField::Medium => [LengthField::Short, LengthField::Long],
            LengthField::Long => [LengthField::Short, LengthField::Medium],
        }
    }
}

fn clamp(value: f64) -> f64 {
    value.clamp(MIN, MAX)
}

/// Sets `field` to `new_value` and rebalances the other two sliders.
///
/// `new_value` is clamped to `[0, 100]`. Setting a slider to its current
/// value returns `current` untouched.
pub fn allocate(current: ResponseLength, field: LengthField, new_value: u8) -> ResponseLength {
    let mut values = [
        f64::from(current.short),
        f64::from(current.medium),
        f64::from(current.long),
    ];
    let changed = field.index();
    let new_value = clamp(f64::from(new_value));
    let delta = new_value - values[changed];

    if delta == 0.0 {
        return current;
    }

    let others = field.others().map(LengthField::index);
    let other_total: f64 = others.iter().map(|&i| values[i]).sum();

    if delta > 0.0 {
        // Nothing left to take from when both others are already at zero.
        if other_total > 0.0 {
            for &i in &others {
                let adjustment = (delta * values[i] / other_total).round();
                values[i] = clamp(values[i] - adjustment);
            }
        }
    } else {
        let per_other = delta.abs() / others.len() as f64;
        for &i in &others {
            values[i] = clamp(values[i] + per_other);
        }
    }

    values[changed] = new_value;

    let mut rounded = values.map(|v| clamp(v.round()));
    let total: f64 = rounded.iter().sum();
    if total != MAX {
        let correction = MAX - total;
        if let Some(&i) = others
            .iter()
            .find(|&&i| (MIN..=MAX).contains(&(rounded[i] + correction)))
        {
            rounded[i] += correction;
        }
    }

    ResponseLength::new(rounded[0] as u8, rounded[1] as u8, rounded[2] as u8)
}
