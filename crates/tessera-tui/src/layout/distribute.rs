//! Integer space distribution along one axis
//!
//! Space is handed out one cell at a time, in child order, over five phases:
//!
//! 1. every child toward its minimum size hint
//! 2. `Minimum` children toward their size hint
//! 3. `Preferred` and `Maximum` children toward their size hint
//! 4. `Expanding` children, without bound
//! 5. leftovers to the currently smallest `Preferred`/`Minimum` child
//!
//! Every phase stops as soon as no space remains, so the result always sums
//! to the available space (a child may end up below its minimum when space
//! is short).

use tracing::debug;

use super::SizePolicy;

/// One child's demands along the axis being laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct LayoutItem {
    /// Minimum size hint
    pub min: u16,
    /// Size hint
    pub hint: u16,
    /// Size policy along this axis
    pub policy: SizePolicy,
}

impl LayoutItem {
    pub const fn new(min: u16, hint: u16, policy: SizePolicy) -> Self {
        Self { min, hint, policy }
    }
}

/// Round-robin one cell at a time to eligible children below their target
fn grow(sizes: &mut [u16], remaining: &mut u16, mut target: impl FnMut(usize) -> Option<u16>) {
    loop {
        let mut grew = false;
        for (i, size) in sizes.iter_mut().enumerate() {
            if *remaining == 0 {
                return;
            }
            if let Some(target) = target(i) {
                if *size < target {
                    *size += 1;
                    *remaining -= 1;
                    grew = true;
                }
            }
        }
        if !grew {
            return;
        }
    }
}

/// Give each unit to the smallest eligible child, earliest first on ties
fn fill_smallest(sizes: &mut [u16], remaining: &mut u16, eligible: impl Fn(usize) -> bool) {
    while *remaining > 0 {
        let smallest = (0..sizes.len())
            .filter(|&i| eligible(i))
            .min_by_key(|&i| (sizes[i], i));
        match smallest {
            Some(i) => {
                sizes[i] += 1;
                *remaining -= 1;
            }
            None => return,
        }
    }
}

/// Phases 1 to 4; returns sizes and the space still unassigned
fn allocate_hints(items: &[LayoutItem], space: u16) -> (Vec<u16>, u16) {
    let mut sizes = vec![0u16; items.len()];
    let mut remaining = space;

    grow(&mut sizes, &mut remaining, |i| Some(items[i].min));
    grow(&mut sizes, &mut remaining, |i| {
        (items[i].policy == SizePolicy::Minimum).then_some(items[i].hint)
    });
    grow(&mut sizes, &mut remaining, |i| {
        matches!(items[i].policy, SizePolicy::Preferred | SizePolicy::Maximum)
            .then_some(items[i].hint)
    });
    grow(&mut sizes, &mut remaining, |i| {
        (items[i].policy == SizePolicy::Expanding).then_some(u16::MAX)
    });

    (sizes, remaining)
}

/// Hand out whatever is left: to `Preferred`/`Minimum` children if there are
/// any, otherwise to everyone
fn allocate_leftover(items: &[LayoutItem], sizes: &mut [u16], remaining: &mut u16) {
    fill_smallest(sizes, remaining, |i| items[i].policy.takes_leftover());
    fill_smallest(sizes, remaining, |_| true);
}

/// Split `space` among `items`
///
/// The result has one extent per item and, for a nonempty list, sums to
/// exactly `space`.
pub fn distribute(items: &[LayoutItem], space: u16) -> Vec<u16> {
    let (mut sizes, mut remaining) = allocate_hints(items, space);
    allocate_leftover(items, &mut sizes, &mut remaining);
    debug!(space, ?sizes, "distributed");
    sizes
}

/// Split `space` among `items`, sharing leftovers by stretch weight
///
/// `stretch[i]` is the weight of item `i` (missing entries are 0). When any
/// weight is nonzero, leftover space goes only to weighted items: each round
/// gives every weighted item `min(remaining, weight)` cells, left to right.
/// With all weights zero this is [`distribute`].
pub fn distribute_stretched(items: &[LayoutItem], stretch: &[u16], space: u16) -> Vec<u16> {
    let weight = |i: usize| stretch.get(i).copied().unwrap_or(0);
    if (0..items.len()).all(|i| weight(i) == 0) {
        return distribute(items, space);
    }

    let (mut sizes, mut remaining) = allocate_hints(items, space);
    while remaining > 0 {
        for (i, size) in sizes.iter_mut().enumerate() {
            let share = remaining.min(weight(i));
            *size += share;
            remaining -= share;
        }
    }
    debug!(space, ?sizes, ?stretch, "distributed with stretch");
    sizes
}
